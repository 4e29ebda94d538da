use crate::processor::{
    coerce::coerce,
    condition::{Condition, OperatorRegistry},
    table::{Row, Table},
    ProcessorError,
};

/// Rows of `table` satisfying `condition`, in original order.
///
/// An empty condition string is a pass-through: every row is returned and
/// the parser is never invoked.
///
/// # Errors
/// [`ProcessorError::InvalidCondition`] when the string matches no
/// registered operator.
///
/// # Example
/// ```no_run
/// # use csv_query::processor::{filter, OperatorRegistry, Table};
/// let table = Table::from_path("data.csv".as_ref()).unwrap();
/// let rows = filter(&table, "price>500", &OperatorRegistry::default()).unwrap();
/// ```
pub fn filter<'a>(
    table: &'a Table,
    condition: &str,
    operators: &OperatorRegistry,
) -> Result<Vec<&'a Row>, ProcessorError> {
    if condition.is_empty() {
        return Ok(table.rows().iter().collect());
    }
    let condition = operators.parse(condition)?;
    apply(table, &condition, operators)
}

/// Applies an already-parsed condition to `table`.
///
/// Rows missing the condition's column are skipped, never an error. The
/// cell/literal coercion is redone per row (see
/// [`coerce`](crate::processor::coerce::coerce)).
///
/// # Errors
/// [`ProcessorError::UnknownOperator`] when the condition's symbol is not in
/// the registry.
pub fn apply<'a>(
    table: &'a Table,
    condition: &Condition,
    operators: &OperatorRegistry,
) -> Result<Vec<&'a Row>, ProcessorError> {
    let predicate = operators
        .predicate(&condition.operator)
        .ok_or_else(|| ProcessorError::UnknownOperator(condition.operator.clone()))?;

    let mut matched = Vec::new();
    for row in table.rows() {
        let Some(cell) = table.value(row, &condition.column) else {
            continue;
        };
        if predicate(&coerce(cell, &condition.literal)) {
            matched.push(row);
        }
    }
    Ok(matched)
}
