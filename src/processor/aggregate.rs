use crate::processor::{
    table::{Row, Table},
    ProcessorError,
};

/// Reduction over the numeric cells collected from one column.
pub type AggregateFn = fn(&[f64]) -> f64;

/// Ordered mapping from aggregation name to reduction.
///
/// Defaults to `avg`, `min` and `max`; extended by construction, like
/// [`OperatorRegistry`](crate::processor::OperatorRegistry).
#[derive(Debug, Clone)]
pub struct AggregationRegistry {
    entries: Vec<(String, AggregateFn)>,
}

impl Default for AggregationRegistry {
    fn default() -> Self {
        AggregationRegistry {
            entries: Vec::new(),
        }
        .with("avg", |values| {
            values.iter().sum::<f64>() / values.len() as f64
        })
        .with("min", |values| {
            values.iter().fold(f64::INFINITY, |a, &b| a.min(b))
        })
        .with("max", |values| {
            values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))
        })
    }
}

impl AggregationRegistry {
    /// Returns a registry extended with one more reduction.
    pub fn with(mut self, name: &str, reduction: AggregateFn) -> Self {
        self.entries.push((name.to_string(), reduction));
        self
    }

    fn reduction(&self, name: &str) -> Option<AggregateFn> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| *f)
    }
}

/// Reduces the named column of `rows` to one number.
///
/// Cells that are absent or do not parse as `f64` are skipped. `Ok(None)`
/// means no cell contributed; callers must render that distinctly from a
/// real aggregate of 0.0. No row or table state is touched.
///
/// # Errors
/// [`ProcessorError::UnknownAggregation`] when `name` is not in the
/// registry, even for an empty row set.
pub fn aggregate(
    table: &Table,
    rows: &[&Row],
    name: &str,
    column: &str,
    registry: &AggregationRegistry,
) -> Result<Option<f64>, ProcessorError> {
    let reduction = registry
        .reduction(name)
        .ok_or_else(|| ProcessorError::UnknownAggregation(name.to_string()))?;

    let values: Vec<f64> = rows
        .iter()
        .filter_map(|row| table.value(row, column))
        .filter_map(|cell| cell.parse::<f64>().ok())
        .collect();

    if values.is_empty() {
        return Ok(None);
    }
    Ok(Some(reduction(&values)))
}
