use std::cmp::Ordering;

use crate::processor::{coerce::Comparison, ProcessorError};

/// Predicate applied to one coerced (cell, literal) pair.
pub type OperatorFn = fn(&Comparison) -> bool;

/// A parsed filter condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub column: String,
    pub operator: String,
    pub literal: String,
}

/// Ordered mapping from operator symbol to comparison predicate.
///
/// Immutable once built: extending the recognized operator set means
/// constructing a new registry via [`OperatorRegistry::with`], not mutating a
/// shared default.
///
/// # Example
/// ```
/// use csv_query::processor::OperatorRegistry;
///
/// let operators = OperatorRegistry::default()
///     .with("<=", |cmp| {
///         matches!(
///             cmp.ordering(),
///             Some(std::cmp::Ordering::Less | std::cmp::Ordering::Equal)
///         )
///     });
/// let condition = operators.parse("price<=299").unwrap();
/// assert_eq!(condition.operator, "<=");
/// ```
#[derive(Debug, Clone)]
pub struct OperatorRegistry {
    entries: Vec<(String, OperatorFn)>,
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        OperatorRegistry {
            entries: Vec::new(),
        }
        .with(">", |cmp| cmp.ordering() == Some(Ordering::Greater))
        .with("<", |cmp| cmp.ordering() == Some(Ordering::Less))
        .with("=", |cmp| cmp.ordering() == Some(Ordering::Equal))
    }
}

impl OperatorRegistry {
    /// Returns a registry extended with one more symbol.
    pub fn with(mut self, symbol: &str, predicate: OperatorFn) -> Self {
        self.entries.push((symbol.to_string(), predicate));
        self
    }

    /// Predicate registered under `symbol`, if any.
    pub fn predicate(&self, symbol: &str) -> Option<OperatorFn> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, p)| *p)
    }

    /// Parses a condition string into a [`Condition`].
    ///
    /// Every registered symbol is considered. The longest symbol occurring
    /// anywhere in the string wins; among equal-length symbols the leftmost
    /// occurrence wins, remaining ties go to registry insertion order. The
    /// string splits at the first occurrence of the winning symbol and both
    /// sides are trimmed.
    ///
    /// # Errors
    /// [`ProcessorError::InvalidCondition`] when no registered symbol occurs
    /// in the string.
    pub fn parse(&self, condition: &str) -> Result<Condition, ProcessorError> {
        let mut best: Option<(&str, usize)> = None;
        for (symbol, _) in &self.entries {
            if let Some(pos) = condition.find(symbol.as_str()) {
                let wins = match best {
                    None => true,
                    Some((b, bpos)) => {
                        symbol.len() > b.len() || (symbol.len() == b.len() && pos < bpos)
                    }
                };
                if wins {
                    best = Some((symbol, pos));
                }
            }
        }

        let (symbol, pos) =
            best.ok_or_else(|| ProcessorError::InvalidCondition(condition.to_string()))?;

        Ok(Condition {
            column: condition[..pos].trim().to_string(),
            operator: symbol.to_string(),
            literal: condition[pos + symbol.len()..].trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_le() -> OperatorRegistry {
        OperatorRegistry::default().with("<=", |cmp| {
            matches!(cmp.ordering(), Some(Ordering::Less | Ordering::Equal))
        })
    }

    #[test]
    fn test_parse_simple_condition() {
        let condition = OperatorRegistry::default().parse("price>500").unwrap();
        assert_eq!(
            condition,
            Condition {
                column: "price".to_string(),
                operator: ">".to_string(),
                literal: "500".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let condition = OperatorRegistry::default().parse(" brand = xiaomi ").unwrap();
        assert_eq!(condition.column, "brand");
        assert_eq!(condition.literal, "xiaomi");
    }

    #[test]
    fn test_longest_symbol_wins() {
        // "price<=299" contains both "<" and "<="
        let condition = registry_with_le().parse("price<=299").unwrap();
        assert_eq!(condition.operator, "<=");
        assert_eq!(condition.literal, "299");
    }

    #[test]
    fn test_equal_length_symbols_leftmost_wins() {
        // both "=" (pos 1) and "<" (pos 3) occur; "=" is leftmost
        let condition = OperatorRegistry::default().parse("a=b<c").unwrap();
        assert_eq!(condition.operator, "=");
        assert_eq!(condition.column, "a");
        assert_eq!(condition.literal, "b<c");
    }

    #[test]
    fn test_splits_at_first_occurrence() {
        let condition = OperatorRegistry::default().parse("note=a=b").unwrap();
        assert_eq!(condition.column, "note");
        assert_eq!(condition.literal, "a=b");
    }

    #[test]
    fn test_no_operator_is_invalid_condition() {
        let err = OperatorRegistry::default().parse("price!500").unwrap_err();
        assert!(matches!(err, ProcessorError::InvalidCondition(_)));
    }

    #[test]
    fn test_operator_set_is_configuration() {
        // a registry without ">" must not recognize it
        let bare = OperatorRegistry {
            entries: Vec::new(),
        }
        .with("=", |cmp| cmp.ordering() == Some(Ordering::Equal));
        assert!(bare.parse("price>500").is_err());
        assert!(bare.parse("price=500").is_ok());
    }
}
