use std::cmp::Ordering;

/// Parsed numeric cell.
///
/// A value containing a `.` parses as an IEEE double, anything else as a
/// 64-bit integer. Comparisons stay in integer semantics when both sides are
/// integers and promote to `f64` otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn parse(raw: &str) -> Option<Number> {
        if raw.contains('.') {
            raw.parse::<f64>().ok().map(Number::Float)
        } else {
            raw.parse::<i64>().ok().map(Number::Int)
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

/// Comparison domain for one (row cell, condition literal) pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison<'a> {
    NumericPair(Number, Number),
    TextPair(&'a str, &'a str),
}

/// Decides how a row cell compares against a condition literal.
///
/// Each side parses under its own rule (see [`Number`]); if either side fails
/// to parse, the two original strings compare as text. There is no pre-typed
/// schema, so this runs once per row per filter call.
pub fn coerce<'a>(cell: &'a str, literal: &'a str) -> Comparison<'a> {
    match (Number::parse(cell), Number::parse(literal)) {
        (Some(a), Some(b)) => Comparison::NumericPair(a, b),
        _ => Comparison::TextPair(cell, literal),
    }
}

impl Comparison<'_> {
    /// Ordering of the left side relative to the right.
    ///
    /// `None` only when a float comparison is undefined (NaN).
    pub fn ordering(&self) -> Option<Ordering> {
        match self {
            Comparison::NumericPair(Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            Comparison::NumericPair(a, b) => a.as_f64().partial_cmp(&b.as_f64()),
            Comparison::TextPair(a, b) => Some(a.cmp(b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_integers() {
        assert_eq!(
            coerce("999", "500"),
            Comparison::NumericPair(Number::Int(999), Number::Int(500))
        );
        assert_eq!(coerce("999", "500").ordering(), Some(Ordering::Greater));
    }

    #[test]
    fn test_dot_forces_float_parse() {
        assert_eq!(
            coerce("4.9", "4.4"),
            Comparison::NumericPair(Number::Float(4.9), Number::Float(4.4))
        );
    }

    #[test]
    fn test_mixed_int_and_float_compare_numerically() {
        let cmp = coerce("999", "500.5");
        assert_eq!(
            cmp,
            Comparison::NumericPair(Number::Int(999), Number::Float(500.5))
        );
        assert_eq!(cmp.ordering(), Some(Ordering::Greater));
    }

    #[test]
    fn test_unparsable_side_falls_back_to_text() {
        // literal keeps its original, unparsed form
        assert_eq!(coerce("999", "cheap"), Comparison::TextPair("999", "cheap"));
        assert_eq!(
            coerce("xiaomi", "xiaomi").ordering(),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_dotted_non_number_is_text() {
        // "1.2.3" contains a dot but is not a float
        assert_eq!(
            coerce("1.2.3", "1"),
            Comparison::TextPair("1.2.3", "1")
        );
    }

    #[test]
    fn test_large_integers_keep_integer_semantics() {
        // adjacent i64 values that collapse to the same f64
        let cmp = coerce("9007199254740993", "9007199254740992");
        assert_eq!(cmp.ordering(), Some(Ordering::Greater));
    }
}
