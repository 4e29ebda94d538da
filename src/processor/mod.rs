use thiserror::Error;

pub mod aggregate;
pub mod coerce;
pub mod condition;
pub mod filter;
pub mod render;
pub mod table;

pub use aggregate::{aggregate, AggregationRegistry};
pub use coerce::{coerce, Comparison, Number};
pub use condition::{Condition, OperatorRegistry};
pub use filter::filter;
pub use render::render;
pub use table::{Row, Table};

/// Error type used across the crate
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid condition {0:?}: no registered operator found")]
    InvalidCondition(String),

    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    #[error("unknown aggregation: {0}")]
    UnknownAggregation(String),
}
