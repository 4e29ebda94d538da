//! # csv-query
//!
//! `csv-query` is a small command-line pipeline over delimited text files:
//! load a CSV into memory, optionally narrow the rows with a single
//! comparison condition, then render the result as a grid table or reduce one
//! column to a single number. It supports:
//!
//! - Condition parsing against a configurable operator registry
//!   (longest-matching symbol wins)
//! - Per-cell numeric/text coercion without a pre-typed schema
//! - Order-preserving row filtering with silent per-row leniency
//! - `avg`/`min`/`max` aggregation with a distinct "no data" sentinel
//!
//! Registries are explicit configuration values: extra operators or
//! aggregations are added by constructing an extended registry, never by
//! mutating a shared default.
//!
//! # Example
//!
//! ```no_run
//! use csv_query::processor::{
//!     aggregate, filter, AggregationRegistry, OperatorRegistry, Table,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = Table::from_path("phones.csv".as_ref())?;
//!     let operators = OperatorRegistry::default();
//!
//!     // Rows where 'price' > 500
//!     let expensive = filter(&table, "price>500", &operators)?;
//!
//!     // Average rating of those rows
//!     let avg = aggregate(
//!         &table,
//!         &expensive,
//!         "avg",
//!         "rating",
//!         &AggregationRegistry::default(),
//!     )?;
//!     println!("avg rating: {:?}", avg);
//!
//!     Ok(())
//! }
//! ```

pub mod processor;
