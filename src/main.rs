use std::cmp::Ordering;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use csv_query::processor::{
    aggregate, filter, render, AggregationRegistry, OperatorRegistry, Table,
};

/// Filter and aggregate CSV files
#[derive(Parser, Debug)]
#[command(name = "csv-query")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the CSV file
    file_path: PathBuf,

    /// Filter condition, e.g. 'price>1000'
    #[arg(long = "where", default_value = "")]
    where_clause: String,

    /// Aggregation, e.g. 'avg=price'
    #[arg(long, default_value = "")]
    aggregate: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let table = Table::from_path(&cli.file_path)
        .with_context(|| format!("failed to load {}", cli.file_path.display()))?;
    log::debug!("loaded {} rows from {}", table.row_count(), cli.file_path.display());

    let operators = OperatorRegistry::default().with("<=", |cmp| {
        matches!(cmp.ordering(), Some(Ordering::Less | Ordering::Equal))
    });

    let rows = filter(&table, &cli.where_clause, &operators)?;
    log::debug!("{} rows after filter", rows.len());

    if cli.aggregate.is_empty() {
        println!("{}", render(&table, &rows));
        return Ok(());
    }

    let Some((name, column)) = cli.aggregate.split_once('=') else {
        bail!(
            "invalid --aggregate {:?}, expected <agg>=<column>",
            cli.aggregate
        );
    };

    match aggregate(&table, &rows, name, column, &AggregationRegistry::default())? {
        Some(result) => println!("{}({}) = {}", name, column, result),
        None => println!("No data to aggregate"),
    }

    Ok(())
}
