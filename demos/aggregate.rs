use csv_query::processor::{aggregate, filter, AggregationRegistry, OperatorRegistry, Table};

use crate::utils::sample_csv_path;
mod utils;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = sample_csv_path();
    let table = Table::from_path(path.as_path())?;
    let rows = filter(&table, "", &OperatorRegistry::default())?;
    let aggregations = AggregationRegistry::default();

    let avg = aggregate(&table, &rows, "avg", "price", &aggregations)?;
    println!("Average 'price': {:?}", avg);

    let max = aggregate(&table, &rows, "max", "rating", &aggregations)?;
    println!("Maximum 'rating': {:?}", max);

    Ok(())
}
