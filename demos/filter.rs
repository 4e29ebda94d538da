use csv_query::processor::{filter, render, OperatorRegistry, Table};

use crate::utils::sample_csv_path;
mod utils;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = sample_csv_path();
    let table = Table::from_path(path.as_path())?;

    // Rows where 'price' > 500
    let rows = filter(&table, "price>500", &OperatorRegistry::default())?;

    println!("{}", render(&table, &rows));
    Ok(())
}
