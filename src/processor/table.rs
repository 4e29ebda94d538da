use std::path::Path;

use crate::processor::ProcessorError;

/// A single data row; cells align positionally with the table header.
///
/// A row shorter than the header simply lacks its trailing columns.
pub type Row = Vec<String>;

/// In-memory CSV table: header names plus an ordered row sequence.
///
/// Loaded once, never mutated afterwards.
///
/// # Example
/// ```no_run
/// # use csv_query::processor::Table;
/// let table = Table::from_path("data.csv".as_ref()).unwrap();
/// println!("{} rows", table.row_count());
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Loads a CSV file into memory.
    ///
    /// The first record is the header; record lengths may vary (short rows
    /// lack their trailing columns).
    ///
    /// # Errors
    /// Returns a [`ProcessorError`] if the file cannot be opened or the CSV
    /// is malformed.
    pub fn from_path(path: &Path) -> Result<Self, ProcessorError> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Table { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column in the header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell of `row` under the named column.
    ///
    /// `None` when the column is not in the header or the row is too short
    /// to carry it.
    pub fn value<'a>(&self, row: &'a Row, column: &str) -> Option<&'a str> {
        let idx = self.column_index(column)?;
        row.get(idx).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table(csv: &str) -> Table {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "{}", csv).unwrap();
        Table::from_path(tmp.path()).unwrap()
    }

    #[test]
    fn test_load_headers_and_rows() {
        let table = make_table("id,value\n1,10\n2,20\n3,30\n");
        assert_eq!(table.headers(), &["id", "value"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows()[1], vec!["2", "20"]);
    }

    #[test]
    fn test_value_lookup() {
        let table = make_table("id,value\n1,10\n");
        let row = &table.rows()[0];
        assert_eq!(table.value(row, "value"), Some("10"));
        assert_eq!(table.value(row, "missing"), None);
    }

    #[test]
    fn test_short_row_lacks_trailing_columns() {
        let table = make_table("id,value\n1\n2,20\n");
        assert_eq!(table.value(&table.rows()[0], "value"), None);
        assert_eq!(table.value(&table.rows()[1], "value"), Some("20"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Table::from_path("does-not-exist.csv".as_ref()).is_err());
    }
}
