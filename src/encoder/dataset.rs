// src/encoder/dataset.rs
use crate::encoder::SchemaError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A training snapshot held as text cells. Only the encoder reads it, and the
/// encoder only cares about string categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn from_csv_path(path: &Path) -> Result<Self, SchemaError> {
        let file = File::open(path).map_err(|e| SchemaError::Io {
            path: path.display().to_string(),
            msg: e.to_string(),
        })?;
        Self::from_csv_reader(file)
    }

    /// Reads a CSV with a header row. Cells are trimmed; ragged rows are a
    /// CSV error.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, SchemaError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Positions of `columns`, failing with every absent name at once.
    pub fn select(&self, columns: &[&str]) -> Result<Vec<usize>, SchemaError> {
        let mut found = Vec::with_capacity(columns.len());
        let mut missing = Vec::new();

        for column in columns {
            match self.column_index(column) {
                Some(i) => found.push(i),
                None => missing.push(column.to_string()),
            }
        }

        if missing.is_empty() {
            Ok(found)
        } else {
            Err(SchemaError::MissingColumns(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
id,city,room_type, price
1, Boston ,Private room,120
2,Chicago,Entire home/apt,200
";

    #[test]
    fn reads_headers_and_trims_cells() {
        let data = Dataset::from_csv_reader(CSV.as_bytes()).unwrap();
        assert_eq!(data.headers(), ["id", "city", "room_type", "price"]);
        assert_eq!(data.len(), 2);
        assert_eq!(data.rows()[0][1], "Boston");
    }

    #[test]
    fn select_reports_all_missing_columns() {
        let data = Dataset::from_csv_reader(CSV.as_bytes()).unwrap();
        assert_eq!(data.select(&["room_type", "city"]).unwrap(), vec![2, 1]);

        let err = data.select(&["city", "bed_type", "property_type"]).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingColumns(vec!["bed_type".into(), "property_type".into()])
        );
    }

    #[test]
    fn ragged_rows_are_csv_errors() {
        let err = Dataset::from_csv_reader("a,b\n1,2,3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SchemaError::Csv(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Dataset::from_csv_path(Path::new("no/such/airbnb_data.csv")).unwrap_err();
        assert!(matches!(err, SchemaError::Io { .. }));
    }
}
