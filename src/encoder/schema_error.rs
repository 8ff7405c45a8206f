use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// Every expected column the dataset lacks.
    MissingColumns(Vec<String>),
    /// Header present but no data rows.
    Empty,
    Io { path: String, msg: String },
    Csv(String),
    /// A row handed to the encoder has the wrong number of values.
    Width { expected: usize, actual: usize },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::MissingColumns(cols) => {
                write!(f, "Dataset is missing column(s): {}", cols.join(", "))
            }
            SchemaError::Empty => write!(f, "Dataset has no rows"),
            SchemaError::Io { path, msg } => write!(f, "Failed to read {path}: {msg}"),
            SchemaError::Csv(msg) => write!(f, "CSV error: {msg}"),
            SchemaError::Width { expected, actual } => {
                write!(f, "Expected {expected} value(s) per row, got {actual}")
            }
        }
    }
}

impl Error for SchemaError {}

impl From<csv::Error> for SchemaError {
    fn from(e: csv::Error) -> Self {
        SchemaError::Csv(e.to_string())
    }
}
