use thiserror::Error;

/// Main error type for pgreport
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Column {index} is out of range for a table with {columns} columns")]
    ColumnOutOfRange { index: usize, columns: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_out_of_range_message() {
        let err = ReportError::ColumnOutOfRange { index: 7, columns: 3 };
        assert_eq!(
            err.to_string(),
            "Column 7 is out of range for a table with 3 columns"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ReportError = io.into();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
