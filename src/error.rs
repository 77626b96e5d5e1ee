use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayoutError {
    #[error("record source not found: {}", .path.display())]
    SourceUnavailable { path: PathBuf },
    #[error("record source is malformed: {0}")]
    SourceMalformed(String),
    #[error("no record found for student id {0}")]
    NotFound(String),
    #[error("no student id was entered")]
    EmptyInput,
    #[error("access denied: incorrect password")]
    AccessDenied,
    #[error("configuration error: {0}")]
    Config(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PayoutError {
    /// Errors the end user can correct by submitting another lookup.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PayoutError::NotFound(_) | PayoutError::EmptyInput)
    }
}

pub type Result<T> = std::result::Result<T, PayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(PayoutError::NotFound("25B00001".to_string()).is_recoverable());
        assert!(PayoutError::EmptyInput.is_recoverable());
        assert!(!PayoutError::AccessDenied.is_recoverable());
        assert!(!PayoutError::SourceMalformed("bad".to_string()).is_recoverable());
        assert!(
            !PayoutError::SourceUnavailable {
                path: PathBuf::from("missing.xlsx")
            }
            .is_recoverable()
        );
    }
}
