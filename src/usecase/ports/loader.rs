use thiserror::Error;

use crate::domain::entities::batch::UploadFile;
use crate::domain::entities::cell::Sheet;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported format: {name}")]
    UnsupportedFormat { name: String },

    #[error("failed to parse workbook {name}: {message}")]
    Parse { name: String, message: String },

    #[error("failed to read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("extraction worker failed: {message}")]
    Worker { message: String },
}

/// A batch fails as a whole when any of its files fails.
#[derive(Debug, Error)]
#[error("{} of {total} file(s) could not be processed", .failures.len())]
pub struct BatchError {
    pub total: usize,
    pub failures: Vec<ExtractError>,
}

impl BatchError {
    /// The worker running the batch died before any per-file result came back.
    pub fn worker(total: usize, message: impl Into<String>) -> Self {
        Self {
            total,
            failures: vec![ExtractError::Worker {
                message: message.into(),
            }],
        }
    }
}

pub trait WorkbookLoader: Send + Sync {
    /// Reads `file` and returns its sheets in workbook order.
    fn load(&self, file: &UploadFile) -> Result<Vec<Sheet>, ExtractError>;
}
