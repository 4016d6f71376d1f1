use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    /// A range token that is neither `start-end` nor a single page number.
    #[error("Invalid page range format: '{0}' (use 'start-end' or a single page number)")]
    InvalidFormat(String),

    #[error("File not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    /// Range outside the document or with start after end. Only ever logged.
    #[error("Invalid range {start}-{end}: the PDF has {total_pages} page(s)")]
    InvalidRange {
        start: u32,
        end: u32,
        total_pages: u32,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Pdf(#[from] anyhow::Error),
}
