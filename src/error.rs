/// Error types for the portfolio viewer

use thiserror::Error;

/// Result type alias using the viewer's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while loading or presenting the portfolio
#[derive(Error, Debug)]
pub enum Error {
    /// The projects document could not be read from disk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The projects document (or an image) could not be fetched over HTTP
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// The projects document is not valid JSON or has the wrong shape
    #[error("Malformed projects document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The projects document parsed but breaks a catalog invariant
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// A filter was requested for a tag that has no button
    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    /// An image could not be decoded or encoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// A blocking worker task panicked or was cancelled
    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// No usable cache directory on this system
    #[error("Could not determine cache directory")]
    NoCacheDir,
}
