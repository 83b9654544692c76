use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Content parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Index {index} out of range for gallery of {len} images")]
    OutOfRange { index: usize, len: usize },

    #[error("Gallery of item '{0}' is empty")]
    EmptyGallery(String),

    #[error("Duplicate {kind} '{value}' in catalog")]
    DuplicateId { kind: &'static str, value: String },

    #[error("Reveal scope already mounted: {0}")]
    AlreadyMounted(String),

    #[error("Unknown reveal target or scope: {0}")]
    UnknownTarget(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
