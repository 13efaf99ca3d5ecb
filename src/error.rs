use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to walk blob store: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("blob not found: {0}")]
    NotFound(String),

    #[error("invalid blob key: {0}")]
    InvalidKey(String),

    #[error("invalid order payload: {0}")]
    InvalidOrder(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
