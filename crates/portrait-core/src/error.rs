use thiserror::Error;

#[derive(Debug, Error)]
pub enum DotMapError {
    #[error("malformed dot map: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dot {index} has a non-finite {field}")]
    NonFinite { index: usize, field: &'static str },
}
