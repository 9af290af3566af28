use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read data document: {0}")]
    Io(#[from] std::io::Error),

    #[error("data document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DataError>;
