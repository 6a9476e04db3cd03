use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Please enter a text prompt")]
    EmptyInput,

    #[error("Error generating JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
