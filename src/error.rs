/**
* filename : error
* author : HAMA
* date: 2025. 5. 12.
* description:
**/

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("Stock not found: {0}")]
    StockNotFound(String),

    #[error("Data not found: {0}")]
    DataNotFound(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Market API error: {0}")]
    MarketApiError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
