use thiserror::Error;

#[derive(Error, Debug)]
pub enum OnfleetError {
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Request serialization error: {0}")]
    SerializeError(serde_json::Error),

    #[error("Response decode error: {0}")]
    DecodeError(serde_json::Error),

    #[error("API error {status} - {path}{}", body.as_deref().map(|b| format!(" - {b}")).unwrap_or_default())]
    ApiError {
        status: u16,
        path: String,
        body: Option<String>,
    },

    #[error("Batch creation failed: {0}")]
    BatchError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, OnfleetError>;
