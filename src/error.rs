use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AiImgError {
    #[error("there was no API_KEY specified. You can do so by exporting `AIIMG_API_KEY` or adding `AIIMG_API_KEY` to your ~/.aiimg.yaml configuration file")]
    NoApiKey,

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The key contains bytes that cannot go into an HTTP header.
    #[error("API key is not a valid header value")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse API response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response contained no image")]
    EmptyResponse,

    #[error("failed to decode image: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("request cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, AiImgError>;
