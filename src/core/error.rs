// Error handling for the preview cache pipeline

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PreviewError>;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Decoder failed: {0}")]
    Decoder(String),

    #[error("Decoded output has no usable channels")]
    NoUsableChannels,

    #[error("Channel not found in cache: {0}")]
    ChannelNotFound(String),
}
