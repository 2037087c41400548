//! core/error.rs
//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Saved state is not valid JSON: {0}")]
    BundleFormat(#[from] serde_json::Error),

    #[error("Config file {path} is invalid: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Audio output unavailable: {0}")]
    AudioStream(#[from] rodio::StreamError),

    #[error("Sound asset could not be decoded: {0}")]
    AudioDecode(#[from] rodio::decoder::DecoderError),

    #[error("Audio engine thread exited before it was ready")]
    EngineGone,
}

pub type Result<T> = std::result::Result<T, ContestError>;
