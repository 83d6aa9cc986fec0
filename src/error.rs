use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid theme block {block:?}: {reason}")]
    InvalidTheme { block: String, reason: String },

    #[error("component not found: {name} (not defined in {})", manifest.display())]
    ComponentNotFound { name: String, manifest: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
