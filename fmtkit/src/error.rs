use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Cannot generate password: no character types selected")]
    NoCharacterClasses,

    // Parsing helpers report through anyhow; this lets them surface as FormatError.
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FormatError>;
