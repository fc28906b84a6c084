use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures loading or saving the gofin settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings file could not be accessed: {0}")]
    Io(#[from] io::Error),

    #[error("settings file `{}` is not valid JSON: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("settings could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}
