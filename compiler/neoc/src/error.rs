//! Host-level driver errors. Faults in the compiled program are
//! diagnostics, never `DriverError`s.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("'{path}' is too large: sources are limited to 4 GiB")]
    TooLarge { path: String },

    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl DriverError {
    /// Classify an error from reading the file at `path`.
    pub fn from_read(path: &str, error: io::Error) -> Self {
        let path = path.to_string();
        match error.kind() {
            io::ErrorKind::NotFound => DriverError::NotFound { path },
            io::ErrorKind::PermissionDenied => DriverError::PermissionDenied { path },
            io::ErrorKind::InvalidData => DriverError::InvalidUtf8 { path },
            _ => DriverError::Read {
                path,
                source: error,
            },
        }
    }
}
