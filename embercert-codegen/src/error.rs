//! Error types for header generation.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for embercert-codegen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure mode of a generation run.
///
/// Nothing is retried or recovered internally; the first error aborts the
/// run and propagates to the process boundary.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to fetch certificate from '{url}'")]
    #[diagnostic(
        code(embercert::network_error),
        help("check the URL and your network connection; no retry is performed")
    )]
    Network {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("failed to write header '{path}'")]
    #[diagnostic(
        code(embercert::filesystem_error),
        help("check permissions and free space for the output directory")
    )]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{name}' is not a valid C identifier")]
    #[diagnostic(
        code(embercert::invalid_var_name),
        help("the variable name must match [A-Za-z_][A-Za-z0-9_]*")
    )]
    InvalidVarName { name: String },
}

impl Error {
    /// Build a network error from any transport or body-read failure.
    pub(crate) fn network(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// Build a filesystem error for the given output path.
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}
