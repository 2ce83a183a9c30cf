//! Error type shared by every pipeline stage.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by library functions.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("unable to open {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record {line:?}: {reason}")]
    MalformedRecord { line: String, reason: String },
    #[error("missing required value: {0}")]
    MissingArgument(&'static str),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(Arc<ortho_config::OrthoError>),
}

// `OrthoError` is large; keep it behind a pointer. Newer `ortho_config`
// releases already hand it out as `Arc<OrthoError>`.
impl From<ortho_config::OrthoError> for PipelineError {
    fn from(err: ortho_config::OrthoError) -> Self {
        Self::Config(Arc::new(err))
    }
}

impl From<Arc<ortho_config::OrthoError>> for PipelineError {
    fn from(err: Arc<ortho_config::OrthoError>) -> Self {
        Self::Config(err)
    }
}

impl PipelineError {
    pub(crate) fn malformed(line: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line: line.to_owned(),
            reason: reason.into(),
        }
    }
}
