use germanet_model::ModelError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = IngestError> = std::result::Result<T, E>;

/// Ingestion failures. Every variant names the file (or stream label) it
/// came from; none of them is retried or skipped.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("resource not found at {}: {reason}", path.display())]
    ResourceNotFound { path: PathBuf, reason: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{source_name}: malformed XML at byte {position}: {message}")]
    MalformedDocument {
        source_name: String,
        position: u64,
        message: String,
    },

    #[error("{source_name}: <{element}> is missing required attribute `{attribute}`")]
    MissingRequiredAttribute {
        source_name: String,
        element: String,
        attribute: String,
    },

    #[error("{source_name}: attribute `{attribute}`: {source}")]
    MalformedIdentifier {
        source_name: String,
        attribute: String,
        #[source]
        source: ModelError,
    },

    #[error("{source_name}: attribute `{attribute}`: {source}")]
    InvalidRelation {
        source_name: String,
        attribute: String,
        #[source]
        source: ModelError,
    },
}

impl IngestError {
    pub(crate) fn malformed(source_name: &str, position: impl TryInto<u64>, message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            source_name: source_name.to_string(),
            position: position.try_into().unwrap_or(u64::MAX),
            message: message.into(),
        }
    }

    pub(crate) fn open(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::ResourceNotFound {
                path,
                reason: source.to_string(),
            }
        } else {
            Self::Io { path, source }
        }
    }

    /// File or stream label the error was raised for, when there is one.
    pub fn source_name(&self) -> Option<&str> {
        match self {
            Self::ResourceNotFound { .. } | Self::Io { .. } => None,
            Self::MalformedDocument { source_name, .. }
            | Self::MissingRequiredAttribute { source_name, .. }
            | Self::MalformedIdentifier { source_name, .. }
            | Self::InvalidRelation { source_name, .. } => Some(source_name),
        }
    }
}
