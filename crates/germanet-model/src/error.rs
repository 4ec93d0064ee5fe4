use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("malformed identifier {value:?}: {reason}")]
    MalformedIdentifier { value: String, reason: &'static str },

    #[error("unknown {kind} relation {name:?}")]
    UnknownRelation { kind: &'static str, name: String },

    #[error("least common subsumer needs exactly two distinct endpoints, got {endpoints:?}")]
    InvalidEndpoints { endpoints: Vec<i32> },
}
