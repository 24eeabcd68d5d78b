use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;
use crate::models::{SourceLocation, TypeKind};

///
/// GenerateError
///
/// Aborts the current generation pass. `location` points at the type the
/// failure is attributed to, when the metadata reader supplied one.
///

#[derive(Debug, ThisError)]
pub enum GenerateError {
    #[error("only classes can be annotated with @GenerateInterface, but `{type_name}` is {kind}")]
    NotAClass {
        type_name: String,
        kind: TypeKind,
        location: Option<SourceLocation>,
    },

    #[error("only top-level classes can be annotated with @GenerateInterface, but `{type_name}` is nested in `{enclosing}`")]
    NotTopLevel {
        type_name: String,
        enclosing: String,
        location: Option<SourceLocation>,
    },

    #[error("cannot name the interface generated for `{type_name}`: {source}")]
    Naming {
        type_name: String,
        location: Option<SourceLocation>,
        source: NamingError,
    },

    #[error("failed to emit generated interface: {0}")]
    Emission(#[from] EmitError),
}

impl GenerateError {
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::NotAClass { location, .. }
            | Self::NotTopLevel { location, .. }
            | Self::Naming { location, .. } => location.as_ref(),
            Self::Emission(_) => None,
        }
    }
}

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum NamingError {
    #[error("unknown naming strategy `{0}`")]
    UnknownStrategy(String),

    #[error("naming strategy `{strategy}` failed: {reason}")]
    StrategyFailed { strategy: String, reason: String },

    #[error("the name of the generated interface cannot be empty")]
    Empty,
}

#[derive(Debug, ThisError)]
pub enum EmitError {
    #[error("an interface named `{0}` was already emitted in this pass")]
    Duplicate(String),

    #[error("cannot write {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("cannot render `{name}`: {source}")]
    Render { name: String, source: RenderError },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum RenderError {
    #[error("type `{0}` has no Rust equivalent")]
    UnsupportedType(String),

    #[error("`{0}` is not a valid identifier")]
    InvalidIdentifier(String),
}

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}
