//! Error types for provider configuration
//!
//! Every error here is a generation-time failure: it aborts the run and is
//! reported to whoever invoked the generator.

use thiserror::Error;

use crate::comments::CommentError;

/// Unified error type for the configuration library
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot build comment for {field}: {source}")]
    Comment {
        field: String,
        #[source]
        source: CommentError,
    },

    #[error("cannot parse provider schema: {0}")]
    SchemaParse(#[from] serde_json::Error),

    #[error("provider schema document contains no resource schemas")]
    EmptySchema,

    #[error("resource {name} is defined by both {first} and {second}")]
    DuplicateResource {
        name: String,
        first: String,
        second: String,
    },

    #[error("unsupported type for {resource}.{field}: {type_json}")]
    UnsupportedType {
        resource: String,
        field: String,
        type_json: String,
    },

    #[error("invalid resource name pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, Error>;
