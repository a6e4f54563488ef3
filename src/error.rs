//! # Error Handling
//!
//! Provides the unified `TagError` enum used across the crate.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum TagError {
    /// An operation identifier with fewer than two dot-separated tokens.
    #[from(ignore)]
    #[display("Malformed operation id: {_0}")]
    MalformedOperationId(String),

    /// A response `$ref` that is missing or absent from the schema table.
    #[from(ignore)]
    #[display("Schema not found: {_0}")]
    SchemaNotFound(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for TagError {}

/// Helper type alias for Result using TagError.
pub type TagResult<T> = Result<T, TagError>;
