#![deny(missing_docs)]

//! # OAS Naming
//!
//! Derives naming and semantic metadata for API operations described by an
//! OpenAPI-style document, to support generating a tabular / SQL-like
//! interface over a REST API. For each operation the crate produces:
//!
//! - a human-readable resource name (the table name),
//! - a canonical method name,
//! - one of the SQL verbs `select` / `insert` / `delete` / `exec`.
//!
//! The heuristics are a fixed, layered pipeline of string transformations
//! with explicit exception tables, not a configurable rule engine. All
//! entry points are pure functions over caller-supplied borrows plus an
//! immutable [`Overrides`] table, so they are safe to call concurrently.
//!
//! Loading the OpenAPI document, general schema resolution, and CLI
//! concerns are out of scope; callers supply the operation object and the
//! schema table directly.

/// Shared error types.
pub mod error;

/// Snake-case conversion with brand-name exceptions.
pub mod casing;

/// Manual override tables.
pub mod overrides;

/// Resource name / action derivation.
pub mod resource;

/// Method name derivation.
pub mod method;

/// Response schema classification.
pub mod schema;

/// SQL verb resolution.
pub mod verb;

pub use casing::to_snake_case;
pub use error::{TagError, TagResult};
pub use method::resolve_method_name;
pub use overrides::Overrides;
pub use resource::resolve_resource;
pub use schema::classify_by_schema;
pub use verb::{resolve_sql_verb, SqlVerb};
