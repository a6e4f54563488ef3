//! # SQL Verb Resolution
//!
//! Maps an operation to one of the four SQL verbs the generated interface
//! supports. `Exec` is the catch-all for anything that cannot be expressed
//! as a flat select, insert or delete.

use crate::error::TagResult;
use crate::overrides::Overrides;
use crate::schema::classify_by_schema;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// The SQL verb assigned to an operation.
#[derive(Debug, Display, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlVerb {
    /// Tabular read; requires a flat response shape.
    #[display("select")]
    Select,
    /// Resource creation.
    #[display("insert")]
    Insert,
    /// Resource deletion.
    #[display("delete")]
    Delete,
    /// Everything else; the default.
    #[default]
    #[display("exec")]
    Exec,
}

/// Action prefixes eligible for `select` when paired with HTTP GET.
const SELECT_ACTIONS: &[&str] = &["aggregatedList", "get", "list"];

/// Action prefixes eligible for `insert` when paired with HTTP POST.
const INSERT_ACTIONS: &[&str] = &["insert", "create"];

/// Action prefixes eligible for `delete` when paired with HTTP DELETE.
const DELETE_ACTIONS: &[&str] = &["delete"];

fn starts_with_or_equals(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix) || s == prefix
}

fn matches_any(action: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| starts_with_or_equals(action, p))
}

/// Resolves the SQL verb for an operation.
///
/// Later rules override earlier ones: the default is `Exec`; the action /
/// HTTP verb pattern pairs promote to `Select`, `Insert` or `Delete`; a
/// `Select` (other than for `aggregatedList`) is then re-examined against
/// the response schema and may drop back to `Exec`; and a per-operation-id
/// override from the tables wins over everything.
///
/// `http_path` does not influence the result; it is accepted so the caller
/// can pass its full routing context through one signature.
#[allow(clippy::too_many_arguments)]
pub fn resolve_sql_verb(
    overrides: &Overrides,
    service: &str,
    _resource: &str,
    action: &str,
    operation_id: &str,
    _http_path: &str,
    http_verb: &str,
    operation: &JsonValue,
    schemas: &Map<String, JsonValue>,
) -> TagResult<SqlVerb> {
    let mut sql_verb = SqlVerb::Exec;

    if matches_any(action, SELECT_ACTIONS) && http_verb == "get" {
        sql_verb = SqlVerb::Select;
    }

    if matches_any(action, INSERT_ACTIONS) && http_verb == "post" {
        sql_verb = SqlVerb::Insert;
    }

    if matches_any(action, DELETE_ACTIONS) && http_verb == "delete" {
        sql_verb = SqlVerb::Delete;
    }

    // aggregatedList responses are map-shaped by construction; they stay
    // select and skip the schema check.
    if action != "aggregatedList" && sql_verb == SqlVerb::Select {
        sql_verb = classify_by_schema(operation, schemas)?;
    }

    Ok(overrides.apply_sql_verb(service, operation_id, sql_verb))
}
