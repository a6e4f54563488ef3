//! # Override Tables
//!
//! Manual overrides applied on top of the naming heuristics. The tables are
//! keyed by service, then by operation id or resource name, with exact-match
//! keys only. They are loaded once from configuration and never mutated, so
//! a shared reference can be handed out across threads freely.

use crate::verb::SqlVerb;
use indexmap::IndexMap;
use serde::Deserialize;

/// Per-service map keyed by operation id or resource name.
type ServiceMap<V> = IndexMap<String, IndexMap<String, V>>;

/// Static override tables consulted by the resource and verb resolvers.
///
/// `Overrides::default()` has no entries; real tables are deserialized from
/// a JSON configuration document at process start.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Overrides {
    /// `service -> operation id -> resource name`. Highest-precedence
    /// resource override, short-circuits the heuristic entirely.
    pub resource_by_operation_id: ServiceMap<String>,
    /// `service -> computed resource name -> replacement resource name`.
    /// Applied after heuristic derivation and normalization.
    pub resource_by_name: ServiceMap<String>,
    /// `service -> operation id -> verb`. Applied last; wins over every
    /// computed verb including classifier downgrades.
    pub sql_verb: ServiceMap<SqlVerb>,
}

impl Overrides {
    /// Looks up a resource name override keyed by operation id.
    pub fn resource_for_operation_id(&self, service: &str, operation_id: &str) -> Option<&str> {
        self.resource_by_operation_id
            .get(service)
            .and_then(|ops| ops.get(operation_id))
            .map(String::as_str)
    }

    /// Applies the name-keyed resource override, or returns the computed
    /// name untouched when no override exists.
    pub fn apply_resource_name(&self, service: &str, resource: String) -> String {
        match self
            .resource_by_name
            .get(service)
            .and_then(|names| names.get(&resource))
        {
            Some(replacement) => replacement.clone(),
            None => resource,
        }
    }

    /// Applies the per-operation-id verb override, or returns the computed
    /// verb untouched when no override exists.
    pub fn apply_sql_verb(&self, service: &str, operation_id: &str, verb: SqlVerb) -> SqlVerb {
        self.sql_verb
            .get(service)
            .and_then(|ops| ops.get(operation_id))
            .copied()
            .unwrap_or(verb)
    }
}
