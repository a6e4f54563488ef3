//! # Schema Classification
//!
//! Decides whether a select-eligible operation can actually be served as a
//! flat table. A response schema whose properties include a map-shaped
//! field (`additionalProperties`) cannot, and is downgraded to `exec`.

use crate::error::{TagError, TagResult};
use crate::verb::SqlVerb;
use serde_json::{Map, Value as JsonValue};

/// JSON Pointer to the 200-response schema reference within an operation
/// object (`~1` encodes the `/` in `application/json`).
const RESPONSE_SCHEMA_REF: &str = "/responses/200/content/application~1json/schema/$ref";

/// Classifies an operation as `Select` or `Exec` from its 200-response
/// schema.
///
/// The schema reference is resolved in `schemas` by its final path segment.
/// If the resolved schema has `properties`, any property carrying an
/// `additionalProperties` key forces `Exec`; otherwise the shape is flat
/// and `Select` stands. A schema without `properties` logs a warning and
/// fails open to `Exec`. A missing or unresolvable `$ref` is an error.
pub fn classify_by_schema(
    operation: &JsonValue,
    schemas: &Map<String, JsonValue>,
) -> TagResult<SqlVerb> {
    let ref_str = operation
        .pointer(RESPONSE_SCHEMA_REF)
        .and_then(JsonValue::as_str)
        .ok_or_else(|| TagError::SchemaNotFound("missing 200 response schema $ref".to_string()))?;

    let name = schema_name_from_ref(ref_str);
    let schema = schemas
        .get(name)
        .ok_or_else(|| TagError::SchemaNotFound(ref_str.to_string()))?;

    match schema.get("properties").and_then(JsonValue::as_object) {
        Some(properties) => {
            let has_map_field = properties
                .values()
                .any(|field| field.get("additionalProperties").is_some());
            if has_map_field {
                Ok(SqlVerb::Exec)
            } else {
                Ok(SqlVerb::Select)
            }
        }
        None => {
            log::warn!("schema properties not found for {}", ref_str);
            Ok(SqlVerb::Exec)
        }
    }
}

/// Extracts the schema name from a reference string.
/// e.g. `#/components/schemas/InstanceList` -> `InstanceList`
fn schema_name_from_ref(ref_str: &str) -> &str {
    ref_str.rsplit('/').next().unwrap_or(ref_str)
}
