//! # Resource Resolution
//!
//! Derives a `(resource name, action)` pair from a dot-delimited operation
//! identifier, e.g. `"compute.instances.aggregatedList"`. The resource name
//! feeds table naming in the generated SQL surface; the action is the raw
//! last token.

use crate::casing::to_snake_case;
use crate::error::{TagError, TagResult};
use crate::overrides::Overrides;

/// Actions that operate on a resource's IAM policy rather than the resource
/// itself; they map to a dedicated `{resource}_iam_policies` table.
const IAM_ACTIONS: &[&str] = &[
    "getIamPolicy",
    "setIamPolicy",
    "testIamPermissions",
    "analyzeIamPolicy",
    "analyzeIamPolicyLongrunning",
    "searchAllIamPolicies",
];

/// Path tokens that denote a container level rather than a resource; when
/// one of these is the naive resource token, the action suffix alone names
/// the resource.
const STRUCTURAL_TOKENS: &[&str] = &["organizations", "folders", "projects", "locations"];

/// Action verb prefixes, scanned in order. First match wins, so the order
/// is part of the contract; an explicit slice, not a set, to keep the scan
/// order out of iteration-order accidents.
const ACTION_VERBS: &[&str] = &[
    "get", "list", "delete", "batchGet", "remove", "create", "add", "update", "fetch", "retrieve",
];

/// Splits an operation id on dots, requiring at least two tokens.
fn split_operation_id(operation_id: &str) -> TagResult<Vec<&str>> {
    let tokens: Vec<&str> = operation_id.split('.').collect();
    if tokens.len() < 2 {
        return Err(TagError::MalformedOperationId(operation_id.to_string()));
    }
    Ok(tokens)
}

/// Derives the resource name and action for an operation.
///
/// Precedence, highest first:
/// 1. operation-id-keyed override;
/// 2. IAM action rewrite to `{resource}_iam_policies`;
/// 3. verb-prefix stripping (`listInstances` on `projects` -> `instances`);
/// 4. the snake-cased second-to-last token as-is.
///
/// After derivation the name is normalized (no `__`, no leading `_`) and
/// the name-keyed override table gets the final word.
pub fn resolve_resource(
    overrides: &Overrides,
    service: &str,
    operation_id: &str,
) -> TagResult<(String, String)> {
    let tokens = split_operation_id(operation_id)?;
    let action = tokens[tokens.len() - 1];

    if let Some(mapped) = overrides.resource_for_operation_id(service, operation_id) {
        return Ok((mapped.to_string(), action.to_string()));
    }

    let base = to_snake_case(tokens[tokens.len() - 2]);
    let resource = process_action(action, base);
    let resource = normalize(resource);
    let resource = overrides.apply_resource_name(service, resource);

    Ok((resource, action.to_string()))
}

/// Rewrites the base resource name according to the action.
fn process_action(action: &str, resource: String) -> String {
    if IAM_ACTIONS.contains(&action) {
        return format!("{}_iam_policies", resource);
    }

    for verb in ACTION_VERBS {
        if action.starts_with(verb) && action != *verb {
            let suffix = to_snake_case(&action[verb.len()..]);
            if STRUCTURAL_TOKENS.contains(&resource.as_str()) {
                return suffix;
            }
            return format!("{}_{}", resource, suffix);
        }
    }

    resource
}

/// Collapses double underscores and strips a single leading underscore.
fn normalize(resource: String) -> String {
    let mut resource = resource;
    while resource.contains("__") {
        resource = resource.replace("__", "_");
    }
    if let Some(stripped) = resource.strip_prefix('_') {
        return stripped.to_string();
    }
    resource
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(service: &str, operation_id: &str) -> (String, String) {
        resolve_resource(&Overrides::default(), service, operation_id).unwrap()
    }

    #[test]
    fn test_plain_list() {
        let (resource, action) = resolve("compute", "compute.instances.aggregatedList");
        // "aggregatedList" matches no verb prefix, so the resource token
        // passes through untouched.
        assert_eq!(resource, "instances");
        assert_eq!(action, "aggregatedList");
    }

    #[test]
    fn test_iam_policy_rewrite() {
        let (resource, action) = resolve("compute", "compute.instances.getIamPolicy");
        assert_eq!(resource, "instances_iam_policies");
        assert_eq!(action, "getIamPolicy");
    }

    #[test]
    fn test_verb_suffix_appended() {
        let (resource, _) = resolve("container", "container.clusters.getJwks");
        assert_eq!(resource, "clusters_jwks");
    }

    #[test]
    fn test_structural_token_dropped() {
        let (resource, _) = resolve("compute", "compute.projects.removeProject");
        // "projects" is a container token, so only the stripped suffix names
        // the resource.
        assert_eq!(resource, "project");
    }

    #[test]
    fn test_bare_verb_is_not_stripped() {
        // action == verb exactly: no suffix to strip
        let (resource, action) = resolve("compute", "compute.instances.get");
        assert_eq!(resource, "instances");
        assert_eq!(action, "get");
    }

    #[test]
    fn test_verb_scan_order_first_match_wins() {
        // "get" precedes "batchGet" in the scan, but only "batchGet" prefixes
        // this action; the scan must reach it.
        let (resource, _) = resolve("pubsub", "pubsub.subscriptions.batchGetConfigs");
        assert_eq!(resource, "subscriptions_configs");
    }

    #[test]
    fn test_normalization_strips_leading_underscore() {
        // Structural token + a suffix that snake-cases to "_things" would
        // leave a bare leading underscore without the final cleanup.
        let (resource, _) = resolve("x", "x.projects.list_Things");
        assert_eq!(resource, "things");
    }

    #[test]
    fn test_normalization_collapses_double_underscore() {
        // "widgets" + "_things" would join as "widgets__things".
        let (resource, _) = resolve("x", "x.widgets.list_Things");
        assert_eq!(resource, "widgets_things");
        assert!(!resource.contains("__"));
    }

    #[test]
    fn test_operation_id_override_wins() {
        let overrides: Overrides = serde_json::from_value(serde_json::json!({
            "resource_by_operation_id": {
                "compute": { "compute.instances.getIamPolicy": "explicit_name" }
            }
        }))
        .unwrap();
        let (resource, action) =
            resolve_resource(&overrides, "compute", "compute.instances.getIamPolicy").unwrap();
        assert_eq!(resource, "explicit_name");
        assert_eq!(action, "getIamPolicy");
    }

    #[test]
    fn test_name_override_applied_last() {
        let overrides: Overrides = serde_json::from_value(serde_json::json!({
            "resource_by_name": {
                "compute": { "instances": "vm_instances" }
            }
        }))
        .unwrap();
        let (resource, _) =
            resolve_resource(&overrides, "compute", "compute.instances.aggregatedList").unwrap();
        assert_eq!(resource, "vm_instances");
    }

    #[test]
    fn test_malformed_operation_id() {
        let err = resolve_resource(&Overrides::default(), "compute", "instances").unwrap_err();
        assert!(matches!(err, crate::error::TagError::MalformedOperationId(_)));
    }
}
