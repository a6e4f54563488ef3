//! # Method Naming
//!
//! Derives the externally visible method name for an operation. Most
//! services use the last dot-token alone; services whose operation ids are
//! not unique by last token use the fully-qualified form.

use crate::casing::to_snake_case;
use crate::error::{TagError, TagResult};

/// Services whose method names join every token after the service prefix.
/// The last token alone would collide across resources for these.
const FULLY_QUALIFIED_SERVICES: &[&str] = &[
    "accessapproval",
    "analyticshub",
    "apigee",
    "apigeeregistry",
    "beyondcorp",
    "bigquerydatatransfer",
    "cloudbuild",
    "container",
    "containeranalysis",
    "datacatalog",
    "dataflow",
    "datalabeling",
    "dataplex",
    "dataproc",
    "dialogflow",
    "discoveryengine",
    "dlp",
    "documentai",
    "essentialcontacts",
    "gkehub",
    "gkeonprem",
    "integrations",
    "logging",
    "ml",
    "monitoring",
    "networksecurity",
    "orgpolicy",
    "policysimulator",
    "prod_tt_sasportal",
    "pubsub",
    "pubsublite",
    "recommendationengine",
    "recommender",
    "resourcesettings",
    "retail",
    "sasportal",
    "securitycenter",
    "spanner",
    "translate",
    "videointelligence",
    "vision",
];

/// Derives the canonical method name for an operation.
///
/// For services in the fully-qualified list, all dot-tokens after the first
/// are joined with `_` and snake-cased; otherwise only the last token (the
/// action) is snake-cased.
pub fn resolve_method_name(service: &str, operation_id: &str) -> TagResult<String> {
    let tokens: Vec<&str> = operation_id.split('.').collect();
    if tokens.len() < 2 {
        return Err(TagError::MalformedOperationId(operation_id.to_string()));
    }

    if FULLY_QUALIFIED_SERVICES.contains(&service) {
        Ok(to_snake_case(&tokens[1..].join("_")))
    } else {
        Ok(to_snake_case(tokens[tokens.len() - 1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_policy() {
        assert_eq!(
            resolve_method_name("compute", "compute.instances.aggregatedList").unwrap(),
            "aggregated_list"
        );
    }

    #[test]
    fn test_fully_qualified_policy() {
        assert_eq!(
            resolve_method_name("logging", "logging.entries.list").unwrap(),
            "entries_list"
        );
    }

    #[test]
    fn test_fully_qualified_deep_path() {
        assert_eq!(
            resolve_method_name(
                "dialogflow",
                "dialogflow.projects.locations.agents.intents.get"
            )
            .unwrap(),
            "projects_locations_agents_intents_get"
        );
    }

    #[test]
    fn test_unknown_service_uses_short_policy() {
        assert_eq!(
            resolve_method_name("storage", "storage.buckets.getIamPolicy").unwrap(),
            "get_iam_policy"
        );
    }

    #[test]
    fn test_malformed_operation_id() {
        assert!(matches!(
            resolve_method_name("compute", "list"),
            Err(TagError::MalformedOperationId(_))
        ));
    }
}
