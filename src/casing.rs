//! # Case Conversion
//!
//! Converts mixed-case identifiers (camelCase or CamelCase) to snake_case
//! while keeping a fixed list of brand names intact.

use regex::RegexBuilder;
use std::sync::OnceLock;

/// Brand substrings that must never be split at an internal case boundary.
const BRAND_EXCEPTIONS: &[&str] = &["gitlab", "github", "dotcom"];

/// Converts a mixed-case string to snake_case.
///
/// Two independent passes:
/// 1. every case-insensitive occurrence of a brand exception is normalized
///    to its canonical lowercase form, so the boundary pass cannot split it;
/// 2. an underscore is inserted between a lowercase-or-digit character and
///    a following uppercase character, then the whole string is lowercased.
///
/// Idempotent on input that is already snake_case.
pub fn to_snake_case(name: &str) -> String {
    let normalized = normalize_brand_exceptions(name);

    let mut result = String::with_capacity(normalized.len() + 4);
    let mut prev_splittable = false;
    for c in normalized.chars() {
        if c.is_ascii_uppercase() && prev_splittable {
            result.push('_');
        }
        prev_splittable = c.is_ascii_lowercase() || c.is_ascii_digit();
        for lc in c.to_lowercase() {
            result.push(lc);
        }
    }
    result
}

/// Replaces every case-insensitive occurrence of each brand exception with
/// its canonical casing. Runs before boundary splitting.
fn normalize_brand_exceptions(name: &str) -> String {
    static BRAND_RES: OnceLock<Vec<(regex::Regex, &'static str)>> = OnceLock::new();
    let brand_res = BRAND_RES.get_or_init(|| {
        BRAND_EXCEPTIONS
            .iter()
            .map(|brand| {
                let re = RegexBuilder::new(&regex::escape(brand))
                    .case_insensitive(true)
                    .build()
                    .expect("Invalid regex");
                (re, *brand)
            })
            .collect()
    });

    let mut name = name.to_string();
    for (re, canonical) in brand_res {
        name = re.replace_all(&name, *canonical).into_owned();
    }
    name
}
