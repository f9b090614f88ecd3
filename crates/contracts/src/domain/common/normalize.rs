//! Key normalization shared by every join in the viewer.
//!
//! Two raw values are considered the same key iff their normalized forms are
//! identical, so department names, department codes and municipality codes
//! all pass through [`normalize`] before they are used as map keys.

use serde_json::{Map, Value};
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block (U+0300..U+036F)
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Lowercase, NFD, strip diacritics, trim.
///
/// Lowercasing happens before decomposition: some uppercase letters lowercase
/// into a base letter plus a combining mark, which must be stripped too.
pub fn normalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let stripped: String = lower.nfd().filter(|c| !is_combining_diacritic(*c)).collect();
    stripped.trim().to_string()
}

/// String form of a GeoJSON/JSON property value.
///
/// `null` is treated as absent. Numbers keep their JSON text so that a code
/// stored as `91` joins with a code stored as `"91"`.
pub fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Normalized form of an optional property value; absent yields `""`.
pub fn normalize_value(value: Option<&Value>) -> String {
    value
        .and_then(value_to_string)
        .map(|s| normalize(&s))
        .unwrap_or_default()
}

/// First non-empty property from a candidate list.
///
/// Candidates are tried in order; a property counts when it is present, not
/// `null` and not the empty string.
pub fn pick_first_prop(props: Option<&Map<String, Value>>, candidates: &[String]) -> Option<String> {
    let props = props?;
    candidates
        .iter()
        .filter_map(|name| props.get(name))
        .filter_map(value_to_string)
        .find(|s| !s.is_empty())
}

/// Display ordering for dropdowns and legends.
///
/// Accent- and case-insensitive comparison first, raw text as tie-break so
/// the order is total and stable.
pub fn collate(a: &str, b: &str) -> Ordering {
    normalize(a).cmp(&normalize(b)).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_normalize_strips_accents_and_case() {
        assert_eq!(normalize("  Bogotá, D.C. "), "bogota, d.c.");
        assert_eq!(normalize("NARIÑO"), "narino");
        assert_eq!(normalize("Quindío"), "quindio");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "Amazonas",
            "  San Andrés y Providencia ",
            "ATLÁNTICO",
            "İstanbul",
            "Ñ\u{0301}",
            "05001",
            "\u{00A0}Cesar\t",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_normalize_value_handles_absent_and_numbers() {
        assert_eq!(normalize_value(None), "");
        assert_eq!(normalize_value(Some(&Value::Null)), "");
        assert_eq!(normalize_value(Some(&json!(91))), "91");
        assert_eq!(normalize_value(Some(&json!(" Chocó "))), "choco");
    }

    #[test]
    fn test_pick_first_prop_skips_empty_candidates() {
        let p = props(json!({ "COD_DEP": "", "DPTO_CCDGO": null, "DPTO": 91 }));
        let candidates = vec!["COD_DEP".to_string(), "DPTO_CCDGO".to_string(), "DPTO".to_string()];
        assert_eq!(pick_first_prop(Some(&p), &candidates), Some("91".to_string()));

        let empty = props(json!({ "COD_DEP": "" }));
        assert_eq!(pick_first_prop(Some(&empty), &candidates), None);
        assert_eq!(pick_first_prop(None, &candidates), None);
    }

    #[test]
    fn test_collate_ignores_accents() {
        let mut names = vec!["Córdoba", "Caquetá", "cesar", "Atlántico"];
        names.sort_by(|a, b| collate(a, b));
        assert_eq!(names, vec!["Atlántico", "Caquetá", "cesar", "Córdoba"]);
    }
}
