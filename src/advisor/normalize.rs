//! Symptom token canonicalisation.
//!
//! Raw items are coerced to text by a fixed, ordered list of rules, then
//! folded into canonical keys (`"Chest  Pain "` → `chest_pain`).

use serde_json::Value;

use super::types::AdvisorError;

/// Record fields checked, in order, when a symptom arrives as an object.
const RECORD_FIELDS: &[&str] = &["value", "name", "text"];

/// Ordered, de-duplicated set of canonical symptom keys.
/// Keeps first-seen order so persisted history mirrors the user's selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomSet {
    items: Vec<String>,
}

impl SymptomSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an already-canonical key. Returns false for duplicates/empties.
    pub fn insert(&mut self, symptom: String) -> bool {
        if symptom.is_empty() || self.contains(&symptom) {
            return false;
        }
        self.items.push(symptom);
        true
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.items.iter().any(|s| s == symptom)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SymptomSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SymptomSet::new();
        for raw in iter {
            set.insert(canonicalize(raw.as_ref()));
        }
        set
    }
}

/// Trim, lowercase, and join whitespace runs with `_`.
pub fn canonicalize(token: &str) -> String {
    token
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Best-effort text for one loosely-shaped symptom item.
///
/// Records yield their first truthy candidate field. When none is truthy the
/// last candidate field stands in, unless it is absent or null, in which case
/// the record's JSON text is used. A bare null becomes `"None"`.
pub fn coerce_item(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            if let Some(found) = RECORD_FIELDS
                .iter()
                .filter_map(|field| map.get(*field))
                .find(|v| is_truthy(v))
            {
                return scalar_text(found);
            }
            match RECORD_FIELDS.last().and_then(|field| map.get(*field)) {
                None | Some(Value::Null) => item.to_string(),
                Some(last) => scalar_text(last),
            }
        }
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

/// Falsy values: null, `false`, zero, and empty strings, lists or records.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Normalise a raw symptom payload. Only a non-list payload is an error;
/// malformed items degrade to their string form.
pub fn normalize_symptoms(payload: &Value) -> Result<SymptomSet, AdvisorError> {
    let items = payload.as_array().ok_or(AdvisorError::InvalidInput)?;
    Ok(items.iter().map(coerce_item).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_form_lowercases_and_joins() {
        assert_eq!(canonicalize("  Chest   Pain "), "chest_pain");
        assert_eq!(canonicalize("Runny\tNose"), "runny_nose");
        assert_eq!(canonicalize("   "), "");
    }

    #[test]
    fn strings_and_records_are_coerced() {
        let payload = json!([
            "Heartburn",
            {"value": "Acidity"},
            {"name": "chest pain"},
            {"text": "Regurgitation"},
        ]);
        let set = normalize_symptoms(&payload).unwrap();
        assert_eq!(
            set.to_vec(),
            vec!["heartburn", "acidity", "chest_pain", "regurgitation"]
        );
    }

    #[test]
    fn record_field_order_is_value_then_name_then_text() {
        let item = json!({"text": "third", "name": "second", "value": "first"});
        assert_eq!(coerce_item(&item), "first");
        let item = json!({"value": "", "name": null, "text": "fallthrough"});
        assert_eq!(coerce_item(&item), "fallthrough");
    }

    #[test]
    fn unrecognised_record_degrades_to_json_text() {
        let item = json!({"label": "cough"});
        assert_eq!(coerce_item(&item), r#"{"label":"cough"}"#);
    }

    #[test]
    fn scalars_become_strings_and_null_becomes_none() {
        let set = normalize_symptoms(&json!([42, true, null, "", "  "])).unwrap();
        assert_eq!(set.to_vec(), vec!["42", "true", "none"]);
    }

    #[test]
    fn falsy_record_fields_are_skipped() {
        assert_eq!(coerce_item(&json!({"value": 0, "name": "cough"})), "cough");
        assert_eq!(coerce_item(&json!({"value": 0.0, "text": "fever"})), "fever");
        assert_eq!(coerce_item(&json!({"value": [], "name": {}, "text": "chills"})), "chills");
        assert_eq!(coerce_item(&json!({"value": false, "name": "nausea"})), "nausea");
    }

    #[test]
    fn all_falsy_record_keeps_last_candidate_field() {
        assert_eq!(coerce_item(&json!({"text": ""})), "");
        assert_eq!(coerce_item(&json!({"value": "", "text": 0})), "0");
        assert_eq!(
            coerce_item(&json!({"value": "", "text": null})),
            r#"{"text":null,"value":""}"#
        );
        let set = normalize_symptoms(&json!(["cough", {"text": ""}])).unwrap();
        assert_eq!(set.to_vec(), vec!["cough"]);
    }

    #[test]
    fn duplicates_collapse() {
        let set = normalize_symptoms(&json!(["Cough", "cough", " COUGH "])).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn non_list_payload_rejected() {
        assert!(matches!(
            normalize_symptoms(&json!("cough")),
            Err(AdvisorError::InvalidInput)
        ));
        assert!(matches!(
            normalize_symptoms(&json!({"symptoms": ["cough"]})),
            Err(AdvisorError::InvalidInput)
        ));
    }

    #[test]
    fn normalisation_is_idempotent() {
        let first = normalize_symptoms(&json!(["Sore Throat", "Runny nose"])).unwrap();
        let again: SymptomSet = first.iter().collect();
        assert_eq!(first, again);
    }
}
