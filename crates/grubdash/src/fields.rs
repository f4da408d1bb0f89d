//! Field readers shared by the dish and order validation chains.
//!
//! Payload fields arrive as raw JSON. These helpers answer "is this usable?" and hand back
//! the typed value, so a check and the code that applies a payload read fields the same way.

use serde_json::{Number, Value};

/// A string with at least one character.
pub fn text(value: &Option<Value>) -> Option<&str> {
    value.as_ref()?.as_str().filter(|s| !s.is_empty())
}

/// A string that is not blank once surrounding whitespace is removed.
pub fn trimmed_text(value: &Option<Value>) -> Option<&str> {
    value.as_ref()?.as_str().filter(|s| !s.trim().is_empty())
}

/// A JSON number strictly greater than zero.
pub fn positive_number(value: &Option<Value>) -> Option<&Number> {
    match value {
        Some(Value::Number(n)) if n.as_f64().is_some_and(|n| n > 0.0) => Some(n),
        _ => None,
    }
}

/// The payload's `id`, unless it is absent, `null` or empty.
pub fn claimed_id(value: &Option<Value>) -> Option<&Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(other) => Some(other),
    }
}

/// Renders a payload value for an error message: strings bare, anything else as JSON.
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_requires_a_non_empty_string() {
        assert_eq!(text(&Some(json!("Pho"))), Some("Pho"));
        assert_eq!(text(&Some(json!(""))), None);
        assert_eq!(text(&Some(json!(12))), None);
        assert_eq!(text(&None), None);
    }

    #[test]
    fn trimmed_text_rejects_blank_strings() {
        assert_eq!(trimmed_text(&Some(json!("   "))), None);
        assert_eq!(trimmed_text(&Some(json!(" 5 Elm St "))), Some(" 5 Elm St "));
    }

    #[test]
    fn positive_number_accepts_integers_and_decimals() {
        assert!(positive_number(&Some(json!(26))).is_some());
        assert!(positive_number(&Some(json!(9.5))).is_some());
        assert!(positive_number(&Some(json!(0))).is_none());
        assert!(positive_number(&Some(json!(-3))).is_none());
        assert!(positive_number(&Some(json!("17"))).is_none());
    }

    #[test]
    fn claimed_id_skips_blank_values() {
        assert_eq!(claimed_id(&None), None);
        assert_eq!(claimed_id(&Some(json!(""))), None);
        assert_eq!(claimed_id(&Some(json!("abc"))), Some(&json!("abc")));
        assert_eq!(claimed_id(&Some(json!(7))), Some(&json!(7)));
    }

    #[test]
    fn render_leaves_strings_unquoted() {
        assert_eq!(render(&json!("abc")), "abc");
        assert_eq!(render(&json!(7)), "7");
    }
}
