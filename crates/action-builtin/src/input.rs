//! Input extraction helpers shared by the builtin actions.
//!
//! Every helper reports a missing or mistyped field as
//! [`ActionError::InvalidInput`] with the field name in the message.

use serde_json::{Map, Value};

use stencil_action::ActionError;

pub(crate) fn require_str<'a>(
    input: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a str, ActionError> {
    match input.get(key) {
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(not_a(key, "string")),
        None => Err(missing(key)),
    }
}

pub(crate) fn optional_str<'a>(
    input: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a str>, ActionError> {
    match input.get(key) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(not_a(key, "string")),
    }
}

/// Optional boolean, absent means `false`.
pub(crate) fn flag(input: &Map<String, Value>, key: &str) -> Result<bool, ActionError> {
    match input.get(key) {
        None => Ok(false),
        Some(Value::Bool(value)) => Ok(*value),
        Some(_) => Err(not_a(key, "boolean")),
    }
}

pub(crate) fn require_str_array<'a>(
    input: &'a Map<String, Value>,
    key: &str,
) -> Result<Vec<&'a str>, ActionError> {
    let Some(value) = input.get(key) else {
        return Err(missing(key));
    };
    let Some(items) = value.as_array() else {
        return Err(not_a(key, "array of strings"));
    };
    items
        .iter()
        .map(|item| item.as_str().ok_or_else(|| not_a(key, "array of strings")))
        .collect()
}

fn missing(key: &str) -> ActionError {
    ActionError::invalid_input(format!("missing required field `{key}`"))
}

fn not_a(key: &str, expected: &str) -> ActionError {
    ActionError::invalid_input(format!("field `{key}` must be a {expected}"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn payload() -> Map<String, Value> {
        let Value::Object(map) = serde_json::json!({
            "name": "demo",
            "count": 3,
            "verbose": true,
            "files": ["a.txt", "b/c.txt"],
            "mixed": ["a.txt", 7],
        }) else {
            unreachable!()
        };
        map
    }

    #[test]
    fn require_str_reads_strings_and_rejects_the_rest() {
        let input = payload();
        assert_eq!(require_str(&input, "name").unwrap(), "demo");

        let err = require_str(&input, "count").unwrap_err();
        assert_eq!(err.to_string(), "invalid input: field `count` must be a string");

        let err = require_str(&input, "absent").unwrap_err();
        assert_eq!(err.to_string(), "invalid input: missing required field `absent`");
    }

    #[test]
    fn optional_str_distinguishes_absent_from_mistyped() {
        let input = payload();
        assert_eq!(optional_str(&input, "name").unwrap(), Some("demo"));
        assert_eq!(optional_str(&input, "absent").unwrap(), None);
        assert!(optional_str(&input, "count").is_err());
    }

    #[test]
    fn flag_defaults_to_false() {
        let input = payload();
        assert!(flag(&input, "verbose").unwrap());
        assert!(!flag(&input, "absent").unwrap());
        assert!(flag(&input, "name").is_err());
    }

    #[test]
    fn require_str_array_wants_every_item_to_be_a_string() {
        let input = payload();
        assert_eq!(
            require_str_array(&input, "files").unwrap(),
            vec!["a.txt", "b/c.txt"]
        );
        assert!(require_str_array(&input, "mixed").is_err());
        assert!(require_str_array(&input, "name").is_err());
        assert!(require_str_array(&input, "absent").is_err());
    }
}
