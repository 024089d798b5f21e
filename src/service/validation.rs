//! Presence checks and typed field access on JSON request bodies.

use crate::error::AppError;
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// Every field in `fields` must be present and non-empty, else `Validation(message)`.
    /// `null`, `""`, `[]`, `{}`, `0` and `false` all count as missing.
    pub fn require(body: &Map<String, Value>, fields: &[&str], message: &str) -> Result<(), AppError> {
        if fields.iter().all(|f| is_present(body.get(*f))) {
            Ok(())
        } else {
            Err(AppError::Validation(message.to_string()))
        }
    }

    /// Text field. Numbers are accepted and rendered as text.
    pub fn text(body: &Map<String, Value>, field: &str) -> Result<String, AppError> {
        match body.get(field) {
            Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            _ => Err(AppError::Validation(format!("{} must be text", field))),
        }
    }

    /// Integer id, given as a JSON number or a numeric string.
    pub fn id(body: &Map<String, Value>, field: &str) -> Result<i32, AppError> {
        let parsed = match body.get(field) {
            Some(Value::Number(n)) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
            Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| AppError::Validation(format!("{} must be a numeric id", field)))
    }

    /// Non-empty array; string entries are kept, anything else is skipped.
    pub fn string_list(body: &Map<String, Value>, field: &str, message: &str) -> Result<Vec<String>, AppError> {
        match body.get(field) {
            Some(Value::Array(items)) if !items.is_empty() => Ok(items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()),
            _ => Err(AppError::Validation(message.to_string())),
        }
    }
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn require_passes_when_all_present() {
        let body = obj(json!({ "email": "a@b.in", "password": "x" }));
        assert!(RequestValidator::require(&body, &["email", "password"], "missing").is_ok());
    }

    #[test]
    fn require_rejects_missing_null_and_empty() {
        for body in [
            json!({ "email": "a@b.in" }),
            json!({ "email": "a@b.in", "password": null }),
            json!({ "email": "a@b.in", "password": "" }),
            json!({ "email": [], "password": "x" }),
            json!({ "email": "a@b.in", "password": 0 }),
            json!({ "email": "a@b.in", "password": 0.0 }),
            json!({ "email": "a@b.in", "password": false }),
        ] {
            let err = RequestValidator::require(&obj(body), &["email", "password"], "Email and password required")
                .unwrap_err();
            assert!(matches!(err, AppError::Validation(ref m) if m == "Email and password required"));
        }
    }

    #[test]
    fn id_accepts_numbers_and_numeric_strings() {
        let body = obj(json!({ "a": 7, "b": "12", "c": "north", "d": 1.5, "e": 9_999_999_999u64 }));
        assert_eq!(RequestValidator::id(&body, "a").unwrap(), 7);
        assert_eq!(RequestValidator::id(&body, "b").unwrap(), 12);
        assert!(RequestValidator::id(&body, "c").is_err());
        assert!(RequestValidator::id(&body, "d").is_err());
        assert!(RequestValidator::id(&body, "e").is_err());
    }

    #[test]
    fn text_accepts_numbers() {
        let body = obj(json!({ "severity": "High", "level": 3, "flag": true }));
        assert_eq!(RequestValidator::text(&body, "severity").unwrap(), "High");
        assert_eq!(RequestValidator::text(&body, "level").unwrap(), "3");
        assert!(RequestValidator::text(&body, "flag").is_err());
    }

    #[test]
    fn string_list_skips_non_strings() {
        let body = obj(json!({ "crops": ["Wheat", 3, null, "Rice"] }));
        assert_eq!(
            RequestValidator::string_list(&body, "crops", "No crops selected").unwrap(),
            vec!["Wheat".to_string(), "Rice".to_string()]
        );
        let empty = obj(json!({ "crops": [] }));
        assert!(RequestValidator::string_list(&empty, "crops", "No crops selected").is_err());
        let scalar = obj(json!({ "crops": "Wheat" }));
        assert!(RequestValidator::string_list(&scalar, "crops", "No crops selected").is_err());
    }
}
