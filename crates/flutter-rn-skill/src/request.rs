use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

use crate::indent::DEFAULT_INDENT;

/// Optional settings carried in a request's `options` object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SkillOptions {
    /// Prepend the React / React Native import lines.
    pub include_imports: bool,
    /// Spaces per indentation level in the returned code. `4` and `4.0`
    /// are both accepted.
    #[serde(deserialize_with = "whole_number")]
    pub indent_size: usize,
}

impl Default for SkillOptions {
    fn default() -> Self {
        Self { include_imports: false, indent_size: DEFAULT_INDENT }
    }
}

/// A validated request: trimmed source text plus options.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillRequest {
    pub flutter_code: String,
    pub options: SkillOptions,
}

pub const MISSING_CODE: &str = "Missing required parameter: flutter_code";
pub const CODE_NOT_STRING: &str = "Parameter flutter_code must be a string";
pub const CODE_EMPTY: &str = "flutter_code cannot be empty";

impl SkillRequest {
    /// Validate a raw JSON request.
    ///
    /// The error is the message reported back to the caller.
    pub fn from_value(params: &Value) -> Result<Self, String> {
        let code = match params.get("flutter_code") {
            None => return Err(MISSING_CODE.to_string()),
            Some(v) if is_blank_value(v) => return Err(MISSING_CODE.to_string()),
            Some(Value::String(s)) => s,
            Some(_) => return Err(CODE_NOT_STRING.to_string()),
        };

        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(CODE_EMPTY.to_string());
        }

        let options = match params.get("options") {
            None | Some(Value::Null) => SkillOptions::default(),
            Some(v) => SkillOptions::deserialize(v).map_err(|e| format!("Invalid options: {}", e))?,
        };

        Ok(Self { flutter_code: trimmed.to_string(), options })
    }
}

fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let v = f64::deserialize(deserializer)?;
    if v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 {
        Ok(v as usize)
    } else {
        Err(de::Error::custom(format!("expected a non-negative whole number, got {}", v)))
    }
}

/// `null`, `false`, `0` and `""` count as not supplied.
fn is_blank_value(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_request() {
        let r = SkillRequest::from_value(&json!({ "flutter_code": "  Text('a')\n" })).unwrap();
        assert_eq!(r.flutter_code, "Text('a')");
        assert_eq!(r.options, SkillOptions::default());
    }

    #[test]
    fn options_are_read_with_defaults() {
        let r = SkillRequest::from_value(&json!({
            "flutter_code": "Text('a')",
            "options": { "indent_size": 4 }
        }))
        .unwrap();
        assert_eq!(r.options, SkillOptions { include_imports: false, indent_size: 4 });
    }

    #[test]
    fn integral_float_indent_is_accepted() {
        let r = SkillRequest::from_value(&json!({
            "flutter_code": "Text('a')",
            "options": { "indent_size": 4.0 }
        }))
        .unwrap();
        assert_eq!(r.options.indent_size, 4);
    }

    #[test]
    fn fractional_or_negative_indent_is_rejected() {
        for bad in [json!(2.5), json!(-1)] {
            let e = SkillRequest::from_value(&json!({
                "flutter_code": "Text('a')",
                "options": { "indent_size": bad }
            }))
            .unwrap_err();
            assert!(e.starts_with("Invalid options:"), "{}", e);
        }
    }

    #[test]
    fn missing_code() {
        assert_eq!(SkillRequest::from_value(&json!({})).unwrap_err(), MISSING_CODE);
        assert_eq!(SkillRequest::from_value(&json!({ "flutter_code": null })).unwrap_err(), MISSING_CODE);
        assert_eq!(SkillRequest::from_value(&json!({ "flutter_code": "" })).unwrap_err(), MISSING_CODE);
        assert_eq!(SkillRequest::from_value(&json!("Text('a')")).unwrap_err(), MISSING_CODE);
    }

    #[test]
    fn code_must_be_string() {
        assert_eq!(SkillRequest::from_value(&json!({ "flutter_code": 42 })).unwrap_err(), CODE_NOT_STRING);
        assert_eq!(SkillRequest::from_value(&json!({ "flutter_code": ["x"] })).unwrap_err(), CODE_NOT_STRING);
    }

    #[test]
    fn blank_code() {
        assert_eq!(SkillRequest::from_value(&json!({ "flutter_code": " \n\t" })).unwrap_err(), CODE_EMPTY);
    }

    #[test]
    fn bad_options() {
        let e = SkillRequest::from_value(&json!({
            "flutter_code": "Text('a')",
            "options": { "indent_size": "wide" }
        }))
        .unwrap_err();
        assert!(e.starts_with("Invalid options:"));
    }
}
