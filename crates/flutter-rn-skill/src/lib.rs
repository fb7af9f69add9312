//! Skill envelope around [`flutter_rn_core`].
//!
//! Accepts a JSON request `{ "flutter_code": "...", "options": { ... } }`,
//! runs one conversion and answers with a [`SkillResponse`]. Every outcome,
//! including invalid input and parse failures, is reported as data.
//!
//! ```rust
//! let reply = flutter_rn_skill::handle_json(r#"{"flutter_code": "Text('Hi')"}"#);
//! assert!(reply.contains(r#""success":true"#));
//! ```

pub mod indent;
pub mod logging;
pub mod request;
pub mod response;

pub use request::{SkillOptions, SkillRequest};
pub use response::{Metadata, SkillResponse};

use serde_json::Value;

/// Lines prepended when `include_imports` is set.
pub const IMPORT_PREAMBLE: &str =
    "import React from 'react';\nimport { View, Text, StyleSheet } from 'react-native';\n";

/// Handle one request.
pub fn handle(params: &Value) -> SkillResponse {
    let request = match SkillRequest::from_value(params) {
        Ok(r) => r,
        Err(message) => {
            log::debug!("rejected request: {}", message);
            return SkillResponse::invalid(message);
        }
    };
    run(&request)
}

/// Handle one request given as JSON text and answer with JSON text.
pub fn handle_json(input: &str) -> String {
    let response = match serde_json::from_str::<Value>(input) {
        Ok(params) => handle(&params),
        Err(e) => SkillResponse::failed(format!("Invalid request JSON: {}", e), "InvalidJson"),
    };
    match serde_json::to_string(&response) {
        Ok(json) => json,
        Err(e) => {
            log::error!("could not serialize response: {}", e);
            r#"{"success":false,"output":null,"error":"could not serialize response"}"#.to_string()
        }
    }
}

/// Convert an already validated request.
pub fn run(request: &SkillRequest) -> SkillResponse {
    let conversion = match flutter_rn_core::try_convert(&request.flutter_code) {
        Ok(c) => c,
        Err(e) => {
            log::debug!("parse failed: {}", e);
            return SkillResponse::failed(e.to_string(), "ParseError");
        }
    };

    let mut output = conversion.output;
    if request.options.include_imports {
        output.insert_str(0, IMPORT_PREAMBLE);
    }
    output = indent::reformat(&output, request.options.indent_size);

    SkillResponse::converted(
        output,
        Metadata {
            input_widget: Some(conversion.input_widget),
            output_component: Some(conversion.output_component.to_string()),
            warnings: conversion.warnings,
            error_type: None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_with_metadata() {
        let r = handle(&json!({ "flutter_code": "Container(child: Text('Hello'))" }));
        assert!(r.success);
        assert_eq!(r.output.as_deref(), Some("<View>\n  <Text>Hello</Text>\n</View>\n"));
        let meta = r.metadata.unwrap();
        assert_eq!(meta.input_widget.as_deref(), Some("Container"));
        assert_eq!(meta.output_component.as_deref(), Some("View"));
        assert!(meta.warnings.is_empty());
    }

    #[test]
    fn imports_are_prepended() {
        let r = handle(&json!({
            "flutter_code": "Text('x')",
            "options": { "include_imports": true }
        }));
        assert_eq!(r.output.as_deref(), Some(&*format!("{}<Text>x</Text>\n", IMPORT_PREAMBLE)));
    }

    #[test]
    fn indent_size_is_applied() {
        let r = handle(&json!({
            "flutter_code": "Row(children: [Text('a')])",
            "options": { "indent_size": 4 }
        }));
        assert_eq!(
            r.output.as_deref(),
            Some("<View style={{flexDirection: 'row'}}>\n    <Text>a</Text>\n</View>\n")
        );
    }

    #[test]
    fn unknown_widget_warns() {
        let r = handle(&json!({ "flutter_code": "Card(child: Text('a'))" }));
        assert!(r.success);
        let meta = r.metadata.unwrap();
        assert_eq!(meta.warnings.len(), 1);
        assert!(meta.warnings[0].starts_with("Widget 'Card' may not be fully supported."));
    }

    #[test]
    fn repeated_unknown_widget_warns_once() {
        let r = handle(&json!({ "flutter_code": "Column(children: [Card(), Card(child: Card())])" }));
        assert_eq!(r.metadata.unwrap().warnings.len(), 1);
    }

    #[test]
    fn parse_error_is_reported() {
        let r = handle(&json!({ "flutter_code": "Container(" }));
        assert!(!r.success);
        assert_eq!(r.output, None);
        assert!(r.error.unwrap().starts_with("dart parse error at 1:10"));
        assert_eq!(r.metadata.unwrap().error_type.as_deref(), Some("ParseError"));
    }

    #[test]
    fn validation_error_has_no_metadata() {
        let r = handle(&json!({ "flutter_code": "   " }));
        assert_eq!(r, SkillResponse::invalid(request::CODE_EMPTY));
    }

    #[test]
    fn json_round_trip_keeps_nullable_fields() {
        let out: Value = serde_json::from_str(&handle_json(r#"{"flutter_code": "SizedBox(width: 4)"}"#)).unwrap();
        assert_eq!(out["success"], json!(true));
        assert_eq!(out["error"], Value::Null);
        assert_eq!(out["output"], json!("<View style={{width: 4}} />\n"));
        assert!(out["metadata"].get("warnings").is_none());
    }

    #[test]
    fn malformed_json() {
        let out: Value = serde_json::from_str(&handle_json("{not json")).unwrap();
        assert_eq!(out["success"], json!(false));
        assert_eq!(out["output"], Value::Null);
        assert_eq!(out["metadata"]["error_type"], json!("InvalidJson"));
    }
}
