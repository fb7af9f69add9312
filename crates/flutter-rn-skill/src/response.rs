use serde::Serialize;

/// The JSON envelope returned for every request.
///
/// `success`, `output` and `error` are always present; `metadata` only when
/// there is something to report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillResponse {
    pub success: bool,
    pub output: Option<String>,
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_widget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_component: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

impl SkillResponse {
    pub fn converted(output: String, metadata: Metadata) -> Self {
        Self { success: true, output: Some(output), error: None, metadata: Some(metadata) }
    }

    /// A request rejected before conversion was attempted.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self { success: false, output: None, error: Some(message.into()), metadata: None }
    }

    pub fn failed(message: impl Into<String>, error_type: &str) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(message.into()),
            metadata: Some(Metadata { error_type: Some(error_type.to_string()), ..Metadata::default() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn invalid_keeps_null_fields() {
        let v = to_value(SkillResponse::invalid("nope")).unwrap();
        assert_eq!(v, json!({ "success": false, "output": null, "error": "nope" }));
    }

    #[test]
    fn empty_warnings_are_omitted() {
        let meta = Metadata {
            input_widget: Some("Text".into()),
            output_component: Some("Text".into()),
            ..Metadata::default()
        };
        let v = to_value(SkillResponse::converted("<Text />\n".into(), meta)).unwrap();
        assert_eq!(
            v,
            json!({
                "success": true,
                "output": "<Text />\n",
                "error": null,
                "metadata": { "input_widget": "Text", "output_component": "Text" }
            })
        );
    }

    #[test]
    fn failure_has_error_type() {
        let v = to_value(SkillResponse::failed("bad", "ParseError")).unwrap();
        assert_eq!(v["metadata"], json!({ "error_type": "ParseError" }));
    }
}
