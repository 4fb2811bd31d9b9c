use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::parameter::ParameterOrRef;
use super::schema::Schema;

/// An API operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumes: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterOrRef>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, Response>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
}

impl Operation {
    /// Schema of the `200` response, falling back to `default`.
    pub fn success_schema(&self) -> Option<&Schema> {
        ["200", "default"]
            .into_iter()
            .find_map(|code| self.responses.get(code)?.schema.as_ref())
    }
}

/// A response. Responses given as `$ref` carry no schema here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

/// A path item, containing operations keyed by HTTP method. Keys that are not
/// one of the supported methods (vendor extensions, `head`) are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterOrRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_schema_prefers_200() {
        let op: Operation = serde_json::from_str(
            r#"{
                "responses": {
                    "default": {"description": "err", "schema": {"type": "string"}},
                    "200": {"description": "ok", "schema": {"type": "boolean"}}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(
            op.success_schema().unwrap().schema_type.as_deref(),
            Some("boolean")
        );
    }

    #[test]
    fn test_success_schema_falls_back_to_default() {
        let op: Operation = serde_json::from_str(
            r#"{"responses": {"404": {"description": "missing"}, "default": {"description": "any", "schema": {"type": "number"}}}}"#,
        )
        .unwrap();
        assert_eq!(
            op.success_schema().unwrap().schema_type.as_deref(),
            Some("number")
        );
    }

    #[test]
    fn test_200_without_schema_falls_back() {
        let op: Operation = serde_json::from_str(
            r#"{"responses": {"200": {"description": "ok"}, "default": {"schema": {"type": "string"}}}}"#,
        )
        .unwrap();
        assert!(op.success_schema().is_some());
    }

    #[test]
    fn test_unknown_path_item_keys_are_ignored() {
        let item: PathItem = serde_json::from_str(
            r#"{"x-internal": true, "head": {"operationId": "h"}, "get": {"operationId": "g"}}"#,
        )
        .unwrap();
        assert!(item.get.is_some());
        assert!(item.post.is_none());
    }
}
