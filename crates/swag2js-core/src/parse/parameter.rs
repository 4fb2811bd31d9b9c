use serde::{Deserialize, Serialize};

use super::schema::Schema;

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    FormData,
    Body,
}

/// A Swagger 2.0 parameter. Body parameters carry a `schema`; every other
/// location describes its value inline with `type`/`items`/`enum`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<serde_json::Value>,

    #[serde(rename = "collectionFormat", skip_serializing_if = "Option::is_none")]
    pub collection_format: Option<String>,
}

impl Parameter {
    /// The schema describing this parameter's value: the body `schema` if
    /// present, else one assembled from the inline `type`.
    pub fn value_schema(&self) -> Option<Schema> {
        if let Some(ref schema) = self.schema {
            return Some(schema.clone());
        }
        self.param_type.as_ref().map(|t| Schema {
            schema_type: Some(t.clone()),
            format: self.format.clone(),
            description: self.description.clone(),
            items: self.items.clone(),
            enum_values: self.enum_values.clone(),
            ..Schema::default()
        })
    }
}

/// A reference or inline parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Parameter(Parameter),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_type_becomes_schema() {
        let p: Parameter = serde_json::from_str(
            r#"{"name": "status", "in": "query", "type": "string", "enum": ["a", "b"]}"#,
        )
        .unwrap();
        let schema = p.value_schema().unwrap();
        assert_eq!(schema.schema_type.as_deref(), Some("string"));
        assert_eq!(schema.enum_values.len(), 2);
    }

    #[test]
    fn test_body_schema_preferred() {
        let p: Parameter = serde_json::from_str(
            r##"{"name": "body", "in": "body", "type": "string", "schema": {"$ref": "#/definitions/Pet"}}"##,
        )
        .unwrap();
        assert_eq!(p.value_schema().unwrap().definition_name(), Some("Pet"));
    }

    #[test]
    fn test_untyped_parameter_has_no_schema() {
        let p: Parameter =
            serde_json::from_str(r#"{"name": "x", "in": "formData"}"#).unwrap();
        assert_eq!(p.location, ParameterLocation::FormData);
        assert!(p.value_schema().is_none());
    }

    #[test]
    fn test_parameter_ref() {
        let p: ParameterOrRef =
            serde_json::from_str(r##"{"$ref": "#/parameters/limit"}"##).unwrap();
        assert!(matches!(p, ParameterOrRef::Ref { ref_path } if ref_path == "#/parameters/limit"));
    }
}
