use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prefix of every reference into the top-level `definitions` table.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// A Swagger 2.0 schema object.
///
/// `type` is kept as a raw string: documents in the wild use `float` and
/// `int64` as types, and anything unrecognized must still parse.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(rename = "allOf", default, skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<Schema>,

    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<serde_json::Value>,

    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

/// The shape a schema takes for type translation, checked in priority order:
/// a definition reference wins over `allOf`, which wins over `type`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchemaKind<'a> {
    /// Reference to a top-level definition, by name.
    Reference(&'a str),
    /// `allOf` composition.
    Composite(&'a [Schema]),
    Object,
    Array(Option<&'a Schema>),
    /// A string, with its (possibly empty) enumerated values.
    String(&'a [serde_json::Value]),
    Number,
    Boolean,
    /// Missing or unrecognized type.
    Any,
}

impl Schema {
    /// The definition name this schema references, if it is a `#/definitions/` ref.
    pub fn definition_name(&self) -> Option<&str> {
        self.ref_path.as_deref()?.strip_prefix(DEFINITIONS_PREFIX)
    }

    pub fn kind(&self) -> SchemaKind<'_> {
        if let Some(name) = self.definition_name() {
            return SchemaKind::Reference(name);
        }
        if !self.all_of.is_empty() {
            return SchemaKind::Composite(&self.all_of);
        }
        match self.schema_type.as_deref() {
            Some("object") => SchemaKind::Object,
            Some("array") => SchemaKind::Array(self.items.as_deref()),
            Some("string") => SchemaKind::String(&self.enum_values),
            Some("number" | "integer" | "float" | "int64") => SchemaKind::Number,
            Some("boolean") => SchemaKind::Boolean,
            _ => SchemaKind::Any,
        }
    }

    /// Shorthand for a schema with only a `type`.
    pub fn of_type(schema_type: &str) -> Self {
        Self {
            schema_type: Some(schema_type.to_string()),
            ..Self::default()
        }
    }

    /// Shorthand for a `#/definitions/<name>` reference.
    pub fn reference(name: &str) -> Self {
        Self {
            ref_path: Some(format!("{DEFINITIONS_PREFIX}{name}")),
            ..Self::default()
        }
    }
}
