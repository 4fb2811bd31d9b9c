use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::operation::PathItem;
use super::parameter::Parameter;
use super::schema::Schema;

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub version: String,
}

/// Tag definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One value of the `paths` object. Besides path items it may hold vendor
/// extensions (`x-*`) and a path-level `parameters` list, which are kept as
/// raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathEntry {
    Item(PathItem),
    Other(serde_json::Value),
}

impl PathEntry {
    pub fn item(&self) -> Option<&PathItem> {
        match self {
            PathEntry::Item(item) => Some(item),
            PathEntry::Other(_) => None,
        }
    }
}

/// Top-level Swagger 2.0 document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SwaggerSpec {
    #[serde(default)]
    pub swagger: String,

    #[serde(default)]
    pub info: Info,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(rename = "basePath", skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumes: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub produces: Vec<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub paths: IndexMap<String, PathEntry>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub definitions: IndexMap<String, Schema>,

    /// Parameters shared across operations, referenced as `#/parameters/<name>`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, Parameter>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl SwaggerSpec {
    /// The path item at `path`, if that key holds one.
    pub fn path_item(&self, path: &str) -> Option<&PathItem> {
        self.paths.get(path).and_then(PathEntry::item)
    }
}
