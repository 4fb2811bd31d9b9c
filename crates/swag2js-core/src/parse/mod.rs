pub mod operation;
pub mod parameter;
pub mod schema;
pub mod spec;

use crate::error::ParseError;
use spec::{PathEntry, SwaggerSpec};
use operation::PathItem;

/// Parse a Swagger document from YAML.
pub fn from_yaml(input: &str) -> Result<SwaggerSpec, ParseError> {
    let spec: SwaggerSpec = serde_yaml_ng::from_str(input)?;
    validate_version(&spec)?;
    validate_paths(&spec)?;
    Ok(spec)
}

/// Parse a Swagger document from JSON.
pub fn from_json(input: &str) -> Result<SwaggerSpec, ParseError> {
    let spec: SwaggerSpec = serde_json::from_str(input)?;
    validate_version(&spec)?;
    validate_paths(&spec)?;
    Ok(spec)
}

fn validate_version(spec: &SwaggerSpec) -> Result<(), ParseError> {
    if spec.swagger.is_empty() {
        return Err(ParseError::MissingField("swagger".to_string()));
    }
    if !spec.swagger.starts_with("2.") {
        return Err(ParseError::UnsupportedVersion(spec.swagger.clone()));
    }
    Ok(())
}

/// A `/`-prefixed key that did not parse as a path item is malformed; report
/// why instead of silently skipping it.
fn validate_paths(spec: &SwaggerSpec) -> Result<(), ParseError> {
    for (path, entry) in &spec.paths {
        let PathEntry::Other(value) = entry else {
            continue;
        };
        if path.starts_with('/') {
            serde_json::from_value::<PathItem>(value.clone()).map_err(|source| {
                ParseError::InvalidPathItem {
                    path: path.clone(),
                    source,
                }
            })?;
        }
    }
    Ok(())
}
