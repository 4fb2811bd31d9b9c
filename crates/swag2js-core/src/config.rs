use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::transform::TransformOptions;

/// Top-level project configuration loaded from `.swag2js.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Swag2JsConfig {
    pub input: String,
    pub output: String,
    pub package: PackageConfig,
    /// Replaces the document's `basePath`.
    pub base_path: Option<String>,
    /// Replaces the `scheme://host` prefix derived from the document.
    pub base_url: Option<String>,
    /// Remove an existing output directory instead of refusing to write.
    pub force: bool,
}

impl Default for Swag2JsConfig {
    fn default() -> Self {
        Self {
            input: "swagger.yaml".to_string(),
            output: "generated".to_string(),
            package: PackageConfig::default(),
            base_path: None,
            base_url: None,
            force: false,
        }
    }
}

impl Swag2JsConfig {
    /// The subset of the configuration the transform phase needs.
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            base_path: self.base_path.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

/// Metadata for the generated package manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Package name (defaults to the slugified document title).
    pub name: Option<String>,
    /// Package version (defaults to the document's `info.version`).
    pub version: Option<String>,
    pub description: Option<String>,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".swag2js.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<Swag2JsConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config: Swag2JsConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# swag2js configuration
input: swagger.yaml
output: generated

package: {}
  # name: my-api-client        # defaults to the slugified info.title
  # version: 1.0.0             # defaults to info.version
  # description: Generated API client

# base_path: /api/v2           # overrides basePath from the document
# base_url: https://api.example.com   # overrides schemes[0]://host
force: false
"#
}
