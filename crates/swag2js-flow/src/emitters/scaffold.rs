use swag2js_core::GeneratedFile;
use swag2js_core::ir::ClientSpec;

use crate::generator::GeneratorError;

const DEFAULT_VERSION: &str = "0.1.0";
const DEFAULT_DESCRIPTION: &str = "API client generated from a Swagger document";

/// Package manifest settings. Unset fields fall back to the document's
/// `info` block.
#[derive(Debug, Clone, Default)]
pub struct PackageOptions {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// Generate `package.json`.
pub fn emit_package_json(
    client: &ClientSpec,
    options: &PackageOptions,
) -> Result<GeneratedFile, GeneratorError> {
    let name = options
        .name
        .clone()
        .unwrap_or_else(|| slugify(&client.info.title));
    let version = options.version.clone().unwrap_or_else(|| {
        if client.info.version.is_empty() {
            DEFAULT_VERSION.to_string()
        } else {
            client.info.version.clone()
        }
    });
    let description = options
        .description
        .clone()
        .or_else(|| client.info.description.clone())
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    let manifest = serde_json::json!({
        "name": name,
        "description": description,
        "version": version,
        "main": "index.js",
        "license": "MIT",
        "dependencies": {},
    });

    let mut content = serde_json::to_string_pretty(&manifest)?;
    content.push('\n');
    Ok(GeneratedFile {
        path: "package.json".to_string(),
        content,
    })
}

/// Convert a title to a kebab-case package name.
fn slugify(title: &str) -> String {
    let mut result = String::new();
    let mut prev_dash = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else {
            if !prev_dash && !result.is_empty() {
                result.push('-');
            }
            prev_dash = true;
        }
    }

    while result.ends_with('-') {
        result.pop();
    }

    if result.is_empty() {
        "api-client".to_string()
    } else {
        result
    }
}
