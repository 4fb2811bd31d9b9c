use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported Swagger version: {0}")]
    UnsupportedVersion(String),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid path item at {path}: {source}")]
    InvalidPathItem {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("parameter reference target not found: {0}")]
    UnresolvedParameter(String),

    #[error("invalid reference format: {0}")]
    InvalidRefFormat(String),
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error(
        "the document contains duplicate operation identifiers for different endpoints: {}",
        .identifiers.join(", ")
    )]
    DuplicateOperationIdentifier { identifiers: Vec<String> },

    #[error(
        "operation {operation} has URL {url} with placeholders {used:?}, \
         but declares required path parameters {provided:?}"
    )]
    TemplateParameterMismatch {
        operation: String,
        url: String,
        used: Vec<String>,
        provided: Vec<String>,
    },

    #[error("definition {name} would overwrite the runtime type types/{name}.js")]
    ReservedDefinitionName { name: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml_ng::Error,
    },
}
