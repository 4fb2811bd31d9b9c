use crate::diagnostics::Diagnostics;
use crate::error::TransformError;
use crate::ir::{ClientInfo, ClientSpec, OperationFunction};
use crate::parse::spec::SwaggerSpec;

use super::definitions::translate_definitions;
use super::normalizer::normalize;
use super::synthesizer::{resolve_hostname, synthesize};

/// Overrides applied on top of what the document declares.
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    /// Replaces the document's `basePath`.
    pub base_path: Option<String>,
    /// Replaces the `scheme://host` prefix.
    pub base_url: Option<String>,
}

/// Transform a parsed document into a [`ClientSpec`] with default options.
pub fn transform(spec: &SwaggerSpec) -> Result<ClientSpec, TransformError> {
    transform_with_options(spec, &TransformOptions::default())
}

/// Transform a parsed document into a [`ClientSpec`]. Fails atomically on the
/// first fatal error; non-fatal findings end up in `ClientSpec::warnings`.
pub fn transform_with_options(
    spec: &SwaggerSpec,
    options: &TransformOptions,
) -> Result<ClientSpec, TransformError> {
    let mut diagnostics = Diagnostics::new();

    // Phase 1: flatten paths into operation records
    let records = normalize(spec, options.base_path.as_deref(), &mut diagnostics)?;

    // Phase 2: one type declaration per definition
    let definitions = translate_definitions(&spec.definitions, &mut diagnostics)?;
    log::debug!("translated {} definitions", definitions.len());

    // Phase 3: hostname
    let hostname = resolve_hostname(spec, options.base_url.as_deref(), &mut diagnostics);

    // Phase 4: request functions
    let operations = records
        .iter()
        .map(|record| synthesize(record, spec, hostname.as_deref()))
        .collect::<Result<Vec<OperationFunction>, _>>()?;
    log::debug!("synthesized {} operations", operations.len());

    Ok(ClientSpec {
        info: ClientInfo {
            title: spec.info.title.clone(),
            description: spec.info.description.clone(),
            version: spec.info.version.clone(),
        },
        hostname,
        definitions,
        operations,
        warnings: diagnostics.into_warnings(),
    })
}
