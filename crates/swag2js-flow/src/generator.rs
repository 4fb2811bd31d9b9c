use swag2js_core::ir::ClientSpec;
use swag2js_core::{CodeGenerator, GeneratedFile};
use thiserror::Error;

use crate::emitters;
use crate::emitters::scaffold::PackageOptions;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("template rendering failed: {0}")]
    Render(#[from] minijinja::Error),

    #[error("failed to serialize package manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Settings for the Flow emitter.
#[derive(Debug, Clone, Default)]
pub struct FlowConfig {
    /// Emit a `package.json` when set.
    pub package: Option<PackageOptions>,
}

/// Flow-typed JavaScript client generator.
pub struct FlowClientGenerator;

impl CodeGenerator for FlowClientGenerator {
    type Config = FlowConfig;
    type Error = GeneratorError;

    fn generate(
        &self,
        client: &ClientSpec,
        config: &FlowConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        let mut files = emitters::helpers::emit_helpers();
        files.extend(emitters::types::emit_types(client)?);
        files.extend(emitters::operations::emit_operations(client)?);
        files.push(emitters::index::emit_index(client)?);

        if let Some(ref package) = config.package {
            files.push(emitters::scaffold::emit_package_json(client, package)?);
        }

        log::debug!("rendered {} files", files.len());
        Ok(files)
    }
}
