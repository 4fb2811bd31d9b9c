use minijinja::context;
use swag2js_core::GeneratedFile;
use swag2js_core::ir::{ClientSpec, TypeDefinition};

use super::environment;
use crate::generator::GeneratorError;
use crate::renderer::render_type;

/// Emit one `types/<Name>.js` file per definition.
pub fn emit_types(client: &ClientSpec) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let mut env = environment();
    env.add_template("type.js.j2", include_str!("../../templates/type.js.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("type.js.j2")?;

    client
        .definitions
        .iter()
        .map(|definition| -> Result<GeneratedFile, GeneratorError> {
            let content = tmpl.render(definition_ctx(definition))?;
            Ok(GeneratedFile {
                path: format!("types/{}.js", definition.name),
                content,
            })
        })
        .collect()
}

fn definition_ctx(definition: &TypeDefinition) -> minijinja::Value {
    context! {
        name => definition.name.clone(),
        imports => definition.imports.clone(),
        type_expr => render_type(&definition.type_expr),
    }
}
