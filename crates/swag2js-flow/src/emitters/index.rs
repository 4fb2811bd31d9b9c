use minijinja::context;
use swag2js_core::GeneratedFile;
use swag2js_core::ir::ClientSpec;

use super::environment;
use crate::generator::GeneratorError;

/// Emit `index.js`, re-exporting every operation and definition.
pub fn emit_index(client: &ClientSpec) -> Result<GeneratedFile, GeneratorError> {
    let mut env = environment();
    env.add_template("index.js.j2", include_str!("../../templates/index.js.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("index.js.j2")?;

    let operations: Vec<&str> = client.operations.iter().map(|op| op.name.as_str()).collect();
    let definitions: Vec<&str> = client.definitions.iter().map(|d| d.name.as_str()).collect();

    let content = tmpl.render(context! {
        operations => operations,
        definitions => definitions,
    })?;
    Ok(GeneratedFile {
        path: "index.js".to_string(),
        content,
    })
}
