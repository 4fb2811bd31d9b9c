use minijinja::context;
use swag2js_core::GeneratedFile;
use swag2js_core::ir::{ClientSpec, OperationFunction};

use super::environment;
use crate::generator::GeneratorError;
use crate::renderer::{render_alias, render_function, render_import};

/// Keep free text from closing the surrounding block comment, and continue
/// each extra line with ` * `.
fn comment_safe(value: String) -> String {
    value
        .trim()
        .replace("*/", "*\\/")
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n * ")
}

/// Emit one `src/<operationId>.js` module per operation.
pub fn emit_operations(client: &ClientSpec) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let mut env = environment();
    env.add_filter("comment_safe", comment_safe);
    env.add_template(
        "operation.js.j2",
        include_str!("../../templates/operation.js.j2"),
    )
    .expect("template should be valid");
    let tmpl = env.get_template("operation.js.j2")?;

    let mut files = Vec::with_capacity(client.operations.len());
    for op in &client.operations {
        files.push(GeneratedFile {
            path: format!("src/{}.js", op.name),
            content: tmpl.render(operation_ctx(op))?,
        });
    }
    Ok(files)
}

fn operation_ctx(op: &OperationFunction) -> minijinja::Value {
    let imports: Vec<String> = op.program.imports.iter().map(render_import).collect();
    let aliases: Vec<String> = op.program.aliases.iter().map(render_alias).collect();

    context! {
        imports => imports,
        aliases => aliases,
        summary => op.summary.clone(),
        description => op.description.clone(),
        function => render_function(&op.program.default_export),
    }
}
