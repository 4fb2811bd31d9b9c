use std::collections::HashMap;

use indexmap::IndexMap;

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::TransformError;
use crate::ir::TypeDefinition;
use crate::parse::schema::Schema;

use super::synthesizer::AJAX_OBJECT;
use super::type_translator::translate;

/// Translate every entry of `definitions` into a named type declaration, in
/// document order.
///
/// A definition named like a runtime type fails with
/// [`TransformError::ReservedDefinitionName`], since both would be written to
/// the same file.
pub fn translate_definitions(
    definitions: &IndexMap<String, Schema>,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<TypeDefinition>, TransformError> {
    if let Some(name) = definitions.keys().find(|name| name.as_str() == AJAX_OBJECT) {
        return Err(TransformError::ReservedDefinitionName { name: name.clone() });
    }

    let mut seen_lowercase: HashMap<String, String> = HashMap::new();

    let types: Vec<TypeDefinition> = definitions
        .iter()
        .map(|(name, schema)| {
            check_case_collision(name, &mut seen_lowercase, diagnostics);

            let mut imports = Vec::new();
            let type_expr = translate(schema, &mut imports, definitions);
            TypeDefinition {
                name: name.clone(),
                type_expr,
                imports: dedup_imports(imports, Some(name.as_str())),
            }
        })
        .collect();
    Ok(types)
}

/// Drop repeated names, keeping first occurrences, and drop `own_name`.
pub fn dedup_imports(imports: Vec<String>, own_name: Option<&str>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(imports.len());
    for name in imports {
        if Some(name.as_str()) != own_name && !unique.contains(&name) {
            unique.push(name);
        }
    }
    unique
}

fn check_case_collision(
    name: &str,
    seen_lowercase: &mut HashMap<String, String>,
    diagnostics: &mut Diagnostics,
) {
    let lower = name.to_lowercase();
    match seen_lowercase.get(&lower) {
        Some(existing) => diagnostics.warn(Warning::CaseCollision {
            name: name.to_string(),
            existing: existing.clone(),
        }),
        None => {
            seen_lowercase.insert(lower, name.to_string());
        }
    }
}
