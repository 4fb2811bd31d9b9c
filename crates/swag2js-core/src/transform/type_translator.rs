use indexmap::IndexMap;

use crate::ast::{ObjectProperty, TypeExpr};
use crate::parse::schema::{Schema, SchemaKind};

/// Translate one schema node into a type expression.
///
/// References to top-level definitions are never inlined: their name is
/// pushed onto `imports` and an opaque [`TypeExpr::Named`] is returned, so
/// self- and mutually-referential definitions terminate. `imports` may
/// receive the same name more than once; deduplication is up to the caller.
pub fn translate(
    schema: &Schema,
    imports: &mut Vec<String>,
    definitions: &IndexMap<String, Schema>,
) -> TypeExpr {
    match schema.kind() {
        SchemaKind::Reference(name) => {
            imports.push(name.to_string());
            TypeExpr::named(name)
        }
        SchemaKind::Composite(parts) => merge_all_of(schema, parts, imports, definitions),
        SchemaKind::Object => {
            if schema.properties.is_empty() {
                TypeExpr::OpenObject
            } else {
                let properties: IndexMap<&str, &Schema> = schema
                    .properties
                    .iter()
                    .map(|(name, property)| (name.as_str(), property))
                    .collect();
                let required: Vec<&str> = schema.required.iter().map(String::as_str).collect();
                exact_object(&properties, &required, imports, definitions)
            }
        }
        SchemaKind::Array(items) => {
            let element = match items {
                Some(items) => translate(items, imports, definitions),
                None => TypeExpr::Any,
            };
            TypeExpr::Array(Box::new(element))
        }
        SchemaKind::String(values) => {
            let literals: Vec<TypeExpr> = values
                .iter()
                .filter_map(|v| v.as_str())
                .map(|s| TypeExpr::StringLiteral(s.to_string()))
                .collect();
            if literals.is_empty() {
                TypeExpr::String
            } else {
                TypeExpr::Union(literals)
            }
        }
        SchemaKind::Number => TypeExpr::Number,
        SchemaKind::Boolean => TypeExpr::Boolean,
        SchemaKind::Any => TypeExpr::Any,
    }
}

/// Flatten `allOf` parts into one exact object. Referenced parts are resolved
/// one level deep; properties declared next to `allOf` are merged last. A
/// later property with the same name replaces an earlier one.
fn merge_all_of<'a>(
    schema: &'a Schema,
    parts: &'a [Schema],
    imports: &mut Vec<String>,
    definitions: &'a IndexMap<String, Schema>,
) -> TypeExpr {
    let mut properties: IndexMap<&'a str, &'a Schema> = IndexMap::new();
    let mut required: Vec<&'a str> = Vec::new();

    for part in parts {
        let source = match part.definition_name() {
            Some(name) => match definitions.get(name) {
                Some(definition) => definition,
                None => {
                    log::warn!("allOf references unknown definition {name}, skipping it");
                    continue;
                }
            },
            None => part,
        };
        merge_properties(source, &mut properties, &mut required);
    }
    merge_properties(schema, &mut properties, &mut required);

    exact_object(&properties, &required, imports, definitions)
}

fn merge_properties<'a>(
    source: &'a Schema,
    properties: &mut IndexMap<&'a str, &'a Schema>,
    required: &mut Vec<&'a str>,
) {
    for (name, property) in &source.properties {
        properties.insert(name.as_str(), property);
    }
    required.extend(source.required.iter().map(String::as_str));
}

fn exact_object(
    properties: &IndexMap<&str, &Schema>,
    required: &[&str],
    imports: &mut Vec<String>,
    definitions: &IndexMap<String, Schema>,
) -> TypeExpr {
    let fields = properties
        .iter()
        .map(|(name, property)| ObjectProperty {
            name: name.to_string(),
            value: translate(property, imports, definitions),
            optional: !required.contains(name),
        })
        .collect();
    TypeExpr::ExactObject(fields)
}
