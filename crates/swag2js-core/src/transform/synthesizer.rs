use indexmap::IndexMap;

use crate::ast::{
    Expr, FunctionDecl, ImportDecl, Param, Program, TemplatePart, TypeAlias, TypeExpr,
};
use crate::diagnostics::{Diagnostics, Warning};
use crate::error::TransformError;
use crate::ir::{OperationFunction, OperationRecord, ParameterLocation, ParameterSpec};
use crate::parse::schema::Schema;
use crate::parse::spec::SwaggerSpec;

use super::definitions::dedup_imports;
use super::identifiers::{function_name, js_identifier};
use super::type_translator::translate;
use super::url_template::{Segment, placeholders, split_url};

pub const AJAX_PIPE: &str = "AjaxPipe";
pub const AJAX_OBJECT: &str = "AjaxObject";
pub const MAKE_QUERY: &str = "makeQuery";
pub const MAKE_FORM_DATA: &str = "makeFormData";

const HELPERS_DIR: &str = "../helpers";
const TYPES_DIR: &str = "../types";
const RESPONSE_ALIAS: &str = "Response";

/// Names every generated module binds before any definition is imported.
const RUNTIME_BINDINGS: &[&str] = &[AJAX_OBJECT, MAKE_QUERY, MAKE_FORM_DATA, AJAX_PIPE];

/// The `scheme://host` prefix for every URL.
///
/// An explicit `base_url` wins. Otherwise both `host` and at least one scheme
/// must be declared; with several schemes the first is used and a warning is
/// raised.
pub fn resolve_hostname(
    spec: &SwaggerSpec,
    base_url: Option<&str>,
    diagnostics: &mut Diagnostics,
) -> Option<String> {
    if let Some(url) = base_url {
        return Some(url.trim_end_matches('/').to_string());
    }

    let host = spec.host.as_deref()?;
    let scheme = spec.schemes.first()?;
    if spec.schemes.len() > 1 {
        diagnostics.warn(Warning::MultipleSchemes {
            used: scheme.clone(),
            declared: spec.schemes.clone(),
        });
    }
    Some(format!("{scheme}://{host}"))
}

/// Build the request function for one operation.
pub fn synthesize(
    record: &OperationRecord,
    document: &SwaggerSpec,
    hostname: Option<&str>,
) -> Result<OperationFunction, TransformError> {
    let definitions = &document.definitions;
    let mut type_imports: Vec<String> = Vec::new();

    let segments = split_url(&record.path);
    let path_params: Vec<&ParameterSpec> = record
        .parameters_in(ParameterLocation::Path)
        .filter(|p| p.required)
        .collect();
    check_placeholders(record, &segments, &path_params)?;

    let query_params: Vec<&ParameterSpec> =
        record.parameters_in(ParameterLocation::Query).collect();
    let form_params: Vec<&ParameterSpec> =
        record.parameters_in(ParameterLocation::FormData).collect();
    let body_param = record.parameters_in(ParameterLocation::Body).next();

    let bindings = path_bindings(&path_params);
    let mut params: Vec<Param> = path_params
        .iter()
        .zip(&bindings)
        .map(|(p, (_, ident))| Param {
            name: ident.clone(),
            annotation: translate_param(p, &mut type_imports, definitions),
        })
        .collect();

    if !query_params.is_empty() {
        params.push(Param {
            name: "query".to_string(),
            annotation: translate(&object_schema(&query_params), &mut type_imports, definitions),
        });
    }

    let has_form_data = !form_params.is_empty();
    let payload = if has_form_data {
        Some(translate(&object_schema(&form_params), &mut type_imports, definitions))
    } else {
        body_param.map(|p| translate_param(p, &mut type_imports, definitions))
    };
    let has_payload = payload.is_some();
    if let Some(annotation) = payload {
        params.push(Param {
            name: "data".to_string(),
            annotation,
        });
    }

    let mut response = match record.response_schema {
        Some(ref schema) => translate(schema, &mut type_imports, definitions),
        None => TypeExpr::Any,
    };

    let type_imports = dedup_imports(type_imports, None);
    let locals = local_type_names(&type_imports);
    let renames: Vec<(String, String)> = type_imports
        .iter()
        .zip(&locals)
        .filter(|(imported, local)| imported != local)
        .map(|(imported, local)| (imported.clone(), local.clone()))
        .collect();
    if !renames.is_empty() {
        for param in &mut params {
            param.annotation.rename_named(&renames);
        }
        response.rename_named(&renames);
    }
    let alias = response_alias(&locals);

    let url = url_expr(&segments, &bindings, !query_params.is_empty(), hostname);
    let mut fields = vec![
        ("method".to_string(), Expr::Str(record.method.as_str().to_string())),
        ("url".to_string(), url),
    ];
    if has_payload {
        let data = if has_form_data {
            Expr::call(MAKE_FORM_DATA, vec![Expr::ident("data")])
        } else {
            Expr::ident("data")
        };
        fields.push(("data".to_string(), data));
    }

    let name = function_name(&record.operation_id);
    let function = FunctionDecl {
        name: name.clone(),
        params,
        body: Expr::New {
            callee: AJAX_PIPE.to_string(),
            args: vec![Expr::Object(fields)],
        },
        return_type: TypeExpr::Generic {
            name: AJAX_PIPE.to_string(),
            args: vec![TypeExpr::named(AJAX_OBJECT), TypeExpr::named(&alias)],
        },
    };

    let mut imports = vec![ImportDecl::named_type(
        AJAX_OBJECT,
        &format!("{TYPES_DIR}/{AJAX_OBJECT}"),
    )];
    if !query_params.is_empty() {
        imports.push(helper_import(MAKE_QUERY));
    }
    if has_form_data {
        imports.push(helper_import(MAKE_FORM_DATA));
    }
    imports.push(helper_import(AJAX_PIPE));
    imports.extend(type_imports.iter().zip(&locals).map(|(t, local)| {
        let source = format!("{TYPES_DIR}/{t}");
        if t == local {
            ImportDecl::named_type(t, &source)
        } else {
            ImportDecl::named_type_as(t, local, &source)
        }
    }));

    log::debug!("synthesized {name} for {} {}", record.method.as_str(), record.path);

    Ok(OperationFunction {
        name: record.operation_id.clone(),
        function_name: name,
        method: record.method,
        path: record.path.clone(),
        summary: record.summary.clone(),
        description: record.description.clone(),
        program: Program {
            imports,
            aliases: vec![TypeAlias {
                name: alias,
                value: response,
                exported: false,
            }],
            default_export: function,
        },
        type_imports,
    })
}

fn check_placeholders(
    record: &OperationRecord,
    segments: &[Segment<'_>],
    path_params: &[&ParameterSpec],
) -> Result<(), TransformError> {
    let mut used: Vec<String> = placeholders(segments)
        .into_iter()
        .map(str::to_string)
        .collect();
    let mut provided: Vec<String> = path_params.iter().map(|p| p.name.clone()).collect();
    used.sort();
    provided.sort();

    if used != provided {
        return Err(TransformError::TemplateParameterMismatch {
            operation: record.operation_id.clone(),
            url: record.path.clone(),
            used,
            provided,
        });
    }
    Ok(())
}

fn translate_param(
    param: &ParameterSpec,
    imports: &mut Vec<String>,
    definitions: &IndexMap<String, Schema>,
) -> TypeExpr {
    match param.schema {
        Some(ref schema) => translate(schema, imports, definitions),
        None => TypeExpr::Any,
    }
}

/// An object schema with one property per parameter, required where the
/// parameter is.
fn object_schema(params: &[&ParameterSpec]) -> Schema {
    let mut schema = Schema::of_type("object");
    for param in params {
        schema
            .properties
            .insert(param.name.clone(), param.schema.clone().unwrap_or_default());
        if param.required {
            schema.required.push(param.name.clone());
        }
    }
    schema
}

/// Pair each path parameter with the identifier it is bound to. Names that
/// sanitize to the same identifier get `_` appended until they differ.
fn path_bindings(path_params: &[&ParameterSpec]) -> Vec<(String, String)> {
    let mut bindings: Vec<(String, String)> = Vec::with_capacity(path_params.len());
    for param in path_params {
        let mut ident = js_identifier(&param.name);
        while bindings.iter().any(|(_, taken)| *taken == ident) {
            ident.push('_');
        }
        bindings.push((param.name.clone(), ident));
    }
    bindings
}

fn url_expr(
    segments: &[Segment<'_>],
    bindings: &[(String, String)],
    has_query: bool,
    hostname: Option<&str>,
) -> Expr {
    let parts = segments
        .iter()
        .map(|segment| match *segment {
            Segment::Literal(text) => TemplatePart::Literal(text.to_string()),
            Segment::Placeholder(name) => {
                let ident = bindings
                    .iter()
                    .find(|(param, _)| param == name)
                    .map(|(_, ident)| ident.clone())
                    .unwrap_or_else(|| js_identifier(name));
                TemplatePart::Placeholder(ident)
            }
        })
        .collect();

    let mut url = Expr::Template(parts);
    if has_query {
        url = Expr::concat(url, Expr::call(MAKE_QUERY, vec![Expr::ident("query")]));
    }
    if let Some(host) = hostname {
        url = Expr::concat(Expr::Str(host.to_string()), url);
    }
    url
}

fn helper_import(name: &str) -> ImportDecl {
    ImportDecl::default_value(name, &format!("{HELPERS_DIR}/{name}"))
}

/// The local name each imported definition is bound to. A definition sharing
/// its name with a runtime binding is imported under that name plus `_`,
/// extended until it clashes with nothing else in the module.
fn local_type_names(type_imports: &[String]) -> Vec<String> {
    let mut locals: Vec<String> = Vec::with_capacity(type_imports.len());
    for name in type_imports {
        let mut local = name.clone();
        if RUNTIME_BINDINGS.contains(&name.as_str()) {
            local.push('_');
            while RUNTIME_BINDINGS.contains(&local.as_str())
                || type_imports.contains(&local)
                || locals.contains(&local)
            {
                local.push('_');
            }
        }
        locals.push(local);
    }
    locals
}

/// `Response`, suffixed with `_` until it no longer clashes with a local
/// type name or a runtime binding.
fn response_alias(local_types: &[String]) -> String {
    let mut alias = RESPONSE_ALIAS.to_string();
    while RUNTIME_BINDINGS.contains(&alias.as_str()) || local_types.iter().any(|t| *t == alias) {
        alias.push('_');
    }
    alias
}
