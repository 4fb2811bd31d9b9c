use indexmap::IndexMap;

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{ResolveError, TransformError};
use crate::ir::{HttpMethod, OperationRecord, ParameterLocation, ParameterSpec};
use crate::parse::operation::{Operation, PathItem};
use crate::parse::parameter::{self, Parameter, ParameterOrRef};
use crate::parse::spec::SwaggerSpec;

use super::identifiers::{route_to_name, sanitize_operation_id};

const PARAMETERS_PREFIX: &str = "#/parameters/";

/// Flatten the document's paths into one record per operation.
///
/// Fails with [`TransformError::DuplicateOperationIdentifier`] before
/// returning anything if two operations sanitize to the same identifier.
/// Operations without a summary or description only raise a warning.
pub fn normalize(
    spec: &SwaggerSpec,
    base_path: Option<&str>,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<OperationRecord>, TransformError> {
    let base_path = base_path
        .or(spec.base_path.as_deref())
        .unwrap_or("")
        .trim_end_matches('/');

    let mut records = Vec::new();
    for (url_path, entry) in &spec.paths {
        if url_path == "parameters" || url_path == "$ref" || url_path.starts_with("x-") {
            log::debug!("skipping paths entry {url_path}");
            continue;
        }
        let Some(item) = entry.item() else {
            log::debug!("skipping paths entry {url_path}: not a path item");
            continue;
        };
        let shared = resolve_parameters(&item.parameters, spec)?;
        collect_operations(spec, base_path, url_path, item, &shared, &mut records)?;
    }

    check_duplicates(&records)?;

    for record in &records {
        if record.summary.is_none() && record.description.is_none() {
            diagnostics.warn(Warning::DocumentationIncomplete {
                operation: record.operation_id.clone(),
            });
        }
    }

    log::debug!("normalized {} operations", records.len());
    Ok(records)
}

fn collect_operations(
    spec: &SwaggerSpec,
    base_path: &str,
    url_path: &str,
    item: &PathItem,
    shared: &[ParameterSpec],
    out: &mut Vec<OperationRecord>,
) -> Result<(), TransformError> {
    macro_rules! add_op {
        ($method:expr, $op:expr) => {
            if let Some(ref op) = $op {
                let record = build_record(spec, $method, base_path, url_path, op, shared)?;
                out.push(record);
            }
        };
    }

    add_op!(HttpMethod::Get, item.get);
    add_op!(HttpMethod::Put, item.put);
    add_op!(HttpMethod::Post, item.post);
    add_op!(HttpMethod::Delete, item.delete);
    add_op!(HttpMethod::Options, item.options);
    add_op!(HttpMethod::Patch, item.patch);

    Ok(())
}

fn build_record(
    spec: &SwaggerSpec,
    method: HttpMethod,
    base_path: &str,
    url_path: &str,
    op: &Operation,
    shared: &[ParameterSpec],
) -> Result<OperationRecord, TransformError> {
    let raw_id = match op.operation_id {
        Some(ref id) => id.clone(),
        None => {
            let derived = route_to_name(method.as_str(), url_path);
            log::debug!(
                "{} {url_path} has no operationId, using {derived}",
                method.as_str()
            );
            derived
        }
    };

    let own = resolve_parameters(&op.parameters, spec)?;

    Ok(OperationRecord {
        method,
        path: format!("{base_path}{url_path}"),
        operation_id: sanitize_operation_id(&raw_id),
        parameters: merge_parameters(own, shared),
        response_schema: op.success_schema().cloned(),
        summary: op.summary.clone(),
        description: op.description.clone(),
    })
}

/// Append path-level parameters after the operation's own; a path-level
/// parameter with the same name and location as an operation parameter is
/// dropped.
fn merge_parameters(own: Vec<ParameterSpec>, shared: &[ParameterSpec]) -> Vec<ParameterSpec> {
    let mut merged = own;
    for param in shared {
        let overridden = merged
            .iter()
            .any(|p| p.name == param.name && p.location == param.location);
        if !overridden {
            merged.push(param.clone());
        }
    }
    merged
}

fn resolve_parameters(
    params: &[ParameterOrRef],
    spec: &SwaggerSpec,
) -> Result<Vec<ParameterSpec>, TransformError> {
    let mut resolved = Vec::with_capacity(params.len());
    for p in params {
        let param = match p {
            ParameterOrRef::Parameter(param) => param,
            ParameterOrRef::Ref { ref_path } => lookup_parameter(ref_path, spec)?,
        };
        if let Some(resolved_param) = to_parameter_spec(param) {
            resolved.push(resolved_param);
        }
    }
    Ok(resolved)
}

fn lookup_parameter<'a>(ref_path: &str, spec: &'a SwaggerSpec) -> Result<&'a Parameter, ResolveError> {
    let name = ref_path
        .strip_prefix(PARAMETERS_PREFIX)
        .ok_or_else(|| ResolveError::InvalidRefFormat(ref_path.to_string()))?;
    spec.parameters
        .get(name)
        .ok_or_else(|| ResolveError::UnresolvedParameter(ref_path.to_string()))
}

fn to_parameter_spec(param: &Parameter) -> Option<ParameterSpec> {
    let location = match param.location {
        parameter::ParameterLocation::Path => ParameterLocation::Path,
        parameter::ParameterLocation::Query => ParameterLocation::Query,
        parameter::ParameterLocation::FormData => ParameterLocation::FormData,
        parameter::ParameterLocation::Body => ParameterLocation::Body,
        parameter::ParameterLocation::Header => {
            log::debug!("ignoring header parameter {}", param.name);
            return None;
        }
    };
    Some(ParameterSpec {
        name: param.name.clone(),
        location,
        required: param.required,
        schema: param.value_schema(),
        description: param.description.clone(),
    })
}

fn check_duplicates(records: &[OperationRecord]) -> Result<(), TransformError> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for record in records {
        *counts.entry(record.operation_id.as_str()).or_default() += 1;
    }

    let identifiers: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id.to_string())
        .collect();

    if identifiers.is_empty() {
        Ok(())
    } else {
        Err(TransformError::DuplicateOperationIdentifier { identifiers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn records(yaml: &str) -> Result<(Vec<OperationRecord>, Vec<Warning>), TransformError> {
        let spec = parse::from_yaml(yaml).unwrap();
        let mut diagnostics = Diagnostics::new();
        let records = normalize(&spec, None, &mut diagnostics)?;
        Ok((records, diagnostics.into_warnings()))
    }

    #[test]
    fn test_flattens_paths_and_methods() {
        let (ops, _) = records(
            r#"
swagger: "2.0"
basePath: /api/
paths:
  /pets:
    get: {operationId: listPets, summary: list}
    post: {operationId: createPet, summary: create}
  /pets/{id}:
    delete: {operationId: deletePet, summary: delete}
"#,
        )
        .unwrap();
        let ids: Vec<_> = ops.iter().map(|o| o.operation_id.as_str()).collect();
        assert_eq!(ids, vec!["listPets", "createPet", "deletePet"]);
        assert_eq!(ops[0].path, "/api/pets");
        assert_eq!(ops[2].path, "/api/pets/{id}");
        assert_eq!(ops[1].method, HttpMethod::Post);
    }

    #[test]
    fn test_skips_non_path_entries() {
        let (ops, _) = records(
            r#"
swagger: "2.0"
paths:
  x-generated-by: tool
  parameters:
    - { name: limit, in: query, type: integer }
  /pets:
    get: {operationId: listPets, summary: list}
"#,
        )
        .unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].operation_id, "listPets");
        assert_eq!(ops[0].path, "/pets");
    }

    #[test]
    fn test_base_path_override() {
        let spec = parse::from_yaml(
            "swagger: '2.0'\nbasePath: /v1\npaths:\n  /a:\n    get: {operationId: a, summary: s}\n",
        )
        .unwrap();
        let mut diagnostics = Diagnostics::new();
        let ops = normalize(&spec, Some("/v2/"), &mut diagnostics).unwrap();
        assert_eq!(ops[0].path, "/v2/a");
    }

    #[test]
    fn test_sanitizes_operation_id() {
        let (ops, _) = records(
            "swagger: '2.0'\npaths:\n  /a:\n    get: {operationId: 'get user.by id', summary: s}\n",
        )
        .unwrap();
        assert_eq!(ops[0].operation_id, "get_user_by_id");
    }

    #[test]
    fn test_duplicate_identifiers_fail() {
        let err = records(
            r#"
swagger: "2.0"
paths:
  /users:
    get: {operationId: get.user, summary: a}
  /accounts/users:
    get: {operationId: get_user, summary: b}
  /other:
    get: {operationId: other, summary: c}
"#,
        )
        .unwrap_err();
        match err {
            TransformError::DuplicateOperationIdentifier { identifiers } => {
                assert_eq!(identifiers, vec!["get_user"]);
            }
            other => panic!("expected duplicate error, got {other}"),
        }
    }

    #[test]
    fn test_method_parameters_take_precedence() {
        let (ops, _) = records(
            r#"
swagger: "2.0"
paths:
  /items/{id}:
    parameters:
      - {name: id, in: path, required: true, type: string}
      - {name: verbose, in: query, type: boolean}
    get:
      operationId: getItem
      summary: s
      parameters:
        - {name: id, in: path, required: true, type: integer}
"#,
        )
        .unwrap();
        let params = &ops[0].parameters;
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "id");
        assert_eq!(
            params[0].schema.as_ref().unwrap().schema_type.as_deref(),
            Some("integer")
        );
        assert_eq!(params[1].name, "verbose");
    }

    #[test]
    fn test_same_name_different_location_is_kept() {
        let (ops, _) = records(
            r#"
swagger: "2.0"
paths:
  /items/{id}:
    parameters:
      - {name: id, in: query, type: string}
    get:
      operationId: getItem
      summary: s
      parameters:
        - {name: id, in: path, required: true, type: integer}
"#,
        )
        .unwrap();
        assert_eq!(ops[0].parameters.len(), 2);
    }

    #[test]
    fn test_resolves_shared_parameter_refs() {
        let (ops, _) = records(
            r##"
swagger: "2.0"
parameters:
  limit: {name: limit, in: query, type: integer}
paths:
  /items:
    get:
      operationId: listItems
      summary: s
      parameters:
        - $ref: "#/parameters/limit"
"##,
        )
        .unwrap();
        assert_eq!(ops[0].parameters[0].name, "limit");
        assert_eq!(ops[0].parameters[0].location, ParameterLocation::Query);
    }

    #[test]
    fn test_unresolved_parameter_ref_fails() {
        let err = records(
            r##"
swagger: "2.0"
paths:
  /items:
    get:
      operationId: listItems
      parameters:
        - $ref: "#/parameters/missing"
"##,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TransformError::Resolve(ResolveError::UnresolvedParameter(_))
        ));
    }

    #[test]
    fn test_header_parameters_are_dropped() {
        let (ops, _) = records(
            r#"
swagger: "2.0"
paths:
  /items:
    get:
      operationId: listItems
      summary: s
      parameters:
        - {name: X-Trace, in: header, type: string}
"#,
        )
        .unwrap();
        assert!(ops[0].parameters.is_empty());
    }

    #[test]
    fn test_missing_documentation_warns() {
        let (_, warnings) = records(
            r#"
swagger: "2.0"
paths:
  /a:
    get: {operationId: a}
    post: {operationId: b, description: documented}
"#,
        )
        .unwrap();
        assert_eq!(
            warnings,
            vec![Warning::DocumentationIncomplete {
                operation: "a".to_string()
            }]
        );
    }

    #[test]
    fn test_missing_operation_id_uses_route() {
        let (ops, _) = records(
            "swagger: '2.0'\npaths:\n  /users/{id}:\n    get: {summary: s}\n",
        )
        .unwrap();
        assert_eq!(ops[0].operation_id, "getUser");
    }

    #[test]
    fn test_response_schema_taken_from_200() {
        let (ops, _) = records(
            r##"
swagger: "2.0"
paths:
  /a:
    get:
      operationId: a
      summary: s
      responses:
        "200":
          description: ok
          schema: {$ref: "#/definitions/A"}
"##,
        )
        .unwrap();
        assert_eq!(
            ops[0].response_schema.as_ref().unwrap().definition_name(),
            Some("A")
        );
    }
}
