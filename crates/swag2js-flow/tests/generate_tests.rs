use swag2js_core::ir::ClientSpec;
use swag2js_core::{CodeGenerator, GeneratedFile, parse, transform};
use swag2js_flow::{FlowClientGenerator, FlowConfig, PackageOptions};

const STORE: &str = include_str!("fixtures/store.yaml");
const PETSTORE: &str = include_str!("../../swag2js-core/tests/fixtures/petstore.yaml");

fn client(yaml: &str) -> ClientSpec {
    let spec = parse::from_yaml(yaml).unwrap();
    transform::transform(&spec).unwrap()
}

fn generate(yaml: &str, config: &FlowConfig) -> Vec<GeneratedFile> {
    FlowClientGenerator
        .generate(&client(yaml), config)
        .expect("generation should succeed")
}

fn file<'a>(files: &'a [GeneratedFile], path: &str) -> &'a str {
    files
        .iter()
        .find(|f| f.path == path)
        .map(|f| f.content.as_str())
        .unwrap_or_else(|| panic!("missing {path}"))
}

#[test]
fn emits_expected_file_set() {
    let files = generate(STORE, &FlowConfig::default());
    let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "helpers/AjaxPipe.js",
            "helpers/makeQuery.js",
            "helpers/makeFormData.js",
            "types/AjaxObject.js",
            "types/Pet.js",
            "types/Owner.js",
            "src/listPets.js",
            "src/delete.js",
            "src/uploadPhoto.js",
            "index.js",
        ]
    );
}

#[test]
fn type_file_imports_siblings() {
    let files = generate(STORE, &FlowConfig::default());
    assert_eq!(
        file(&files, "types/Pet.js"),
        "// @flow

import type { Owner } from './Owner';

export type Pet = {|
  id: number,
  name: string,
  owner?: Owner,
  kind?: 'cat' | 'dog',
|};
"
    );
    assert!(file(&files, "types/Owner.js").contains("pets?: Array<Pet>,"));
}

#[test]
fn operation_with_query() {
    let files = generate(STORE, &FlowConfig::default());
    assert_eq!(
        file(&files, "src/listPets.js"),
        "// @flow

import type { AjaxObject } from '../types/AjaxObject';
import makeQuery from '../helpers/makeQuery';
import AjaxPipe from '../helpers/AjaxPipe';
import type { Pet } from '../types/Pet';

type Response = Array<Pet>;

/**
 * List pets
 */
export default function listPets(query: {|
  limit: number,
  offset?: number,
|}): AjaxPipe<AjaxObject, Response> {
  return new AjaxPipe({
    method: 'GET',
    url: 'https://store.test' + `/v1/pets` + makeQuery(query),
  });
}
"
    );
}

#[test]
fn reserved_operation_name() {
    let files = generate(STORE, &FlowConfig::default());
    assert_eq!(
        file(&files, "src/delete.js"),
        "// @flow

import type { AjaxObject } from '../types/AjaxObject';
import AjaxPipe from '../helpers/AjaxPipe';

type Response = any;

/**
 * Remove a pet.
 * Cannot be undone.
 */
export default function delete_(petId: number): AjaxPipe<AjaxObject, Response> {
  return new AjaxPipe({
    method: 'DELETE',
    url: 'https://store.test' + `/v1/pets/${petId}`,
  });
}
"
    );
}

#[test]
fn operation_with_form_data() {
    let files = generate(STORE, &FlowConfig::default());
    let content = file(&files, "src/uploadPhoto.js");
    assert!(content.contains("import makeFormData from '../helpers/makeFormData';"));
    assert!(!content.contains("makeQuery"));
    assert!(content.contains("function uploadPhoto(petId: number, data: {|\n  file: any,\n  caption?: string,\n|})"));
    assert!(content.contains("    data: makeFormData(data),\n"));
}

#[test]
fn index_reexports_everything() {
    let files = generate(STORE, &FlowConfig::default());
    assert_eq!(
        file(&files, "index.js"),
        "// @flow

export { default as listPets } from './src/listPets';
export { default as delete } from './src/delete';
export { default as uploadPhoto } from './src/uploadPhoto';

export type { Pet } from './types/Pet';
export type { Owner } from './types/Owner';
"
    );
}

#[test]
fn helpers_are_emitted_verbatim() {
    let files = generate(STORE, &FlowConfig::default());
    assert!(file(&files, "helpers/AjaxPipe.js").contains("pipeThrough"));
    assert!(file(&files, "helpers/makeQuery.js").contains("encodeURIComponent"));
    assert!(file(&files, "helpers/makeFormData.js").contains("`${key}[]`"));
    assert!(file(&files, "types/AjaxObject.js").contains("export type AjaxObject"));
}

#[test]
fn package_manifest_defaults_from_info() {
    let config = FlowConfig {
        package: Some(PackageOptions::default()),
    };
    let files = generate(STORE, &config);
    let manifest: serde_json::Value =
        serde_json::from_str(file(&files, "package.json")).unwrap();
    assert_eq!(manifest["name"], "pet-store");
    assert_eq!(manifest["version"], "2.0.0");
    assert_eq!(manifest["description"], "Pets and their owners.");
    assert_eq!(manifest["main"], "index.js");
}

#[test]
fn package_manifest_overrides() {
    let config = FlowConfig {
        package: Some(PackageOptions {
            name: Some("@acme/store-client".to_string()),
            version: Some("9.9.9".to_string()),
            description: None,
        }),
    };
    let files = generate(STORE, &config);
    let manifest: serde_json::Value =
        serde_json::from_str(file(&files, "package.json")).unwrap();
    assert_eq!(manifest["name"], "@acme/store-client");
    assert_eq!(manifest["version"], "9.9.9");
}

#[test]
fn petstore_quotes_invalid_keys() {
    let files = generate(PETSTORE, &FlowConfig::default());
    let user = file(&files, "types/User.js");
    assert!(user.contains("'x-rating'?: number,"), "{user}");
    assert!(!user.contains("import type { User }"));
    assert!(file(&files, "src/store_get_order.js").contains("function store_get_order(orderId: string)"));
}

#[test]
fn definition_sharing_a_helper_name_is_imported_under_an_alias() {
    let files = generate(
        r##"
swagger: "2.0"
info: { title: Pipes, version: "1.0.0" }
paths:
  x-generated-by: tool
  /pipes:
    get:
      operationId: listPipes
      summary: List pipes.
      responses:
        "200":
          description: ok
          schema: { $ref: "#/definitions/AjaxPipe" }
definitions:
  AjaxPipe:
    type: object
    properties:
      id: { type: integer }
"##,
        &FlowConfig::default(),
    );
    assert_eq!(
        file(&files, "src/listPipes.js"),
        "// @flow

import type { AjaxObject } from '../types/AjaxObject';
import AjaxPipe from '../helpers/AjaxPipe';
import type { AjaxPipe as AjaxPipe_ } from '../types/AjaxPipe';

type Response = AjaxPipe_;

/**
 * List pipes.
 */
export default function listPipes(): AjaxPipe<AjaxObject, Response> {
  return new AjaxPipe({
    method: 'GET',
    url: `/pipes`,
  });
}
"
    );
}
