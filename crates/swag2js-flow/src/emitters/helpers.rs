use swag2js_core::GeneratedFile;

/// The fixed runtime every generated module imports from, as
/// `(path, content)` pairs.
const RUNTIME: &[(&str, &str)] = &[
    (
        "helpers/AjaxPipe.js",
        include_str!("../../templates/helpers/AjaxPipe.js"),
    ),
    (
        "helpers/makeQuery.js",
        include_str!("../../templates/helpers/makeQuery.js"),
    ),
    (
        "helpers/makeFormData.js",
        include_str!("../../templates/helpers/makeFormData.js"),
    ),
    (
        "types/AjaxObject.js",
        include_str!("../../templates/helpers/AjaxObject.js"),
    ),
];

/// Emit the request pipeline, query and form-data helpers and the
/// `AjaxObject` type, verbatim.
pub fn emit_helpers() -> Vec<GeneratedFile> {
    RUNTIME
        .iter()
        .map(|(path, content)| GeneratedFile {
            path: path.to_string(),
            content: content.to_string(),
        })
        .collect()
}
