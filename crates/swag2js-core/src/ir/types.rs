use crate::ast::{Program, TypeExpr};
use crate::diagnostics::Warning;
use crate::ir::HttpMethod;

/// Everything one conversion run produces, ready to be rendered.
#[derive(Debug, Clone)]
pub struct ClientSpec {
    pub info: ClientInfo,
    /// `scheme://host` prefix for every URL, if the document declares one.
    pub hostname: Option<String>,
    pub definitions: Vec<TypeDefinition>,
    pub operations: Vec<OperationFunction>,
    pub warnings: Vec<Warning>,
}

/// API metadata.
#[derive(Debug, Clone)]
pub struct ClientInfo {
    pub title: String,
    pub description: Option<String>,
    pub version: String,
}

/// A named type declaration for one entry of `definitions`.
#[derive(Debug, Clone)]
pub struct TypeDefinition {
    pub name: String,
    pub type_expr: TypeExpr,
    /// Other definitions this one refers to, deduplicated, never itself.
    pub imports: Vec<String>,
}

/// The synthesized request function for one operation.
#[derive(Debug, Clone)]
pub struct OperationFunction {
    /// The operation identifier; names the artifact and its export.
    pub name: String,
    /// The declared function name (reserved words get a trailing `_`).
    pub function_name: String,
    pub method: HttpMethod,
    pub path: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub program: Program,
    /// Definitions referenced by the signature or response, deduplicated.
    pub type_imports: Vec<String>,
}
