use crate::parse::schema::Schema;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

/// Where a parameter is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    FormData,
    Body,
}

/// A parameter after `$ref` resolution, with its value schema attached.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    /// `None` when the parameter declares neither `schema` nor `type`.
    pub schema: Option<Schema>,
    pub description: Option<String>,
}

/// One normalized operation: a method bound to a path, with the path-level
/// parameters already merged in.
#[derive(Debug, Clone)]
pub struct OperationRecord {
    pub method: HttpMethod,
    /// Full URL path including the base path, with `{name}` placeholders.
    pub path: String,
    /// Sanitized, document-unique identifier.
    pub operation_id: String,
    pub parameters: Vec<ParameterSpec>,
    /// Schema of the `200` (or `default`) response.
    pub response_schema: Option<Schema>,
    pub summary: Option<String>,
    pub description: Option<String>,
}

impl OperationRecord {
    /// Parameters declared at `location`, in declaration order.
    pub fn parameters_in(
        &self,
        location: ParameterLocation,
    ) -> impl Iterator<Item = &ParameterSpec> + '_ {
        self.parameters
            .iter()
            .filter(move |p| p.location == location)
    }
}
