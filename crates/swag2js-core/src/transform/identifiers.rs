use heck::ToPascalCase;

/// JavaScript keywords and reserved words that can't be used as function or
/// parameter names.
pub const RESERVED_WORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "export",
    "extends",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
    "enum",
    "implements",
    "interface",
    "let",
    "package",
    "private",
    "protected",
    "public",
    "static",
    "await",
    "abstract",
    "boolean",
    "byte",
    "char",
    "double",
    "final",
    "float",
    "goto",
    "int",
    "long",
    "native",
    "short",
    "synchronized",
    "throws",
    "transient",
    "volatile",
    "null",
    "true",
    "false",
];

/// Names every generated function already binds; path parameters must not
/// shadow them.
pub const GENERATED_NAMES: &[&str] = &["query", "data", "makeQuery", "makeFormData", "AjaxPipe"];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Replace every space and period in an `operationId` with an underscore.
pub fn sanitize_operation_id(raw: &str) -> String {
    raw.replace([' ', '.'], "_")
}

/// The function name for an operation identifier: reserved words get a
/// trailing underscore.
pub fn function_name(operation_id: &str) -> String {
    if is_reserved(operation_id) {
        format!("{operation_id}_")
    } else {
        operation_id.to_string()
    }
}

/// Whether `name` can be written as a bare JavaScript identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Turn an arbitrary parameter name into an identifier usable as a function
/// parameter.
pub fn js_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if is_reserved(&ident) || GENERATED_NAMES.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

/// Derive an operation name from HTTP method + path, for operations that
/// declare no `operationId`.
///
/// - `GET /users` → `listUsers`
/// - `GET /users/{userId}` → `getUser`
/// - `POST /users/{userId}/messages` → `createUsersMessages`
pub fn route_to_name(method: &str, path: &str) -> String {
    let mut resource_parts: Vec<&str> = Vec::new();
    let mut ends_with_param = false;

    for seg in path.split('/').filter(|s| !s.is_empty()) {
        if seg.starts_with('{') && seg.ends_with('}') {
            ends_with_param = true;
        } else {
            resource_parts.push(seg);
            ends_with_param = false;
        }
    }

    let prefix = match method.to_uppercase().as_str() {
        "GET" if ends_with_param => "get",
        "GET" => "list",
        "POST" => "create",
        "PUT" => "update",
        "DELETE" => "delete",
        "PATCH" => "patch",
        "OPTIONS" => "options",
        _ => "call",
    };

    let last = resource_parts.len().saturating_sub(1);
    let resource: String = resource_parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            if i == last && ends_with_param {
                singularize(part).to_pascal_case()
            } else {
                part.to_pascal_case()
            }
        })
        .collect();

    format!("{prefix}{resource}")
}

/// Naive singularization: strips a trailing plural suffix.
fn singularize(word: &str) -> String {
    if word.ends_with("ies") && word.len() > 3 {
        format!("{}y", &word[..word.len() - 3])
    } else if word.ends_with("ses") || word.ends_with("xes") || word.ends_with("zes") {
        word[..word.len() - 2].to_string()
    } else if word.ends_with('s') && !word.ends_with("ss") && word.len() > 1 {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}
