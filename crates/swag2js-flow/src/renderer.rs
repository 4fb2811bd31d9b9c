use swag2js_core::ast::{
    Expr, FunctionDecl, ImportDecl, ImportKind, ImportSpecifier, TemplatePart, TypeAlias, TypeExpr,
};
use swag2js_core::transform::identifiers::is_valid_identifier;

const INDENT: &str = "  ";

/// Render a type expression as Flow source. Exact objects are laid out one
/// property per line.
pub fn render_type(ty: &TypeExpr) -> String {
    render_type_at(ty, 0)
}

fn render_type_at(ty: &TypeExpr, depth: usize) -> String {
    match ty {
        TypeExpr::Any => "any".to_string(),
        TypeExpr::String => "string".to_string(),
        TypeExpr::Number => "number".to_string(),
        TypeExpr::Boolean => "boolean".to_string(),
        TypeExpr::StringLiteral(value) => quote(value),
        TypeExpr::Union(members) => members
            .iter()
            .map(|m| render_type_at(m, depth))
            .collect::<Vec<_>>()
            .join(" | "),
        TypeExpr::Array(element) => format!("Array<{}>", render_type_at(element, depth)),
        TypeExpr::Generic { name, args } => {
            let args: Vec<String> = args.iter().map(|a| render_type_at(a, depth)).collect();
            format!("{name}<{}>", args.join(", "))
        }
        TypeExpr::OpenObject => "Object".to_string(),
        TypeExpr::ExactObject(props) if props.is_empty() => "{||}".to_string(),
        TypeExpr::ExactObject(props) => {
            let inner = INDENT.repeat(depth + 1);
            let mut out = String::from("{|\n");
            for prop in props {
                let marker = if prop.optional { "?" } else { "" };
                out.push_str(&format!(
                    "{inner}{}{marker}: {},\n",
                    property_key(&prop.name),
                    render_type_at(&prop.value, depth + 1)
                ));
            }
            out.push_str(&INDENT.repeat(depth));
            out.push_str("|}");
            out
        }
        TypeExpr::Named(name) => name.clone(),
    }
}

/// Render an expression. `depth` is the indentation level of the line the
/// expression starts on.
pub fn render_expr(expr: &Expr, depth: usize) -> String {
    match expr {
        Expr::Ident(name) => name.clone(),
        Expr::Str(value) => quote(value),
        Expr::Template(parts) => {
            let mut out = String::from("`");
            for part in parts {
                match part {
                    TemplatePart::Literal(text) => out.push_str(&escape_template(text)),
                    TemplatePart::Placeholder(name) => {
                        out.push_str("${");
                        out.push_str(name);
                        out.push('}');
                    }
                }
            }
            out.push('`');
            out
        }
        Expr::Concat(left, right) => {
            format!("{} + {}", render_expr(left, depth), render_expr(right, depth))
        }
        Expr::Call { callee, args } => format!("{callee}({})", render_args(args, depth)),
        Expr::New { callee, args } => format!("new {callee}({})", render_args(args, depth)),
        Expr::Object(fields) if fields.is_empty() => "{}".to_string(),
        Expr::Object(fields) => {
            let inner = INDENT.repeat(depth + 1);
            let mut out = String::from("{\n");
            for (key, value) in fields {
                out.push_str(&inner);
                match value {
                    Expr::Ident(name) if name == key => out.push_str(key),
                    _ => {
                        out.push_str(&property_key(key));
                        out.push_str(": ");
                        out.push_str(&render_expr(value, depth + 1));
                    }
                }
                out.push_str(",\n");
            }
            out.push_str(&INDENT.repeat(depth));
            out.push('}');
            out
        }
    }
}

fn render_args(args: &[Expr], depth: usize) -> String {
    args.iter()
        .map(|a| render_expr(a, depth))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_import(import: &ImportDecl) -> String {
    let mut defaults = Vec::new();
    let mut named = Vec::new();
    for specifier in &import.specifiers {
        match specifier {
            ImportSpecifier::Default(name) => defaults.push(name.clone()),
            ImportSpecifier::Named(name) => named.push(name.clone()),
            ImportSpecifier::Aliased { imported, local } => {
                named.push(format!("{imported} as {local}"))
            }
        }
    }

    let mut clause = defaults.join(", ");
    if !named.is_empty() {
        if !clause.is_empty() {
            clause.push_str(", ");
        }
        clause.push_str(&format!("{{ {} }}", named.join(", ")));
    }

    let keyword = match import.kind {
        ImportKind::Value => "import",
        ImportKind::Type => "import type",
    };
    format!("{keyword} {clause} from {};", quote(&import.source))
}

pub fn render_alias(alias: &TypeAlias) -> String {
    let export = if alias.exported { "export " } else { "" };
    format!("{export}type {} = {};", alias.name, render_type(&alias.value))
}

/// `function name(params): Return {` with a single `return` statement.
pub fn render_function(function: &FunctionDecl) -> String {
    let params: Vec<String> = function
        .params
        .iter()
        .map(|p| format!("{}: {}", p.name, render_type(&p.annotation)))
        .collect();
    format!(
        "function {}({}): {} {{\n{INDENT}return {};\n}}",
        function.name,
        params.join(", "),
        render_type(&function.return_type),
        render_expr(&function.body, 1)
    )
}

fn property_key(name: &str) -> String {
    if is_valid_identifier(name) {
        name.to_string()
    } else {
        quote(name)
    }
}

/// Single-quoted string literal.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

fn escape_template(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
