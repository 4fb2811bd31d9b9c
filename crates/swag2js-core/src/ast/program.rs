use super::types::TypeExpr;

/// Whether an import brings in values or only types (`import type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Value,
    Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSpecifier {
    Default(String),
    Named(String),
    /// `imported as local`
    Aliased { imported: String, local: String },
}

/// An `import` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    pub kind: ImportKind,
    pub specifiers: Vec<ImportSpecifier>,
    pub source: String,
}

impl ImportDecl {
    /// `import Name from 'source';`
    pub fn default_value(name: &str, source: &str) -> Self {
        Self {
            kind: ImportKind::Value,
            specifiers: vec![ImportSpecifier::Default(name.to_string())],
            source: source.to_string(),
        }
    }

    /// `import type { Name } from 'source';`
    pub fn named_type(name: &str, source: &str) -> Self {
        Self {
            kind: ImportKind::Type,
            specifiers: vec![ImportSpecifier::Named(name.to_string())],
            source: source.to_string(),
        }
    }

    /// `import type { Name as Local } from 'source';`
    pub fn named_type_as(name: &str, local: &str, source: &str) -> Self {
        Self {
            kind: ImportKind::Type,
            specifiers: vec![ImportSpecifier::Aliased {
                imported: name.to_string(),
                local: local.to_string(),
            }],
            source: source.to_string(),
        }
    }

    /// Whether this declaration brings `name` into scope.
    pub fn binds(&self, name: &str) -> bool {
        self.specifiers.iter().any(|s| match s {
            ImportSpecifier::Default(n) | ImportSpecifier::Named(n) => n == name,
            ImportSpecifier::Aliased { local, .. } => local == name,
        })
    }
}

/// One piece of a template literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    Literal(String),
    /// An interpolated identifier.
    Placeholder(String),
}

/// The expression forms used in generated function bodies.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(String),
    Str(String),
    Template(Vec<TemplatePart>),
    /// String concatenation, `left + right`.
    Concat(Box<Expr>, Box<Expr>),
    Call { callee: String, args: Vec<Expr> },
    New { callee: String, args: Vec<Expr> },
    Object(Vec<(String, Expr)>),
}

impl Expr {
    pub fn ident(name: &str) -> Self {
        Expr::Ident(name.to_string())
    }

    pub fn concat(left: Expr, right: Expr) -> Self {
        Expr::Concat(Box::new(left), Box::new(right))
    }

    pub fn call(callee: &str, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: callee.to_string(),
            args,
        }
    }

    /// Look up a field of an object expression.
    pub fn field(&self, key: &str) -> Option<&Expr> {
        match self {
            Expr::Object(fields) => fields.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Count calls to `callee` anywhere in this expression.
    pub fn count_calls(&self, callee: &str) -> usize {
        match self {
            Expr::Ident(_) | Expr::Str(_) | Expr::Template(_) => 0,
            Expr::Concat(l, r) => l.count_calls(callee) + r.count_calls(callee),
            Expr::Call { callee: c, args } => {
                usize::from(c == callee) + args.iter().map(|a| a.count_calls(callee)).sum::<usize>()
            }
            Expr::New { args, .. } => args.iter().map(|a| a.count_calls(callee)).sum(),
            Expr::Object(fields) => fields.iter().map(|(_, v)| v.count_calls(callee)).sum(),
        }
    }
}

/// A typed function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub annotation: TypeExpr,
}

/// A function whose body returns a single expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub body: Expr,
    pub return_type: TypeExpr,
}

/// `type Name = value;`, optionally exported.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAlias {
    pub name: String,
    pub value: TypeExpr,
    pub exported: bool,
}

/// A generated module: imports, then type aliases, then the default export.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub imports: Vec<ImportDecl>,
    pub aliases: Vec<TypeAlias>,
    pub default_export: FunctionDecl,
}
