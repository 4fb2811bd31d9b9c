/// A Flow type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    Any,
    String,
    Number,
    Boolean,
    StringLiteral(String),
    Union(Vec<TypeExpr>),
    Array(Box<TypeExpr>),
    /// A generic instantiation such as `AjaxPipe<AjaxObject, Response>`.
    Generic { name: String, args: Vec<TypeExpr> },
    /// An object with no declared properties (`Object`).
    OpenObject,
    /// A closed object type allowing only the listed properties.
    ExactObject(Vec<ObjectProperty>),
    /// Reference to a named type, never inlined.
    Named(String),
}

/// A property of an exact object type.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProperty {
    pub name: String,
    pub value: TypeExpr,
    pub optional: bool,
}

impl TypeExpr {
    pub fn named(name: &str) -> Self {
        TypeExpr::Named(name.to_string())
    }

    /// Rewrite every [`TypeExpr::Named`] reference found in `renames` as
    /// `(from, to)` pairs.
    pub fn rename_named(&mut self, renames: &[(String, String)]) {
        match self {
            TypeExpr::Named(name) => {
                if let Some((_, to)) = renames.iter().find(|(from, _)| from.as_str() == name.as_str()) {
                    *name = to.clone();
                }
            }
            TypeExpr::Union(members) => members.iter_mut().for_each(|m| m.rename_named(renames)),
            TypeExpr::Array(element) => element.rename_named(renames),
            TypeExpr::Generic { args, .. } => args.iter_mut().for_each(|a| a.rename_named(renames)),
            TypeExpr::ExactObject(props) => props
                .iter_mut()
                .for_each(|p| p.value.rename_named(renames)),
            TypeExpr::Any
            | TypeExpr::String
            | TypeExpr::Number
            | TypeExpr::Boolean
            | TypeExpr::StringLiteral(_)
            | TypeExpr::OpenObject => {}
        }
    }

    /// Find a property of an exact object type by name.
    pub fn property(&self, name: &str) -> Option<&ObjectProperty> {
        match self {
            TypeExpr::ExactObject(props) => props.iter().find(|p| p.name == name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_named_reaches_nested_types() {
        let mut ty = TypeExpr::ExactObject(vec![ObjectProperty {
            name: "pipes".to_string(),
            value: TypeExpr::Array(Box::new(TypeExpr::named("AjaxPipe"))),
            optional: false,
        }]);
        ty.rename_named(&[("AjaxPipe".to_string(), "AjaxPipe_".to_string())]);
        assert_eq!(
            ty.property("pipes").unwrap().value,
            TypeExpr::Array(Box::new(TypeExpr::named("AjaxPipe_")))
        );
    }
}
