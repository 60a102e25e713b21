use crate::ast;

/// Represents the annotated type of a [`Field`](crate::types::Field),
/// [`InputField`](crate::types::InputField), or
/// [`Parameter`](crate::types::Parameter).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
    },
    Named {
        nullable: bool,
        type_name: String,
    },
}
impl TypeAnnotation {
    /// The name of the named type at the core of this annotation, with any
    /// list wrappers peeled off.
    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::List { inner, .. } => inner.innermost_type_name(),
            Self::Named { type_name, .. } => type_name.as_str(),
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } | Self::Named { nullable, .. } => *nullable,
        }
    }

    pub fn to_graphql_string(&self) -> String {
        let (mut type_str, nullable) = match self {
            Self::List { inner, nullable } =>
                (format!("[{}]", inner.to_graphql_string()), *nullable),
            Self::Named { type_name, nullable } =>
                (type_name.to_string(), *nullable),
        };
        if !nullable {
            type_str.push('!');
        }
        type_str
    }

    pub(crate) fn from_ast_type(ast_type: &ast::operation::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &ast::operation::Type, nullable: bool) -> Self {
        match ast_type {
            ast::operation::Type::ListType(inner) =>
                Self::List {
                    inner: Box::new(Self::from_ast_type_impl(inner, true)),
                    nullable,
                },

            ast::operation::Type::NamedType(name) =>
                Self::Named {
                    nullable,
                    type_name: name.to_string(),
                },

            ast::operation::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }
}
