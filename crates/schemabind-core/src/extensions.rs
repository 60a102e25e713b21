//! Separates type extensions from base definitions so that a schema can be
//! built from the latter and then extended with the former.

use crate::ast;
use crate::types::GraphQLTypeKind;

/// The kinds of type extension the type-definitions grammar can express.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExtensionKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl ExtensionKind {
    pub fn of(ext: &ast::schema::TypeExtension) -> Self {
        use ast::schema::TypeExtension;
        match ext {
            TypeExtension::Enum(_) => Self::Enum,
            TypeExtension::InputObject(_) => Self::InputObject,
            TypeExtension::Interface(_) => Self::Interface,
            TypeExtension::Object(_) => Self::Object,
            TypeExtension::Scalar(_) => Self::Scalar,
            TypeExtension::Union(_) => Self::Union,
        }
    }

    /// Whether [`extract_extensions`] keeps extensions of this kind.
    ///
    /// Scalar extensions are not extracted and so are never applied by
    /// [`make_executable_schema`](crate::make_executable_schema).
    pub fn is_extracted(&self) -> bool {
        !matches!(self, Self::Scalar)
    }

    /// The kind of type an extension of this kind may target.
    pub fn target_type_kind(&self) -> GraphQLTypeKind {
        match self {
            Self::Enum => GraphQLTypeKind::Enum,
            Self::InputObject => GraphQLTypeKind::InputObject,
            Self::Interface => GraphQLTypeKind::Interface,
            Self::Object => GraphQLTypeKind::Object,
            Self::Scalar => GraphQLTypeKind::Scalar,
            Self::Union => GraphQLTypeKind::Union,
        }
    }
}
impl std::fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Enum => "enum",
            Self::InputObject => "input object",
            Self::Interface => "interface",
            Self::Object => "object",
            Self::Scalar => "scalar",
            Self::Union => "union",
        })
    }
}

/// The name of the type a type extension targets.
pub fn extension_type_name(ext: &ast::schema::TypeExtension) -> &str {
    use ast::schema::TypeExtension;
    match ext {
        TypeExtension::Enum(ext) => ext.name.as_str(),
        TypeExtension::InputObject(ext) => ext.name.as_str(),
        TypeExtension::Interface(ext) => ext.name.as_str(),
        TypeExtension::Object(ext) => ext.name.as_str(),
        TypeExtension::Scalar(ext) => ext.name.as_str(),
        TypeExtension::Union(ext) => ext.name.as_str(),
    }
}

/// Returns a new document holding only the object, interface, input object,
/// union and enum extensions of `document`, in their original order.
///
/// The input document is left untouched.
pub fn extract_extensions(
    document: &ast::schema::Document,
) -> ast::schema::Document {
    let definitions = document.definitions.iter().filter(|def| {
        let ast::schema::Definition::TypeExtension(ext) = def else {
            return false;
        };
        let kind = ExtensionKind::of(ext);
        if !kind.is_extracted() {
            log::debug!(
                "Dropping {kind} extension of `{}`; it is not applied.",
                extension_type_name(ext),
            );
        }
        kind.is_extracted()
    }).cloned().collect();

    ast::schema::Document { definitions }
}
