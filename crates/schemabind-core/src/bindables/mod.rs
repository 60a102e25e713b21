//! Attaching runtime behaviour (resolvers, type resolvers, scalar callbacks,
//! enum values) to a built [`Schema`].

mod enum_type_binding;
mod fallback_resolvers;
mod interface_type_binding;
mod object_type_binding;
mod scalar_type_binding;
mod union_type_binding;

pub use enum_type_binding::EnumTypeBinding;
pub use fallback_resolvers::FallbackResolvers;
pub use interface_type_binding::InterfaceTypeBinding;
pub use object_type_binding::ObjectTypeBinding;
pub use scalar_type_binding::ScalarTypeBinding;
pub use union_type_binding::UnionTypeBinding;

use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

/// Anything that can attach behaviour to a built [`Schema`].
///
/// Implementations may mutate any part of the schema; when several
/// bindables write the same slot, the one applied last wins.
pub trait SchemaBindable {
    fn bind_to_schema(&self, schema: &mut Schema) -> Result<(), BindError>;
}

/// The bindables passed to
/// [`make_executable_schema`](crate::make_executable_schema): none, one, or
/// an ordered sequence.
pub enum Bindables<'a> {
    None,
    One(&'a dyn SchemaBindable),
    Many(Vec<&'a dyn SchemaBindable>),
}
impl Bindables<'_> {
    /// Applies each bindable to `schema` in order, stopping at the first
    /// error. Bindables applied before the failing one are not rolled back.
    pub fn bind_to_schema(&self, schema: &mut Schema) -> Result<(), BindError> {
        match self {
            Self::None => Ok(()),
            Self::One(bindable) => bindable.bind_to_schema(schema),
            Self::Many(bindables) => {
                for bindable in bindables {
                    bindable.bind_to_schema(schema)?;
                }
                Ok(())
            },
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Many(bindables) => bindables.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
impl<'a> From<Option<&'a dyn SchemaBindable>> for Bindables<'a> {
    fn from(bindable: Option<&'a dyn SchemaBindable>) -> Self {
        match bindable {
            Some(bindable) => Self::One(bindable),
            None => Self::None,
        }
    }
}
impl<'a, B: SchemaBindable> From<&'a B> for Bindables<'a> {
    fn from(bindable: &'a B) -> Self {
        Self::One(bindable)
    }
}
impl<'a> From<Vec<&'a dyn SchemaBindable>> for Bindables<'a> {
    fn from(bindables: Vec<&'a dyn SchemaBindable>) -> Self {
        Self::Many(bindables)
    }
}

/// Looks up `type_name` for a binding, failing when it is absent.
pub(crate) fn binding_target<'a>(
    schema: &'a mut Schema,
    type_name: &str,
) -> Result<&'a mut GraphQLType, BindError> {
    schema.get_type_mut(type_name).ok_or_else(|| BindError::UndefinedType {
        type_name: type_name.to_string(),
    })
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum BindError {
    #[error("{0}")]
    Custom(String),

    #[error(
        "Expected `{type_name}` to be a {expected} type, but it is a \
        {actual} type"
    )]
    InvalidTypeKind {
        type_name: String,
        expected: GraphQLTypeKind,
        actual: GraphQLTypeKind,
    },

    #[error("The `{enum_name}` enum has no `{value_name}` value")]
    UndefinedEnumValue {
        enum_name: String,
        value_name: String,
    },

    #[error("The `{type_name}` type has no `{field_name}` field")]
    UndefinedField {
        type_name: String,
        field_name: String,
    },

    #[error("No type named `{type_name}` is defined in the schema")]
    UndefinedType {
        type_name: String,
    },
}

#[cfg(test)]
mod tests;
