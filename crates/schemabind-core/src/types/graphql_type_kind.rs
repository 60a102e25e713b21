/// The category of a [`GraphQLType`](crate::types::GraphQLType) without its
/// definition. Error values carry this rather than the type itself so they
/// stay small and comparable.
///
/// The built-in scalars get their own variants; `Scalar` only ever means a
/// custom scalar declared in the type definitions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTypeKind {
    Bool,
    Enum,
    Float,
    ID,
    InputObject,
    Int,
    Interface,
    Object,
    Scalar,
    String,
    Union,
}
impl GraphQLTypeKind {
    /// https://spec.graphql.org/October2021/#IsInputType()
    pub fn is_input_kind(&self) -> bool {
        !matches!(self, Self::Interface | Self::Object | Self::Union)
    }

    /// https://spec.graphql.org/October2021/#IsOutputType()
    pub fn is_output_kind(&self) -> bool {
        *self != Self::InputObject
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "built-in Boolean scalar",
            Self::Float => "built-in Float scalar",
            Self::ID => "built-in ID scalar",
            Self::Int => "built-in Int scalar",
            Self::String => "built-in String scalar",
            Self::Enum => "enum",
            Self::InputObject => "input object",
            Self::Interface => "interface",
            Self::Object => "object",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }
}
impl std::fmt::Display for GraphQLTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
