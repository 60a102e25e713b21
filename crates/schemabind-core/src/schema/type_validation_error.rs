use crate::loc;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

/// A dangling or ill-kinded type reference found after the schema graph is
/// assembled. Locations point at the reference, not at the referenced type.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "The `{type_name}` type attempted to implement `{non_interface_type_name}`, \
        which is not an interface type"
    )]
    ImplementsNonInterfaceType {
        ref_location: loc::SourceLocation,
        non_interface_type_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type attempted to implement `{undefined_interface_name}`, \
        which is not defined in the schema"
    )]
    ImplementsUndefinedInterface {
        ref_location: loc::SourceLocation,
        type_name: String,
        undefined_interface_name: String,
    },

    #[error(
        "Field names must not begin with `__`: The `{type_name}` type defines \
        a field named `{field_name}`"
    )]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is a non-input type."
    )]
    InvalidInputFieldWithOutputType {
        def_location: loc::SourceLocation,
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input object type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input object type"
    )]
    InvalidOutputFieldWithInputType {
        def_location: loc::SourceLocation,
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{parameter_name}` parameter of `{parent_type_name}.{field_name}` was \
        declared with the `{outputonly_type_name}` type, which is not an \
        input-compatible type."
    )]
    InvalidParameterWithOutputOnlyType {
        def_location: loc::SourceLocation,
        field_name: String,
        outputonly_type_name: String,
        parameter_name: String,
        parent_type_name: String,
    },

    #[error(
        "Invalid union member type: The `{union_type_name}` type defines one \
        of its members as `{member_type_name}`, but this type is a \
        {member_type_kind} type and union members can only be object types."
    )]
    InvalidUnionMemberTypeKind {
        ref_location: loc::SourceLocation,
        member_type_kind: GraphQLTypeKind,
        member_type_name: String,
        union_type_name: String,
    },

    #[error(
        "The `{type_name}` type implements the `{interface_name}` interface, \
        but does not define a field named `{field_name}`"
    )]
    MissingInterfaceSpecifiedField {
        def_location: loc::SourceLocation,
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error("There is no type defined with the name `{undefined_type_name}`")]
    UndefinedTypeName {
        ref_location: loc::SourceLocation,
        undefined_type_name: String,
    },
}
