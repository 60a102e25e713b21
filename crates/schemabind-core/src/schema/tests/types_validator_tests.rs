use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::GraphQLTypeKind;
use super::parse;

fn validation_errors(type_defs: &str) -> Vec<TypeValidationError> {
    match SchemaBuilder::build_ast_schema(&parse(type_defs)) {
        Err(SchemaBuildError::TypeValidationErrors { errors }) => errors,
        other => panic!("expected type validation errors, got {other:?}"),
    }
}

#[test]
fn output_field_with_input_type() {
    let errors = validation_errors(concat!(
        "type Query { filter: Filter }\n",
        "input Filter { a: Int }",
    ));
    assert!(matches!(
        errors.as_slice(),
        [TypeValidationError::InvalidOutputFieldWithInputType {
            field_name,
            input_type_name,
            ..
        }] if field_name == "filter" && input_type_name == "Filter"
    ));
}

#[test]
fn input_field_with_output_type() {
    let errors = validation_errors(concat!(
        "type Query { a: Int }\n",
        "input Filter { q: Query }",
    ));
    assert!(matches!(
        errors.as_slice(),
        [TypeValidationError::InvalidInputFieldWithOutputType {
            field_name,
            invalid_type_name,
            parent_type_name,
            ..
        }] if field_name == "q" && invalid_type_name == "Query" && parent_type_name == "Filter"
    ));
}

#[test]
fn parameter_with_output_type() {
    let errors = validation_errors("type Query { a(q: Query): Int }");
    assert!(matches!(
        errors.as_slice(),
        [TypeValidationError::InvalidParameterWithOutputOnlyType {
            parameter_name,
            outputonly_type_name,
            ..
        }] if parameter_name == "q" && outputonly_type_name == "Query"
    ));
}

#[test]
fn union_member_must_be_an_object_type() {
    let errors = validation_errors(concat!(
        "type Query { a: Int }\n",
        "enum Color { RED }\n",
        "union U = Query | Color",
    ));
    assert!(matches!(
        errors.as_slice(),
        [TypeValidationError::InvalidUnionMemberTypeKind {
            member_type_kind: GraphQLTypeKind::Enum,
            member_type_name,
            ..
        }] if member_type_name == "Color"
    ));
}

#[test]
fn implemented_interface_must_be_an_interface() {
    let errors = validation_errors(concat!(
        "type Query implements Other { a: Int }\n",
        "type Other { a: Int }",
    ));
    assert!(matches!(
        errors.as_slice(),
        [TypeValidationError::ImplementsNonInterfaceType {
            non_interface_type_name,
            ..
        }] if non_interface_type_name == "Other"
    ));
}

#[test]
fn implemented_interface_must_be_defined() {
    let errors = validation_errors("type Query implements Missing { a: Int }");
    assert!(matches!(
        errors.as_slice(),
        [TypeValidationError::ImplementsUndefinedInterface {
            undefined_interface_name,
            ..
        }] if undefined_interface_name == "Missing"
    ));
}

#[test]
fn dunder_prefixed_field_name() {
    let errors = validation_errors("type Query { __secret: Int }");
    assert!(matches!(
        errors.as_slice(),
        [TypeValidationError::InvalidDunderPrefixedFieldName { field_name, .. }]
            if field_name == "__secret"
    ));
}

#[test]
fn every_error_is_reported() {
    let errors = validation_errors("type Query { a: Missing1, b: Missing2 }");
    assert_eq!(errors.len(), 2);
}
