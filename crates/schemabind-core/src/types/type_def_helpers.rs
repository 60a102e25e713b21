use crate::ast;
use crate::DirectiveAnnotationBuilder;
use crate::loc;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputField;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// Converts individual AST members into their schema-graph counterparts.
///
/// These conversions never fail on their own; whether a member collides with
/// an existing one is decided by the caller (base definition vs. type
/// extension), since each reports collisions with its own error type.
pub(crate) struct TypeDefHelpers;
impl TypeDefHelpers {
    pub fn enum_value_from_ast(
        enum_type_name: &str,
        value: &ast::schema::EnumValue,
    ) -> EnumValue {
        EnumValue {
            def_location: loc::SourceLocation::from_ast_position(&value.position),
            description: value.description.to_owned(),
            directives: DirectiveAnnotationBuilder::from_ast(&value.directives),
            enum_type_name: enum_type_name.to_string(),
            internal_value: None,
            name: value.name.to_string(),
        }
    }

    pub fn field_from_ast(
        parent_type_name: &str,
        field: &ast::schema::Field,
    ) -> Field {
        Field {
            def_location: loc::SourceLocation::from_ast_position(&field.position),
            description: field.description.to_owned(),
            directives: DirectiveAnnotationBuilder::from_ast(&field.directives),
            name: field.name.to_string(),
            parameters: Self::parameters_from_ast(&field.arguments),
            parent_type_name: parent_type_name.to_string(),
            resolver: None,
            type_annotation: TypeAnnotation::from_ast_type(&field.field_type),
        }
    }

    pub fn input_field_from_ast(
        parent_type_name: &str,
        input_value: &ast::schema::InputValue,
    ) -> InputField {
        InputField {
            def_location: loc::SourceLocation::from_ast_position(
                &input_value.position,
            ),
            default_value: input_value.default_value.as_ref().map(Value::from_ast),
            description: input_value.description.to_owned(),
            directives: DirectiveAnnotationBuilder::from_ast(
                &input_value.directives,
            ),
            name: input_value.name.to_string(),
            parent_type_name: parent_type_name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&input_value.value_type),
        }
    }

    /// A repeated parameter name keeps its last definition.
    pub fn parameters_from_ast(
        params: &[ast::schema::InputValue],
    ) -> IndexMap<String, Parameter> {
        params.iter().map(|param| (param.name.to_string(), Parameter {
            def_location: loc::SourceLocation::from_ast_position(&param.position),
            default_value: param.default_value.as_ref().map(Value::from_ast),
            description: param.description.to_owned(),
            name: param.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&param.value_type),
        })).collect()
    }
}
