use crate::schema::TypeValidationError;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Checks that every type reference within a types map resolves to a type of
/// a compatible kind within that same map.
///
/// Run once over the base types and again after type extensions have been
/// merged, since extensions may introduce new references.
pub(crate) struct TypesValidator<'a> {
    check_interface_fields: bool,
    errors: Vec<TypeValidationError>,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> TypesValidator<'a> {
    pub fn new(types_map: &'a IndexMap<String, GraphQLType>) -> Self {
        Self {
            check_interface_fields: true,
            errors: vec![],
            types_map,
        }
    }

    /// Skips checking that implementors define every field of their
    /// interfaces. A later type extension may still add those fields.
    pub fn defer_interface_fields(mut self) -> Self {
        self.check_interface_fields = false;
        self
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let types_map = self.types_map;
        for type_ in types_map.values() {
            match type_ {
                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                    => (),

                GraphQLType::InputObject(type_) =>
                    self.validate_input_object_type(type_),

                GraphQLType::Interface(type_) =>
                    self.validate_object_or_interface_type(&type_.data),

                GraphQLType::Object(type_) =>
                    self.validate_object_or_interface_type(&type_.0),

                GraphQLType::Union(type_) =>
                    self.validate_union_type(type_),
            }
        }
        self.errors
    }

    fn validate_field(&mut self, field: &Field) {
        // https://spec.graphql.org/October2021/#sel-IAHZhCFDBDCAACCTl4L
        if field.name().starts_with("__") {
            self.errors.push(TypeValidationError::InvalidDunderPrefixedFieldName {
                def_location: field.def_location().to_owned(),
                field_name: field.name().to_string(),
                type_name: field.parent_type_name().to_string(),
            });
        }

        let field_type_name = field.type_annotation().innermost_type_name();
        match self.types_map.get(field_type_name) {
            Some(field_type) if !field_type.is_output_type() =>
                self.errors.push(TypeValidationError::InvalidOutputFieldWithInputType {
                    def_location: field.def_location().to_owned(),
                    field_name: field.name().to_string(),
                    input_type_name: field_type_name.to_string(),
                    parent_type_name: field.parent_type_name().to_string(),
                }),

            Some(_) => (),

            None => self.errors.push(TypeValidationError::UndefinedTypeName {
                ref_location: field.def_location().to_owned(),
                undefined_type_name: field_type_name.to_string(),
            }),
        }

        for param in field.parameters().values() {
            let param_type_name = param.type_annotation().innermost_type_name();
            match self.types_map.get(param_type_name) {
                Some(param_type) if !param_type.is_input_type() =>
                    self.errors.push(TypeValidationError::InvalidParameterWithOutputOnlyType {
                        def_location: param.def_location().to_owned(),
                        field_name: field.name().to_string(),
                        outputonly_type_name: param_type_name.to_string(),
                        parameter_name: param.name().to_string(),
                        parent_type_name: field.parent_type_name().to_string(),
                    }),

                Some(_) => (),

                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: param.def_location().to_owned(),
                    undefined_type_name: param_type_name.to_string(),
                }),
            }
        }
    }

    fn validate_input_object_type(&mut self, type_: &InputObjectType) {
        for field in type_.fields().values() {
            let field_type_name = field.type_annotation().innermost_type_name();
            match self.types_map.get(field_type_name) {
                Some(field_type) if !field_type.is_input_type() =>
                    self.errors.push(TypeValidationError::InvalidInputFieldWithOutputType {
                        def_location: field.def_location().to_owned(),
                        field_name: field.name().to_string(),
                        invalid_type_name: field_type_name.to_string(),
                        parent_type_name: type_.name().to_string(),
                    }),

                Some(_) => (),

                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: field.def_location().to_owned(),
                    undefined_type_name: field_type_name.to_string(),
                }),
            }
        }
    }

    fn validate_object_or_interface_type(&mut self, type_: &ObjectOrInterfaceTypeData) {
        for field in type_.fields.values() {
            self.validate_field(field);
        }

        for (iface_name, iface_ref_location) in &type_.interfaces {
            let iface_type =
                if let Some(iface_type) = self.types_map.get(iface_name) {
                    iface_type
                } else {
                    self.errors.push(TypeValidationError::ImplementsUndefinedInterface {
                        ref_location: iface_ref_location.to_owned(),
                        type_name: type_.name.to_string(),
                        undefined_interface_name: iface_name.to_string(),
                    });
                    continue;
                };

            let iface =
                if let Some(iface) = iface_type.as_interface() {
                    iface
                } else {
                    self.errors.push(TypeValidationError::ImplementsNonInterfaceType {
                        ref_location: iface_ref_location.to_owned(),
                        non_interface_type_name: iface_name.to_string(),
                        type_name: type_.name.to_string(),
                    });
                    continue;
                };

            if !self.check_interface_fields {
                continue;
            }
            for field_name in iface.fields().keys() {
                if !type_.fields.contains_key(field_name) {
                    self.errors.push(TypeValidationError::MissingInterfaceSpecifiedField {
                        def_location: type_.def_location.to_owned(),
                        field_name: field_name.to_string(),
                        interface_name: iface_name.to_string(),
                        type_name: type_.name.to_string(),
                    });
                }
            }
        }
    }

    fn validate_union_type(&mut self, type_: &UnionType) {
        // Member types of a union type can only be object types.
        // https://spec.graphql.org/October2021/#sel-HAHdfFDABABlG3ib
        for (member_type_name, member_ref_location) in &type_.members {
            match self.types_map.get(member_type_name) {
                Some(GraphQLType::Object(_)) => (),

                Some(member_type) =>
                    self.errors.push(TypeValidationError::InvalidUnionMemberTypeKind {
                        ref_location: member_ref_location.to_owned(),
                        member_type_kind: member_type.kind(),
                        member_type_name: member_type_name.to_string(),
                        union_type_name: type_.name().to_string(),
                    }),

                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: member_ref_location.to_owned(),
                    undefined_type_name: member_type_name.to_string(),
                }),
            }
        }
    }
}
