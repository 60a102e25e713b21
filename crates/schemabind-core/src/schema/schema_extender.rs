use crate::ast;
use crate::DirectiveAnnotationBuilder;
use crate::extensions::extension_type_name;
use crate::extensions::ExtensionKind;
use crate::loc;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::schema::TypesValidator;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ScalarType;
use crate::types::TypeDefHelpers;
use crate::types::UnionType;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaExtendError>;

/// Merges every type extension in `document` into `schema` and returns the
/// extended schema.
///
/// Extensions are applied in document order. A document with no definitions
/// returns `schema` unchanged. Every extension must target a type that
/// already exists in `schema` and is of the matching kind.
pub fn extend_schema(
    mut schema: Schema,
    document: &ast::schema::Document,
) -> Result<Schema> {
    if document.definitions.is_empty() {
        return Ok(schema);
    }

    for def in &document.definitions {
        let ast::schema::Definition::TypeExtension(ext) = def else {
            return Err(SchemaExtendError::NonExtensionDefinition {
                location: definition_location(def),
            });
        };
        visit_type_extension(&mut schema.types, ext)?;
    }

    let errors = TypesValidator::new(&schema.types).validate();
    if !errors.is_empty() {
        return Err(SchemaExtendError::TypeValidationErrors { errors });
    }

    log::debug!(
        "Applied {} type extensions.",
        document.definitions.len(),
    );
    Ok(schema)
}

/// Checks that every type extension in `document` targets a type in `types`
/// of the matching kind, without merging anything.
pub fn check_extension_targets(
    types: &IndexMap<String, GraphQLType>,
    document: &ast::schema::Document,
) -> Result<()> {
    for def in &document.definitions {
        let ast::schema::Definition::TypeExtension(ext) = def else {
            continue;
        };
        let type_name = extension_type_name(ext);
        let extension_kind = ExtensionKind::of(ext);
        match types.get(type_name) {
            Some(type_) if type_.kind() == extension_kind.target_type_kind() => (),

            Some(type_) => return Err(SchemaExtendError::InvalidExtensionType {
                extension_kind,
                extension_location: loc::SourceLocation::from_ast_position(
                    extension_position(ext),
                ),
                schema_type_kind: type_.kind(),
                type_name: type_name.to_string(),
            }),

            None => return Err(SchemaExtendError::ExtensionOfUndefinedType {
                extension_location: loc::SourceLocation::from_ast_position(
                    extension_position(ext),
                ),
                type_name: type_name.to_string(),
            }),
        }
    }
    Ok(())
}

fn definition_location(def: &ast::schema::Definition) -> loc::SourceLocation {
    use ast::schema::Definition;
    use ast::schema::TypeDefinition;
    let pos = match def {
        Definition::DirectiveDefinition(def) => &def.position,
        Definition::SchemaDefinition(def) => &def.position,
        Definition::TypeDefinition(TypeDefinition::Enum(def)) => &def.position,
        Definition::TypeDefinition(TypeDefinition::InputObject(def)) => &def.position,
        Definition::TypeDefinition(TypeDefinition::Interface(def)) => &def.position,
        Definition::TypeDefinition(TypeDefinition::Object(def)) => &def.position,
        Definition::TypeDefinition(TypeDefinition::Scalar(def)) => &def.position,
        Definition::TypeDefinition(TypeDefinition::Union(def)) => &def.position,
        Definition::TypeExtension(ext) => extension_position(ext),
    };
    loc::SourceLocation::from_ast_position(pos)
}

fn extension_position(ext: &ast::schema::TypeExtension) -> &ast::Pos {
    use ast::schema::TypeExtension;
    match ext {
        TypeExtension::Enum(ext) => &ext.position,
        TypeExtension::InputObject(ext) => &ext.position,
        TypeExtension::Interface(ext) => &ext.position,
        TypeExtension::Object(ext) => &ext.position,
        TypeExtension::Scalar(ext) => &ext.position,
        TypeExtension::Union(ext) => &ext.position,
    }
}

fn visit_type_extension(
    types: &mut IndexMap<String, GraphQLType>,
    ext: &ast::schema::TypeExtension,
) -> Result<()> {
    use ast::schema::TypeExtension;

    let type_name = extension_type_name(ext);
    let extension_kind = ExtensionKind::of(ext);
    let extension_location = loc::SourceLocation::from_ast_position(
        extension_position(ext),
    );
    log::trace!("Applying {extension_kind} extension of `{type_name}`.");

    let Some(type_) = types.get_mut(type_name) else {
        return Err(SchemaExtendError::ExtensionOfUndefinedType {
            extension_location,
            type_name: type_name.to_string(),
        });
    };
    let schema_type_kind = type_.kind();

    match (type_, ext) {
        (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) =>
            merge_enum_type_extension(enum_type, ext),

        (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(ext)) =>
            merge_inputobj_type_extension(inputobj_type, ext),

        (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) =>
            merge_object_or_interface_extension(
                &mut iface_type.data,
                &ext.position,
                &ext.directives,
                &ext.fields,
                &ext.implements_interfaces,
            ),

        (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) =>
            merge_object_or_interface_extension(
                &mut obj_type.0,
                &ext.position,
                &ext.directives,
                &ext.fields,
                &ext.implements_interfaces,
            ),

        (GraphQLType::Scalar(scalar_type), TypeExtension::Scalar(ext)) =>
            merge_scalar_type_extension(scalar_type, ext),

        (GraphQLType::Union(union_type), TypeExtension::Union(ext)) =>
            merge_union_type_extension(union_type, ext),

        _ => Err(SchemaExtendError::InvalidExtensionType {
            extension_kind,
            extension_location,
            schema_type_kind,
            type_name: type_name.to_string(),
        }),
    }
}

fn merge_enum_type_extension(
    enum_type: &mut EnumType,
    ext: &ast::schema::EnumTypeExtension,
) -> Result<()> {
    enum_type.directives.append(&mut DirectiveAnnotationBuilder::from_ast(
        &ext.directives,
    ));

    for ext_value in &ext.values {
        let value = TypeDefHelpers::enum_value_from_ast(&ext.name, ext_value);

        // Error if this value is already defined.
        if let Some(existing_value) = enum_type.values.get(value.name()) {
            return Err(SchemaExtendError::DuplicateEnumValueDefinition {
                enum_name: ext.name.to_string(),
                value_name: value.name().to_string(),
                value_def1: existing_value.def_location().to_owned(),
                value_def2: value.def_location().to_owned(),
            });
        }
        enum_type.values.insert(value.name().to_string(), value);
    }

    Ok(())
}

fn merge_inputobj_type_extension(
    inputobj_type: &mut InputObjectType,
    ext: &ast::schema::InputObjectTypeExtension,
) -> Result<()> {
    inputobj_type.directives.append(&mut DirectiveAnnotationBuilder::from_ast(
        &ext.directives,
    ));

    for ext_field in &ext.fields {
        let field = TypeDefHelpers::input_field_from_ast(&ext.name, ext_field);

        // Error if this field is already defined.
        if let Some(existing_field) = inputobj_type.fields.get(field.name()) {
            return Err(SchemaExtendError::DuplicateFieldNameDefinition {
                type_name: ext.name.to_string(),
                field_name: field.name().to_string(),
                field_def1: existing_field.def_location().to_owned(),
                field_def2: field.def_location().to_owned(),
            });
        }
        inputobj_type.fields.insert(field.name().to_string(), field);
    }

    Ok(())
}

fn merge_object_or_interface_extension(
    type_data: &mut ObjectOrInterfaceTypeData,
    ext_position: &ast::Pos,
    ext_directives: &[ast::operation::Directive],
    ext_fields: &[ast::schema::Field],
    ext_interfaces: &[String],
) -> Result<()> {
    let ext_location = loc::SourceLocation::from_ast_position(ext_position);

    type_data.directives.append(&mut DirectiveAnnotationBuilder::from_ast(
        ext_directives,
    ));

    for iface_name in ext_interfaces {
        if type_data.interfaces.contains_key(iface_name.as_str()) {
            return Err(SchemaExtendError::DuplicateInterfaceImplementation {
                interface_name: iface_name.to_string(),
                location: ext_location,
                type_name: type_data.name.to_string(),
            });
        }
        type_data.interfaces.insert(iface_name.to_string(), ext_location.to_owned());
    }

    for ext_field in ext_fields {
        let field: Field = TypeDefHelpers::field_from_ast(&type_data.name, ext_field);

        // Error if this field is already defined.
        if let Some(existing_field) = type_data.fields.get(field.name()) {
            return Err(SchemaExtendError::DuplicateFieldNameDefinition {
                type_name: type_data.name.to_string(),
                field_name: field.name().to_string(),
                field_def1: existing_field.def_location().to_owned(),
                field_def2: field.def_location().to_owned(),
            });
        }
        type_data.fields.insert(field.name().to_string(), field);
    }

    Ok(())
}

fn merge_scalar_type_extension(
    scalar_type: &mut ScalarType,
    ext: &ast::schema::ScalarTypeExtension,
) -> Result<()> {
    scalar_type.directives.append(&mut DirectiveAnnotationBuilder::from_ast(
        &ext.directives,
    ));
    Ok(())
}

fn merge_union_type_extension(
    union_type: &mut UnionType,
    ext: &ast::schema::UnionTypeExtension,
) -> Result<()> {
    let ext_location = loc::SourceLocation::from_ast_position(&ext.position);

    union_type.directives.append(&mut DirectiveAnnotationBuilder::from_ast(
        &ext.directives,
    ));

    for member_name in &ext.types {
        if union_type.members.contains_key(member_name.as_str()) {
            return Err(SchemaExtendError::DuplicateUnionMember {
                location: ext_location,
                member_name: member_name.to_string(),
                type_name: ext.name.to_string(),
            });
        }
        union_type.members.insert(member_name.to_string(), ext_location.to_owned());
    }

    Ok(())
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaExtendError {
    #[error("The `{enum_name}` enum already defines the `{value_name}` value")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
        value_def1: loc::SourceLocation,
        value_def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` type already defines the `{field_name}` field")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` type already implements the `{interface_name}` interface")]
    DuplicateInterfaceImplementation {
        interface_name: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error("The `{type_name}` union already lists `{member_name}` as a member")]
    DuplicateUnionMember {
        location: loc::SourceLocation,
        member_name: String,
        type_name: String,
    },

    #[error("Attempted to extend `{type_name}`, but no such type is defined")]
    ExtensionOfUndefinedType {
        extension_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Attempted to apply an {extension_kind} extension to `{type_name}`, \
        which is a {schema_type_kind} type"
    )]
    InvalidExtensionType {
        extension_kind: ExtensionKind,
        extension_location: loc::SourceLocation,
        schema_type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error("Only type extensions may be applied to an existing schema")]
    NonExtensionDefinition {
        location: loc::SourceLocation,
    },

    #[error("Type validation errors: {errors:#?}")]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}
