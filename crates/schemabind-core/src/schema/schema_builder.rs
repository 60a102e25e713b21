use crate::ast;
use crate::DirectiveAnnotationBuilder;
use crate::loc;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::schema::TypesValidator;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeDefHelpers;
use crate::types::UnionType;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphQLOperationType {
    Query,
    Mutation,
    Subscription,
}
impl GraphQLOperationType {
    /// The type name used for this root operation type when no `schema`
    /// declaration names one explicitly.
    pub fn conventional_type_name(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }
}
impl std::fmt::Display for GraphQLOperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        })
    }
}

/// Represents the location of a root operation type's declaration alongside
/// the name of the type it points at.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SourceLocation,
    pub type_name: String,
}

/// Builds a [`Schema`] from the *base* definitions of a document: type,
/// directive and `schema` declarations.
///
/// Type extensions found in the document are skipped here; they are merged
/// afterwards by [`extend_schema`](crate::schema::extend_schema).
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, Directive>,
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    schema_def_location: Option<loc::SourceLocation>,
    subscription_type: Option<NamedTypeDefLocation>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            directive_defs: IndexMap::from([
                ("deprecated".to_string(), Directive::Deprecated),
                ("include".to_string(), Directive::Include),
                ("skip".to_string(), Directive::Skip),
                ("specifiedBy".to_string(), Directive::SpecifiedBy),
            ]),
            mutation_type: None,
            query_type: None,
            schema_def_location: None,
            subscription_type: None,
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    /// Builds a [`Schema`] from the base definitions in `document` in one
    /// step.
    pub fn build_ast_schema(document: &ast::schema::Document) -> Result<Schema> {
        Self::new()
            .load_document(document)?
            .build()
    }

    /// Resolves the root operation types and validates every type reference.
    pub fn build(self) -> Result<Schema> {
        self.finish(true)
    }

    /// Like [`SchemaBuilder::build`], except that implementors are not yet
    /// required to define every field of their interfaces. Used when type
    /// extensions are still to be merged; [`extend_schema`] checks the
    /// merged result in full.
    ///
    /// [`extend_schema`]: crate::schema::extend_schema
    pub fn build_base(self) -> Result<Schema> {
        self.finish(false)
    }

    fn finish(mut self, check_interface_fields: bool) -> Result<Schema> {
        let query_type = match self.query_type.take() {
            Some(query_type) => query_type,
            None if self.schema_def_location.is_some() =>
                return Err(SchemaBuildError::NoQueryOperationTypeDefined),
            None => self.conventional_root_type(GraphQLOperationType::Query)
                .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?,
        };

        let mutation_type = match self.mutation_type.take() {
            Some(mutation_type) => Some(mutation_type),
            None if self.schema_def_location.is_some() => None,
            None => self.conventional_root_type(GraphQLOperationType::Mutation),
        };

        let subscription_type = match self.subscription_type.take() {
            Some(subscription_type) => Some(subscription_type),
            None if self.schema_def_location.is_some() => None,
            None => self.conventional_root_type(GraphQLOperationType::Subscription),
        };

        self.check_root_type(GraphQLOperationType::Query, &query_type)?;
        if let Some(mutation_type) = &mutation_type {
            self.check_root_type(GraphQLOperationType::Mutation, mutation_type)?;
        }
        if let Some(subscription_type) = &subscription_type {
            self.check_root_type(GraphQLOperationType::Subscription, subscription_type)?;
        }

        let mut validator = TypesValidator::new(&self.types);
        if !check_interface_fields {
            validator = validator.defer_interface_fields();
        }
        let errors = validator.validate();
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        log::debug!(
            "Built schema with {} types and {} directive definitions.",
            self.types.len(),
            self.directive_defs.len(),
        );

        Ok(Schema {
            directive_defs: self.directive_defs,
            mutation_type_name: mutation_type.map(|def| def.type_name),
            query_type_name: query_type.type_name,
            subscription_type_name: subscription_type.map(|def| def.type_name),
            types: self.types,
        })
    }

    pub fn load_document(mut self, document: &ast::schema::Document) -> Result<Self> {
        for def in &document.definitions {
            self.visit_definition(def)?;
        }
        Ok(self)
    }

    /// The types collected so far, built-in scalars first.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: &loc::SourceLocation,
        type_: GraphQLType,
    ) -> Result<()> {
        // https://spec.graphql.org/October2021/#sec-Names.Reserved-Names
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_loc.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location().to_owned(),
                def2: type_loc.to_owned(),
            });
        }

        log::trace!("Adding `{type_name}` type.");
        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    fn check_root_type(
        &self,
        operation: GraphQLOperationType,
        root_type: &NamedTypeDefLocation,
    ) -> Result<()> {
        match self.types.get(root_type.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Ok(()),

            Some(non_object_type) => Err(SchemaBuildError::InvalidOperationType {
                operation,
                type_kind: non_object_type.kind(),
                type_name: root_type.type_name.to_string(),
            }),

            None => Err(SchemaBuildError::UndefinedOperationType {
                operation,
                location: root_type.to_owned(),
            }),
        }
    }

    fn conventional_root_type(
        &self,
        operation: GraphQLOperationType,
    ) -> Option<NamedTypeDefLocation> {
        let type_name = operation.conventional_type_name();
        self.types.get(type_name).map(|type_| NamedTypeDefLocation {
            def_location: type_.def_location().to_owned(),
            type_name: type_name.to_string(),
        })
    }

    fn interfaces_from_ast(
        type_name: &str,
        def_location: &loc::SourceLocation,
        iface_names: &[String],
    ) -> Result<IndexMap<String, loc::SourceLocation>> {
        let mut interfaces = IndexMap::new();
        for iface_name in iface_names {
            if interfaces.insert(iface_name.to_string(), def_location.to_owned()).is_some() {
                return Err(SchemaBuildError::DuplicateInterfaceImplementation {
                    interface_name: iface_name.to_string(),
                    location: def_location.to_owned(),
                    type_name: type_name.to_string(),
                });
            }
        }
        Ok(interfaces)
    }

    fn object_fielddefs_from_ast(
        type_name: &str,
        fields: &[ast::schema::Field],
    ) -> Result<IndexMap<String, Field>> {
        let mut field_map: IndexMap<String, Field> = IndexMap::new();
        for field in fields {
            let field = TypeDefHelpers::field_from_ast(type_name, field);
            if let Some(existing_field) = field_map.get(field.name()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: field.name().to_string(),
                    field_def1: existing_field.def_location().to_owned(),
                    field_def2: field.def_location().to_owned(),
                });
            }
            field_map.insert(field.name().to_string(), field);
        }
        Ok(field_map)
    }

    fn visit_definition(&mut self, def: &ast::schema::Definition) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_schemablock_definition(schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_type_definition(type_def),
            Definition::TypeExtension(_) => {
                log::trace!("Skipping type extension while building base schema.");
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_directive_definition(directive_def),
        }
    }

    fn visit_directive_definition(
        &mut self,
        def: &ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let def_location = loc::SourceLocation::from_ast_position(&def.position);

        if Directive::BUILTIN_NAMES.contains(&def.name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: def.name.to_string(),
                location: def_location,
            });
        }

        if def.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                def_location,
                directive_name: def.name.to_string(),
            });
        }

        if let Some(Directive::Custom {
            def_location: existing_def_location,
            ..
        }) = self.directive_defs.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.to_string(),
                location1: existing_def_location.to_owned(),
                location2: def_location,
            });
        }

        self.directive_defs.insert(def.name.to_string(), Directive::Custom {
            def_location,
            description: def.description.to_owned(),
            locations: def.locations
                .iter()
                .map(|location| location.as_str().to_string())
                .collect(),
            name: def.name.to_string(),
            params: TypeDefHelpers::parameters_from_ast(&def.arguments),
            repeatable: def.repeatable,
        });
        Ok(())
    }

    fn visit_enum_type_definition(&mut self, def: &ast::schema::EnumType) -> Result<()> {
        let def_location = loc::SourceLocation::from_ast_position(&def.position);

        let mut values: IndexMap<String, EnumValue> = IndexMap::new();
        for ast_value in &def.values {
            let value = TypeDefHelpers::enum_value_from_ast(&def.name, ast_value);
            if let Some(existing_value) = values.get(value.name()) {
                return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                    enum_name: def.name.to_string(),
                    value_name: value.name().to_string(),
                    value_def1: existing_value.def_location().to_owned(),
                    value_def2: value.def_location().to_owned(),
                });
            }
            values.insert(value.name().to_string(), value);
        }

        self.add_new_type(
            def.name.as_str(),
            &def_location,
            GraphQLType::Enum(EnumType {
                def_location: def_location.to_owned(),
                description: def.description.to_owned(),
                directives: DirectiveAnnotationBuilder::from_ast(&def.directives),
                name: def.name.to_string(),
                values,
            }),
        )
    }

    fn visit_inputobj_type_definition(
        &mut self,
        def: &ast::schema::InputObjectType,
    ) -> Result<()> {
        let def_location = loc::SourceLocation::from_ast_position(&def.position);

        let mut fields: IndexMap<String, InputField> = IndexMap::new();
        for ast_field in &def.fields {
            let field = TypeDefHelpers::input_field_from_ast(&def.name, ast_field);
            if let Some(existing_field) = fields.get(field.name()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: def.name.to_string(),
                    field_name: field.name().to_string(),
                    field_def1: existing_field.def_location().to_owned(),
                    field_def2: field.def_location().to_owned(),
                });
            }
            fields.insert(field.name().to_string(), field);
        }

        self.add_new_type(
            def.name.as_str(),
            &def_location,
            GraphQLType::InputObject(InputObjectType {
                def_location: def_location.to_owned(),
                description: def.description.to_owned(),
                directives: DirectiveAnnotationBuilder::from_ast(&def.directives),
                fields,
                name: def.name.to_string(),
            }),
        )
    }

    fn visit_interface_type_definition(
        &mut self,
        def: &ast::schema::InterfaceType,
    ) -> Result<()> {
        let def_location = loc::SourceLocation::from_ast_position(&def.position);

        self.add_new_type(
            def.name.as_str(),
            &def_location,
            GraphQLType::Interface(InterfaceType {
                data: ObjectOrInterfaceTypeData {
                    def_location: def_location.to_owned(),
                    description: def.description.to_owned(),
                    directives: DirectiveAnnotationBuilder::from_ast(&def.directives),
                    fields: Self::object_fielddefs_from_ast(&def.name, &def.fields)?,
                    interfaces: Self::interfaces_from_ast(
                        &def.name,
                        &def_location,
                        &def.implements_interfaces,
                    )?,
                    name: def.name.to_string(),
                },
                type_resolver: None,
            }),
        )
    }

    fn visit_object_type_definition(&mut self, def: &ast::schema::ObjectType) -> Result<()> {
        let def_location = loc::SourceLocation::from_ast_position(&def.position);

        self.add_new_type(
            def.name.as_str(),
            &def_location,
            GraphQLType::Object(ObjectType(ObjectOrInterfaceTypeData {
                def_location: def_location.to_owned(),
                description: def.description.to_owned(),
                directives: DirectiveAnnotationBuilder::from_ast(&def.directives),
                fields: Self::object_fielddefs_from_ast(&def.name, &def.fields)?,
                interfaces: Self::interfaces_from_ast(
                    &def.name,
                    &def_location,
                    &def.implements_interfaces,
                )?,
                name: def.name.to_string(),
            })),
        )
    }

    fn visit_scalar_type_definition(&mut self, def: &ast::schema::ScalarType) -> Result<()> {
        let def_location = loc::SourceLocation::from_ast_position(&def.position);

        self.add_new_type(
            def.name.as_str(),
            &def_location,
            GraphQLType::Scalar(ScalarType {
                def_location: def_location.to_owned(),
                description: def.description.to_owned(),
                directives: DirectiveAnnotationBuilder::from_ast(&def.directives),
                literal_parser: None,
                name: def.name.to_string(),
                serializer: None,
                value_parser: None,
            }),
        )
    }

    fn visit_schemablock_definition(
        &mut self,
        schema_def: &ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location = loc::SourceLocation::from_ast_position(&schema_def.position);
        self.schema_def_location = Some(def_location.to_owned());

        let declared_root_types = [
            (GraphQLOperationType::Query, &schema_def.query),
            (GraphQLOperationType::Mutation, &schema_def.mutation),
            (GraphQLOperationType::Subscription, &schema_def.subscription),
        ];
        for (operation, type_name) in declared_root_types {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation {
                def_location: def_location.to_owned(),
                type_name: type_name.to_string(),
            };
            let root_type_slot = match operation {
                GraphQLOperationType::Query => &mut self.query_type,
                GraphQLOperationType::Mutation => &mut self.mutation_type,
                GraphQLOperationType::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = root_type_slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.to_owned(),
                    location2: typedef_loc,
                });
            }
            *root_type_slot = Some(typedef_loc);
        }

        Ok(())
    }

    fn visit_type_definition(&mut self, type_def: &ast::schema::TypeDefinition) -> Result<()> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(enum_def) =>
                self.visit_enum_type_definition(enum_def),
            TypeDefinition::InputObject(inputobj_def) =>
                self.visit_inputobj_type_definition(inputobj_def),
            TypeDefinition::Interface(iface_def) =>
                self.visit_interface_type_definition(iface_def),
            TypeDefinition::Scalar(scalar_def) =>
                self.visit_scalar_type_definition(scalar_def),
            TypeDefinition::Object(obj_def) =>
                self.visit_object_type_definition(obj_def),
            TypeDefinition::Union(union_def) =>
                self.visit_union_type_definition(union_def),
        }
    }

    fn visit_union_type_definition(&mut self, def: &ast::schema::UnionType) -> Result<()> {
        let def_location = loc::SourceLocation::from_ast_position(&def.position);

        let mut members = IndexMap::new();
        for member_name in &def.types {
            if members.insert(member_name.to_string(), def_location.to_owned()).is_some() {
                return Err(SchemaBuildError::DuplicateUnionMember {
                    location: def_location,
                    member_name: member_name.to_string(),
                    type_name: def.name.to_string(),
                });
            }
        }

        self.add_new_type(
            def.name.as_str(),
            &def_location,
            GraphQLType::Union(UnionType {
                def_location: def_location.to_owned(),
                description: def.description.to_owned(),
                directives: DirectiveAnnotationBuilder::from_ast(&def.directives),
                members,
                name: def.name.to_string(),
                type_resolver: None,
            }),
        )
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple directive definitions were found for `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("The `{enum_name}` enum defines the `{value_name}` value more than once")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
        value_def1: loc::SourceLocation,
        value_def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` type defines the `{field_name}` field more than once")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` type implements the `{interface_name}` interface more than once")]
    DuplicateInterfaceImplementation {
        interface_name: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error("The {operation} root operation type was declared more than once")]
    DuplicateOperationDefinition {
        operation: GraphQLOperationType,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple definitions of the `{type_name}` type were found")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` union lists `{member_name}` as a member more than once")]
    DuplicateUnionMember {
        location: loc::SourceLocation,
        member_name: String,
        type_name: String,
    },

    #[error("Directive names must not begin with `__`: `@{directive_name}`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: loc::SourceLocation,
        directive_name: String,
    },

    #[error("Type names must not begin with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "The {operation} root operation type must be an object type, but \
        `{type_name}` is a {type_kind} type"
    )]
    InvalidOperationType {
        operation: GraphQLOperationType,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error("No query root operation type was defined")]
    NoQueryOperationTypeDefined,

    #[error("The built-in `@{directive_name}` directive can not be redefined")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("Type validation errors: {errors:#?}")]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error(
        "The {operation} root operation type was declared as `{}`, but no such \
        type is defined",
        location.type_name,
    )]
    UndefinedOperationType {
        operation: GraphQLOperationType,
        location: NamedTypeDefLocation,
    },
}
