use crate::loc;
use crate::schema::GraphQLOperationType;
use crate::schema::NamedTypeDefLocation;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;
use super::parse;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn pos(line: usize, col: usize) -> loc::SourceLocation {
    loc::SourceLocation::Schema(loc::FilePosition { col, line })
}

mod build_operations {
    use super::*;

    #[test]
    fn build_empty_query_type() -> Result<()> {
        let schema = SchemaBuilder::build_ast_schema(&parse("type Query"))?;

        assert_eq!(schema.directive_defs().len(), 4);
        assert_eq!(schema.types().len(), 6);
        assert_eq!(schema.query_type_name(), "Query");
        assert!(schema.mutation_type().is_none());
        assert!(schema.subscription_type().is_none());

        let query_type = schema.query_type().unwrap();
        assert_eq!(query_type.def_location(), &pos(1, 1));
        assert!(query_type.directives().is_empty());
        assert!(query_type.fields().is_empty());

        Ok(())
    }

    #[test]
    fn build_all_operation_types_by_convention() -> Result<()> {
        let schema = SchemaBuilder::build_ast_schema(&parse(concat!(
            "type Mutation\n",
            "type Query\n",
            "type Subscription",
        )))?;

        assert_eq!(schema.types().len(), 8);
        assert_eq!(schema.query_type_name(), "Query");
        assert_eq!(schema.mutation_type_name(), Some("Mutation"));
        assert_eq!(schema.subscription_type_name(), Some("Subscription"));
        assert_eq!(schema.mutation_type().map(|t| t.def_location()), Some(&pos(1, 1)));
        assert_eq!(schema.query_type().unwrap().def_location(), &pos(2, 1));

        Ok(())
    }

    #[test]
    fn schema_declaration_overrides_naming_convention() -> Result<()> {
        let schema = SchemaBuilder::build_ast_schema(&parse(concat!(
            "schema { query: Root }\n",
            "type Root { a: Int }\n",
            "type Query { b: Int }\n",
            "type Mutation { c: Int }",
        )))?;

        assert_eq!(schema.query_type_name(), "Root");
        assert!(schema.query_type().unwrap().field("a").is_some());
        assert!(schema.mutation_type_name().is_none());

        Ok(())
    }

    #[test]
    fn missing_query_type_is_an_error() {
        let result = SchemaBuilder::build_ast_schema(&parse("type Foo { a: Int }"));
        assert_eq!(result.unwrap_err(), SchemaBuildError::NoQueryOperationTypeDefined);
    }

    #[test]
    fn schema_declaration_without_query_is_an_error() {
        let result = SchemaBuilder::build_ast_schema(&parse(concat!(
            "schema { mutation: Query }\n",
            "type Query { a: Int }",
        )));
        assert_eq!(result.unwrap_err(), SchemaBuildError::NoQueryOperationTypeDefined);
    }

    #[test]
    fn undefined_declared_operation_type_is_an_error() {
        let result = SchemaBuilder::build_ast_schema(&parse(concat!(
            "schema { query: Root }\n",
            "type Query { a: Int }",
        )));
        assert_eq!(result.unwrap_err(), SchemaBuildError::UndefinedOperationType {
            operation: GraphQLOperationType::Query,
            location: NamedTypeDefLocation {
                def_location: pos(1, 1),
                type_name: "Root".to_string(),
            },
        });
    }

    #[test]
    fn non_object_operation_type_is_an_error() {
        let result = SchemaBuilder::build_ast_schema(&parse(concat!(
            "type Query { a: Int }\n",
            "enum Mutation { A }",
        )));
        assert_eq!(result.unwrap_err(), SchemaBuildError::InvalidOperationType {
            operation: GraphQLOperationType::Mutation,
            type_kind: GraphQLTypeKind::Enum,
            type_name: "Mutation".to_string(),
        });
    }
}

mod build_types {
    use super::*;

    #[test]
    fn builtin_scalars_come_first() -> Result<()> {
        let schema = SchemaBuilder::build_ast_schema(&parse("type Query { a: Int }"))?;

        let type_names: Vec<&str> = schema.types().keys().map(|k| k.as_str()).collect();
        assert_eq!(type_names, vec!["Boolean", "Float", "ID", "Int", "String", "Query"]);
        assert!(matches!(schema.get_type("Int"), Some(GraphQLType::Int)));
        assert_eq!(schema.get_type("Int").map(|t| t.def_location()), Some(&loc::SourceLocation::GraphQLBuiltIn));

        Ok(())
    }

    #[test]
    fn fields_keep_definition_order() -> Result<()> {
        let schema = SchemaBuilder::build_ast_schema(&parse(concat!(
            "type Query {\n",
            "  zeta: String\n",
            "  alpha(first: Int = 10, after: String): [Int!]!\n",
            "}",
        )))?;

        let query_type = schema.query_type().unwrap();
        let field_names: Vec<&str> = query_type.fields().keys().map(|k| k.as_str()).collect();
        assert_eq!(field_names, vec!["zeta", "alpha"]);

        let alpha = query_type.field("alpha").unwrap();
        assert_eq!(alpha.def_location(), &pos(3, 3));
        assert_eq!(alpha.parent_type_name(), "Query");
        assert_eq!(alpha.type_annotation().to_graphql_string(), "[Int!]!");
        assert!(alpha.resolver().is_none());

        let param_names: Vec<&str> = alpha.parameters().keys().map(|k| k.as_str()).collect();
        assert_eq!(param_names, vec!["first", "after"]);
        assert_eq!(
            alpha.parameters().get("first").and_then(|p| p.default_value()),
            Some(&crate::Value::Int(10)),
        );
        assert_eq!(
            alpha.parameters().get("after").map(|p| p.type_annotation()),
            Some(&TypeAnnotation::Named {
                nullable: true,
                type_name: "String".to_string(),
            }),
        );

        Ok(())
    }

    #[test]
    fn builds_every_type_kind() -> Result<()> {
        let schema = SchemaBuilder::build_ast_schema(&parse(concat!(
            "type Query { node: Node, search: SearchResult, color: Color, dt: DateTime }\n",
            "interface Node { id: ID! }\n",
            "type User implements Node { id: ID! }\n",
            "union SearchResult = User\n",
            "enum Color { RED GREEN }\n",
            "scalar DateTime\n",
            "input Filter { color: Color = RED }",
        )))?;

        assert!(matches!(schema.get_type("Node"), Some(GraphQLType::Interface(_))));
        assert!(matches!(schema.get_type("SearchResult"), Some(GraphQLType::Union(_))));
        assert!(matches!(schema.get_type("Color"), Some(GraphQLType::Enum(_))));
        assert!(matches!(schema.get_type("DateTime"), Some(GraphQLType::Scalar(_))));
        assert!(matches!(schema.get_type("Filter"), Some(GraphQLType::InputObject(_))));

        let user_type = schema.get_type("User").and_then(|t| t.as_object()).unwrap();
        assert_eq!(user_type.interface_names(), vec!["Node"]);

        let union_type = schema.get_type("SearchResult").and_then(|t| t.as_union()).unwrap();
        assert_eq!(union_type.member_type_names(), vec!["User"]);

        let enum_type = schema.get_type("Color").and_then(|t| t.as_enum()).unwrap();
        let value_names: Vec<&str> = enum_type.values().keys().map(|k| k.as_str()).collect();
        assert_eq!(value_names, vec!["RED", "GREEN"]);

        let filter_type = schema.get_type("Filter").and_then(|t| t.as_input_object()).unwrap();
        assert_eq!(
            filter_type.fields().get("color").and_then(|f| f.default_value()),
            Some(&crate::Value::Enum("RED".to_string())),
        );

        Ok(())
    }

    #[test]
    fn type_extensions_are_not_applied() -> Result<()> {
        let schema = SchemaBuilder::build_ast_schema(&parse(concat!(
            "type Query { a: Int }\n",
            "extend type Query { b: Int }\n",
            "extend type Missing { c: Int }",
        )))?;

        assert!(schema.query_type().unwrap().field("a").is_some());
        assert!(schema.query_type().unwrap().field("b").is_none());
        assert!(schema.get_type("Missing").is_none());

        Ok(())
    }

    #[test]
    fn duplicate_type_definition_is_an_error() {
        let result = SchemaBuilder::build_ast_schema(&parse(concat!(
            "type Query { a: Int }\n",
            "enum Query { A }",
        )));
        assert_eq!(result.unwrap_err(), SchemaBuildError::DuplicateTypeDefinition {
            type_name: "Query".to_string(),
            def1: pos(1, 1),
            def2: pos(2, 1),
        });
    }

    #[test]
    fn redefinition_of_builtin_scalar_is_an_error() {
        let result = SchemaBuilder::build_ast_schema(&parse(concat!(
            "type Query { a: Int }\n",
            "scalar String",
        )));
        assert_eq!(result.unwrap_err(), SchemaBuildError::DuplicateTypeDefinition {
            type_name: "String".to_string(),
            def1: loc::SourceLocation::GraphQLBuiltIn,
            def2: pos(2, 1),
        });
    }

    #[test]
    fn duplicate_field_is_an_error() {
        let result = SchemaBuilder::build_ast_schema(&parse(concat!(
            "type Query {\n",
            "  a: Int\n",
            "  a: String\n",
            "}",
        )));
        assert_eq!(result.unwrap_err(), SchemaBuildError::DuplicateFieldNameDefinition {
            type_name: "Query".to_string(),
            field_name: "a".to_string(),
            field_def1: pos(2, 3),
            field_def2: pos(3, 3),
        });
    }

    #[test]
    fn duplicate_enum_value_is_an_error() {
        let result = SchemaBuilder::build_ast_schema(&parse(concat!(
            "type Query { a: Int }\n",
            "enum Color { RED RED }",
        )));
        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateEnumValueDefinition { enum_name, value_name, .. })
                if enum_name == "Color" && value_name == "RED"
        ));
    }

    #[test]
    fn duplicate_union_member_is_an_error() {
        let result = SchemaBuilder::build_ast_schema(&parse(concat!(
            "type Query { a: Int }\n",
            "union U = Query | Query",
        )));
        assert_eq!(result.unwrap_err(), SchemaBuildError::DuplicateUnionMember {
            location: pos(2, 1),
            member_name: "Query".to_string(),
            type_name: "U".to_string(),
        });
    }

    #[test]
    fn dunder_prefixed_type_name_is_an_error() {
        let result = SchemaBuilder::build_ast_schema(&parse(concat!(
            "type Query { a: Int }\n",
            "type __Secret { a: Int }",
        )));
        assert_eq!(result.unwrap_err(), SchemaBuildError::InvalidDunderPrefixedTypeName {
            def_location: pos(2, 1),
            type_name: "__Secret".to_string(),
        });
    }

    #[test]
    fn undefined_field_type_is_an_error() {
        let result = SchemaBuilder::build_ast_schema(&parse("type Query { a: Missing }"));
        assert_eq!(result.unwrap_err(), SchemaBuildError::TypeValidationErrors {
            errors: vec![TypeValidationError::UndefinedTypeName {
                ref_location: pos(1, 14),
                undefined_type_name: "Missing".to_string(),
            }],
        });
    }

    #[test]
    fn base_build_defers_interface_fields() -> Result<()> {
        let type_defs = "interface Named { name: String }\ntype Query implements Named { id: ID }";

        assert!(matches!(
            SchemaBuilder::build_ast_schema(&parse(type_defs)),
            Err(SchemaBuildError::TypeValidationErrors { .. }),
        ));

        let schema = SchemaBuilder::new().load_document(&parse(type_defs))?.build_base()?;
        assert_eq!(schema.query_type().unwrap().interface_names(), vec!["Named"]);
        Ok(())
    }

    #[test]
    fn base_build_still_rejects_undefined_types() {
        let result = SchemaBuilder::new()
            .load_document(&parse("type Query implements Missing { id: ID }"))
            .and_then(|builder| builder.build_base());
        assert!(matches!(
            result,
            Err(SchemaBuildError::TypeValidationErrors { errors }) if matches!(
                errors.as_slice(),
                [TypeValidationError::ImplementsUndefinedInterface { undefined_interface_name, .. }]
                    if undefined_interface_name == "Missing"
            )
        ));
    }
}

mod build_directives {
    use super::*;

    #[test]
    fn custom_directive_definition() -> Result<()> {
        let schema = SchemaBuilder::build_ast_schema(&parse(concat!(
            "directive @auth(role: String = \"admin\") repeatable on FIELD_DEFINITION | OBJECT\n",
            "type Query @auth { a: Int @auth(role: \"user\") }",
        )))?;

        assert_eq!(schema.directive_defs().len(), 5);
        let Some(Directive::Custom { locations, params, repeatable, .. }) =
            schema.directive_defs().get("auth") else {
            panic!("expected a custom `@auth` directive definition");
        };
        assert_eq!(locations, &vec!["FIELD_DEFINITION".to_string(), "OBJECT".to_string()]);
        assert!(*repeatable);
        assert_eq!(
            params.get("role").and_then(|p| p.default_value()),
            Some(&crate::Value::String("admin".to_string())),
        );

        let query_type = schema.query_type().unwrap();
        assert_eq!(query_type.directives().len(), 1);
        assert_eq!(query_type.directives()[0].directive_name(), "auth");

        let field = query_type.field("a").unwrap();
        assert_eq!(
            field.directives()[0].arguments().get("role"),
            Some(&crate::Value::String("user".to_string())),
        );

        Ok(())
    }

    #[test]
    fn redefinition_of_builtin_directive_is_an_error() {
        let result = SchemaBuilder::build_ast_schema(&parse(concat!(
            "directive @skip on FIELD\n",
            "type Query { a: Int }",
        )));
        assert_eq!(result.unwrap_err(), SchemaBuildError::RedefinitionOfBuiltinDirective {
            directive_name: "skip".to_string(),
            location: pos(1, 1),
        });
    }

    #[test]
    fn duplicate_directive_definition_is_an_error() {
        let result = SchemaBuilder::build_ast_schema(&parse(concat!(
            "directive @a on FIELD\n",
            "directive @a on OBJECT\n",
            "type Query { a: Int }",
        )));
        assert_eq!(result.unwrap_err(), SchemaBuildError::DuplicateDirectiveDefinition {
            directive_name: "a".to_string(),
            location1: pos(1, 1),
            location2: pos(2, 1),
        });
    }
}
