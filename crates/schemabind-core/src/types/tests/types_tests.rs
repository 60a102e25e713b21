use crate::resolvers::FieldError;
use crate::resolvers::Resolver;
use crate::resolvers::ScalarFn;
use crate::schema::SchemaBuilder;
use crate::type_defs::parse_type_defs;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::Value;
use indexmap::IndexMap;

const TYPE_DEFS: &str = concat!(
    "type Query { userName: String, color: Color, at: DateTime }\n",
    "enum Color { RED GREEN }\n",
    "scalar DateTime",
);

fn build() -> crate::Schema {
    let document = parse_type_defs(TYPE_DEFS).expect("type definitions should parse");
    SchemaBuilder::build_ast_schema(&document).expect("schema should build")
}

#[test]
fn unbound_field_uses_default_resolver() -> Result<(), FieldError> {
    let schema = build();
    let field = schema.get_field("Query", "userName").unwrap();

    let parent = Value::Object(IndexMap::from([
        ("userName".to_string(), Value::from("ada")),
    ]));
    assert_eq!(field.resolve(&parent, &IndexMap::new())?, Value::from("ada"));
    assert_eq!(field.resolve(&Value::Null, &IndexMap::new())?, Value::Null);

    Ok(())
}

#[test]
fn bound_field_uses_its_resolver() -> Result<(), FieldError> {
    let mut schema = build();
    let field = schema.get_field_mut("Query", "userName").unwrap();
    field.set_resolver(Resolver::new(|info| {
        Ok(Value::from(format!("{}.{}", info.parent_type_name, info.field_name)))
    }));

    let field = schema.get_field("Query", "userName").unwrap();
    assert_eq!(field.resolve(&Value::Null, &IndexMap::new())?, Value::from("Query.userName"));

    Ok(())
}

#[test]
fn enum_values_default_to_their_names() {
    let schema = build();
    let enum_type = schema.get_type("Color").and_then(|t| t.as_enum()).unwrap();

    assert_eq!(
        enum_type.values().get("RED").map(|v| v.internal_value()),
        Some(Value::Enum("RED".to_string())),
    );
    assert_eq!(enum_type.value_name_for(&Value::Enum("GREEN".to_string())), Some("GREEN"));
}

#[test]
fn scalar_callbacks_default_to_identity() -> Result<(), FieldError> {
    let mut schema = build();
    let Some(GraphQLType::Scalar(scalar_type)) = schema.get_type_mut("DateTime") else {
        panic!("expected a `DateTime` scalar");
    };

    let value = Value::from("2024-01-01");
    assert_eq!(scalar_type.serialize(&value)?, value);
    assert_eq!(scalar_type.parse_value(&value)?, value);

    scalar_type.set_serializer(ScalarFn::new(|_| Err(FieldError::new("nope"))));
    assert_eq!(scalar_type.serialize(&value), Err(FieldError::new("nope")));

    Ok(())
}

#[test]
fn type_kinds() {
    let schema = build();
    assert_eq!(schema.get_type("Boolean").map(|t| t.kind()), Some(GraphQLTypeKind::Bool));
    assert_eq!(schema.get_type("Color").map(|t| t.kind()), Some(GraphQLTypeKind::Enum));
    assert_eq!(schema.get_type("Query").map(|t| t.kind()), Some(GraphQLTypeKind::Object));
    assert!(schema.get_type("Color").is_some_and(|t| t.is_input_type() && t.is_output_type()));
    assert!(schema.get_type("Query").is_some_and(|t| !t.is_input_type()));
}
