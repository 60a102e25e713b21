use crate::bindables::binding_target;
use crate::bindables::BindError;
use crate::bindables::SchemaBindable;
use crate::resolvers::ScalarFn;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use inherent::inherent;

/// Binds serialization and parsing callbacks to a custom scalar type.
///
/// When a value parser is given without a literal parser, the value parser
/// is also used to parse literals.
#[derive(Clone, Debug)]
pub struct ScalarTypeBinding {
    literal_parser: Option<ScalarFn>,
    serializer: Option<ScalarFn>,
    type_name: String,
    value_parser: Option<ScalarFn>,
}
impl ScalarTypeBinding {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            literal_parser: None,
            serializer: None,
            type_name: type_name.into(),
            value_parser: None,
        }
    }

    pub fn literal_parser(mut self, literal_parser: ScalarFn) -> Self {
        self.literal_parser = Some(literal_parser);
        self
    }

    pub fn serializer(mut self, serializer: ScalarFn) -> Self {
        self.serializer = Some(serializer);
        self
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn value_parser(mut self, value_parser: ScalarFn) -> Self {
        self.value_parser = Some(value_parser);
        self
    }
}

#[inherent]
impl SchemaBindable for ScalarTypeBinding {
    pub fn bind_to_schema(&self, schema: &mut Schema) -> Result<(), BindError> {
        let scalar_type = match binding_target(schema, &self.type_name)? {
            GraphQLType::Scalar(scalar_type) => scalar_type,
            non_scalar_type => return Err(BindError::InvalidTypeKind {
                type_name: self.type_name.to_string(),
                expected: GraphQLTypeKind::Scalar,
                actual: non_scalar_type.kind(),
            }),
        };

        if let Some(serializer) = &self.serializer {
            scalar_type.set_serializer(serializer.to_owned());
        }
        if let Some(value_parser) = &self.value_parser {
            scalar_type.set_value_parser(value_parser.to_owned());
        }
        if let Some(literal_parser) = self.literal_parser.as_ref().or(self.value_parser.as_ref()) {
            scalar_type.set_literal_parser(literal_parser.to_owned());
        }
        Ok(())
    }
}
