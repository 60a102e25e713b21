use crate::bindables::binding_target;
use crate::bindables::BindError;
use crate::bindables::SchemaBindable;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::Value;
use indexmap::IndexMap;
use inherent::inherent;

/// Maps the values of an enum type to internal [`Value`]s.
///
/// Enum values left out of the map keep their default internal value (the
/// value's own name).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeBinding {
    type_name: String,
    values: IndexMap<String, Value>,
}
impl EnumTypeBinding {
    pub fn new<I, K, V>(type_name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            type_name: type_name.into(),
            values: values.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }
}

#[inherent]
impl SchemaBindable for EnumTypeBinding {
    pub fn bind_to_schema(&self, schema: &mut Schema) -> Result<(), BindError> {
        let enum_type = match binding_target(schema, &self.type_name)? {
            GraphQLType::Enum(enum_type) => enum_type,
            non_enum_type => return Err(BindError::InvalidTypeKind {
                type_name: self.type_name.to_string(),
                expected: GraphQLTypeKind::Enum,
                actual: non_enum_type.kind(),
            }),
        };

        if let Some(value_name) = self.values
            .keys()
            .find(|value_name| !enum_type.values().contains_key(value_name.as_str())) {
            return Err(BindError::UndefinedEnumValue {
                enum_name: self.type_name.to_string(),
                value_name: value_name.to_string(),
            });
        }

        for (value_name, internal_value) in &self.values {
            if let Some(enum_value) = enum_type.value_mut(value_name) {
                enum_value.set_internal_value(internal_value.to_owned());
            }
        }
        Ok(())
    }
}
