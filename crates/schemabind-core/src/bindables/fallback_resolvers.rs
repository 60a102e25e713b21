use crate::bindables::BindError;
use crate::bindables::SchemaBindable;
use crate::resolvers::Resolver;
use crate::schema::Schema;
use crate::types::GraphQLType;
use heck::ToSnakeCase;
use inherent::inherent;

/// Gives every object-type field that has no resolver a property resolver.
///
/// By default the property read matches the field name;
/// [`FallbackResolvers::snake_case`] reads the snake_case form of it
/// instead.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FallbackResolvers {
    snake_case: bool,
}
impl FallbackResolvers {
    pub fn snake_case() -> Self {
        Self {
            snake_case: true,
        }
    }
}

#[inherent]
impl SchemaBindable for FallbackResolvers {
    pub fn bind_to_schema(&self, schema: &mut Schema) -> Result<(), BindError> {
        for type_ in schema.types.values_mut() {
            let GraphQLType::Object(obj_type) = type_ else {
                continue;
            };
            for field in obj_type.fields_mut() {
                if field.resolver().is_some() {
                    continue;
                }
                let property_name = if self.snake_case {
                    field.name().to_snake_case()
                } else {
                    field.name().to_string()
                };
                field.set_resolver(Resolver::property(property_name));
            }
        }
        Ok(())
    }
}
