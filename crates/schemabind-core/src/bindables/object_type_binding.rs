use crate::bindables::binding_target;
use crate::bindables::BindError;
use crate::bindables::SchemaBindable;
use crate::resolvers::Resolver;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use indexmap::IndexMap;
use inherent::inherent;

/// Binds field resolvers to the fields of an object type.
///
/// ```
/// use schemabind_core::bindables::ObjectTypeBinding;
/// use schemabind_core::resolvers::Resolver;
///
/// let query = ObjectTypeBinding::query()
///     .field("hello", Resolver::new(|_| Ok("Hello!".into())));
/// assert_eq!(query.type_name(), "Query");
/// ```
#[derive(Clone, Debug)]
pub struct ObjectTypeBinding {
    resolvers: IndexMap<String, Resolver>,
    type_name: String,
}
impl ObjectTypeBinding {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            resolvers: IndexMap::new(),
            type_name: type_name.into(),
        }
    }

    /// A binding for the conventionally-named `Query` type.
    pub fn query() -> Self {
        Self::new("Query")
    }

    /// A binding for the conventionally-named `Mutation` type.
    pub fn mutation() -> Self {
        Self::new("Mutation")
    }

    pub fn field(mut self, field_name: impl Into<String>, resolver: Resolver) -> Self {
        self.set_field(field_name, resolver);
        self
    }

    pub fn set_field(
        &mut self,
        field_name: impl Into<String>,
        resolver: Resolver,
    ) -> &mut Self {
        self.resolvers.insert(field_name.into(), resolver);
        self
    }

    /// Resolves `field_name` by reading `property_name` off of the parent
    /// value.
    pub fn set_alias(
        &mut self,
        field_name: impl Into<String>,
        property_name: impl Into<String>,
    ) -> &mut Self {
        self.set_field(field_name, Resolver::property(property_name))
    }

    pub fn resolvers(&self) -> &IndexMap<String, Resolver> {
        &self.resolvers
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}

#[inherent]
impl SchemaBindable for ObjectTypeBinding {
    pub fn bind_to_schema(&self, schema: &mut Schema) -> Result<(), BindError> {
        let obj_type = match binding_target(schema, &self.type_name)? {
            GraphQLType::Object(obj_type) => obj_type,
            non_obj_type => return Err(BindError::InvalidTypeKind {
                type_name: self.type_name.to_string(),
                expected: GraphQLTypeKind::Object,
                actual: non_obj_type.kind(),
            }),
        };

        if let Some(field_name) = self.resolvers
            .keys()
            .find(|field_name| obj_type.field(field_name).is_none()) {
            return Err(BindError::UndefinedField {
                type_name: self.type_name.to_string(),
                field_name: field_name.to_string(),
            });
        }

        for (field_name, resolver) in &self.resolvers {
            if let Some(field) = obj_type.field_mut(field_name) {
                log::trace!("Binding resolver to `{}.{field_name}`.", self.type_name);
                field.set_resolver(resolver.to_owned());
            }
        }

        Ok(())
    }
}
