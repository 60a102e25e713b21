use crate::bindables::binding_target;
use crate::bindables::BindError;
use crate::bindables::SchemaBindable;
use crate::resolvers::Resolver;
use crate::resolvers::TypeResolver;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use indexmap::IndexMap;
use inherent::inherent;

/// Binds a type resolver and field resolvers to an interface type.
///
/// Field resolvers are also given to the matching fields of every object
/// type implementing the interface, unless such a field already has a
/// resolver of its own. Interface types that implement the interface are
/// left alone; bind them with their own [`InterfaceTypeBinding`].
#[derive(Clone, Debug)]
pub struct InterfaceTypeBinding {
    resolvers: IndexMap<String, Resolver>,
    type_name: String,
    type_resolver: Option<TypeResolver>,
}
impl InterfaceTypeBinding {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            resolvers: IndexMap::new(),
            type_name: type_name.into(),
            type_resolver: None,
        }
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

    pub fn set_type_resolver(&mut self, type_resolver: TypeResolver) -> &mut Self {
        self.type_resolver = Some(type_resolver);
        self
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn type_resolver(mut self, type_resolver: TypeResolver) -> Self {
        self.set_type_resolver(type_resolver);
        self
    }
}

#[inherent]
impl SchemaBindable for InterfaceTypeBinding {
    pub fn bind_to_schema(&self, schema: &mut Schema) -> Result<(), BindError> {
        let iface_type = match binding_target(schema, &self.type_name)? {
            GraphQLType::Interface(iface_type) => iface_type,
            non_iface_type => return Err(BindError::InvalidTypeKind {
                type_name: self.type_name.to_string(),
                expected: GraphQLTypeKind::Interface,
                actual: non_iface_type.kind(),
            }),
        };

        if let Some(field_name) = self.resolvers
            .keys()
            .find(|field_name| iface_type.field(field_name).is_none()) {
            return Err(BindError::UndefinedField {
                type_name: self.type_name.to_string(),
                field_name: field_name.to_string(),
            });
        }

        if let Some(type_resolver) = &self.type_resolver {
            iface_type.set_type_resolver(type_resolver.to_owned());
        }
        for (field_name, resolver) in &self.resolvers {
            if let Some(field) = iface_type.field_mut(field_name) {
                field.set_resolver(resolver.to_owned());
            }
        }

        let implementors = schema.types.values_mut().filter_map(|type_| match type_ {
            GraphQLType::Object(obj_type)
                if obj_type.implements_interface(&self.type_name) => Some(obj_type),
            _ => None,
        });
        for obj_type in implementors {
            let obj_type_name = obj_type.name().to_string();
            for (field_name, resolver) in &self.resolvers {
                if let Some(field) = obj_type.field_mut(field_name)
                    && field.resolver().is_none() {
                    log::trace!(
                        "Binding `{}.{field_name}` resolver to `{}.{field_name}`.",
                        self.type_name,
                        obj_type_name,
                    );
                    field.set_resolver(resolver.to_owned());
                }
            }
        }

        Ok(())
    }
}
