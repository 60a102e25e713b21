use crate::bindables::binding_target;
use crate::bindables::BindError;
use crate::bindables::SchemaBindable;
use crate::resolvers::TypeResolver;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use inherent::inherent;

/// Binds a type resolver to a union type.
#[derive(Clone, Debug)]
pub struct UnionTypeBinding {
    type_name: String,
    type_resolver: Option<TypeResolver>,
}
impl UnionTypeBinding {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            type_resolver: None,
        }
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
impl SchemaBindable for UnionTypeBinding {
    pub fn bind_to_schema(&self, schema: &mut Schema) -> Result<(), BindError> {
        let union_type = match binding_target(schema, &self.type_name)? {
            GraphQLType::Union(union_type) => union_type,
            non_union_type => return Err(BindError::InvalidTypeKind {
                type_name: self.type_name.to_string(),
                expected: GraphQLTypeKind::Union,
                actual: non_union_type.kind(),
            }),
        };

        if let Some(type_resolver) = &self.type_resolver {
            union_type.set_type_resolver(type_resolver.to_owned());
        }
        Ok(())
    }
}
