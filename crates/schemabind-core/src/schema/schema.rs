use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// The schema graph: every type defined by the type definitions (plus the
/// built-in scalars), the directive definitions, and the root operation
/// types, together with whatever behaviour has been bound to them.
///
/// Every type referenced from within a [`Schema`] is guaranteed to be
/// defined within that same [`Schema`].
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, Directive>,
    pub(crate) mutation_type_name: Option<String>,
    pub(crate) query_type_name: String,
    pub(crate) subscription_type_name: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn directive_defs(&self) -> &IndexMap<String, Directive> {
        &self.directive_defs
    }

    /// Looks up a [`Field`] on the object or interface type named
    /// `type_name`.
    pub fn get_field(&self, type_name: &str, field_name: &str) -> Option<&Field> {
        match self.types.get(type_name)? {
            GraphQLType::Object(obj_type) => obj_type.field(field_name),
            GraphQLType::Interface(iface_type) => iface_type.field(field_name),
            _ => None,
        }
    }

    pub fn get_field_mut(
        &mut self,
        type_name: &str,
        field_name: &str,
    ) -> Option<&mut Field> {
        match self.types.get_mut(type_name)? {
            GraphQLType::Object(obj_type) => obj_type.field_mut(field_name),
            GraphQLType::Interface(iface_type) => iface_type.field_mut(field_name),
            _ => None,
        }
    }

    pub fn get_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Bindables may replace the returned type outright, so root types are
    /// looked up again (and kind-checked) on every access.
    pub fn get_type_mut(&mut self, type_name: &str) -> Option<&mut GraphQLType> {
        self.types.get_mut(type_name)
    }

    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type_name
            .as_deref()
            .and_then(|type_name| self.root_object_type(type_name))
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type_name.as_deref()
    }

    /// `None` only when a bindable has replaced the query root with a
    /// non-object type.
    pub fn query_type(&self) -> Option<&ObjectType> {
        self.root_object_type(self.query_type_name.as_str())
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type_name.as_str()
    }

    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.subscription_type_name
            .as_deref()
            .and_then(|type_name| self.root_object_type(type_name))
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type_name.as_deref()
    }

    /// All types in this [`Schema`], keyed by name. The built-in scalars come
    /// first, followed by defined types in document order.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    fn root_object_type(&self, type_name: &str) -> Option<&ObjectType> {
        self.types.get(type_name).and_then(GraphQLType::as_object)
    }
}
