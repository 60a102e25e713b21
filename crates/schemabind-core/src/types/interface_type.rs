use crate::DirectiveAnnotation;
use crate::loc;
use crate::resolvers::TypeResolver;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`](crate::Schema).
#[derive(Clone, Debug)]
pub struct InterfaceType {
    pub(crate) data: ObjectOrInterfaceTypeData,
    pub(crate) type_resolver: Option<TypeResolver>,
}
impl InterfaceType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.data.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.data.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.data.directives
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.data.fields
    }

    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.data.fields.get(field_name)
    }

    pub fn field_mut(&mut self, field_name: &str) -> Option<&mut Field> {
        self.data.fields.get_mut(field_name)
    }

    /// Interfaces may themselves implement other interfaces.
    pub fn interface_names(&self) -> Vec<&str> {
        self.data.interface_names()
    }

    pub fn name(&self) -> &str {
        self.data.name.as_str()
    }

    /// Replaces any previously bound [`TypeResolver`].
    pub fn set_type_resolver(&mut self, type_resolver: TypeResolver) {
        self.type_resolver = Some(type_resolver);
    }

    pub fn type_resolver(&self) -> Option<&TypeResolver> {
        self.type_resolver.as_ref()
    }
}
