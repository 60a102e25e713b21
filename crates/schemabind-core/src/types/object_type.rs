use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`](crate::Schema).
#[derive(Clone, Debug)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);
impl ObjectType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`ObjectType`] was defined within the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.0.def_location
    }

    /// The description of this [`ObjectType`] as defined in the schema
    /// (e.g. in a `"""`-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`ObjectType`].
    ///
    /// Annotations written on the type definition come first, followed by
    /// annotations from each type extension in the order the extensions
    /// appear in the document.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.0.directives
    }

    /// The fields of this [`ObjectType`], keyed by name.
    ///
    /// Ordering matches the type definition, with fields added by type
    /// extensions appended in document order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.0.fields
    }

    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.0.fields.get(field_name)
    }

    pub fn field_mut(&mut self, field_name: &str) -> Option<&mut Field> {
        self.0.fields.get_mut(field_name)
    }

    pub(crate) fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.0.fields.values_mut()
    }

    /// The names of the interfaces this [`ObjectType`] implements.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.0.interfaces.contains_key(interface_name)
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }
}
