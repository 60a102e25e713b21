use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::EnumValue;
use crate::Value;
use indexmap::IndexMap;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Maps an internal value back to the name of the enum value it was bound
    /// to (e.g. when serializing a resolver's result).
    pub fn value_name_for(&self, internal_value: &Value) -> Option<&str> {
        self.values
            .values()
            .find(|enum_value| &enum_value.internal_value() == internal_value)
            .map(|enum_value| enum_value.name())
    }

    /// The values of this [`EnumType`], keyed by name. Values added by a type
    /// extension follow those of the original definition.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    pub fn value_mut(&mut self, value_name: &str) -> Option<&mut EnumValue> {
        self.values.get_mut(value_name)
    }
}
