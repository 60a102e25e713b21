use crate::DirectiveAnnotation;
use crate::loc;
use crate::Value;

/// Represents an
/// [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value) defined
/// within a specific [`EnumType`](crate::types::EnumType).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) enum_type_name: String,
    pub(crate) internal_value: Option<Value>,
    pub(crate) name: String,
}
impl EnumValue {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// The name of the [`EnumType`](crate::types::EnumType) to which this
    /// value belongs.
    pub fn enum_type_name(&self) -> &str {
        self.enum_type_name.as_str()
    }

    /// The value resolvers produce and consume in place of this enum value.
    ///
    /// Unless an internal value has been bound, this is
    /// [`Value::Enum`] carrying the value's own name.
    pub fn internal_value(&self) -> Value {
        self.internal_value
            .clone()
            .unwrap_or_else(|| Value::Enum(self.name.to_string()))
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn set_internal_value(&mut self, value: Value) {
        self.internal_value = Some(value);
    }
}
