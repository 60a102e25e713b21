use crate::DirectiveAnnotation;
use crate::loc;
use crate::resolvers::FieldError;
use crate::resolvers::ScalarFn;
use crate::Value;

/// Represents a custom
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) defined
/// within some [`Schema`](crate::Schema), along with the serialization and
/// parsing callbacks bound to it.
///
/// Each callback defaults to passing the value through unchanged.
#[derive(Clone, Debug)]
pub struct ScalarType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) literal_parser: Option<ScalarFn>,
    pub(crate) name: String,
    pub(crate) serializer: Option<ScalarFn>,
    pub(crate) value_parser: Option<ScalarFn>,
}
impl ScalarType {
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

    /// Parses a literal written inline in a document.
    pub fn parse_literal(&self, value: &Value) -> Result<Value, FieldError> {
        apply_or_identity(self.literal_parser.as_ref(), value)
    }

    /// Parses a value received as a variable.
    pub fn parse_value(&self, value: &Value) -> Result<Value, FieldError> {
        apply_or_identity(self.value_parser.as_ref(), value)
    }

    pub fn serialize(&self, value: &Value) -> Result<Value, FieldError> {
        apply_or_identity(self.serializer.as_ref(), value)
    }

    pub fn set_literal_parser(&mut self, literal_parser: ScalarFn) {
        self.literal_parser = Some(literal_parser);
    }

    pub fn set_serializer(&mut self, serializer: ScalarFn) {
        self.serializer = Some(serializer);
    }

    pub fn set_value_parser(&mut self, value_parser: ScalarFn) {
        self.value_parser = Some(value_parser);
    }
}

fn apply_or_identity(
    scalar_fn: Option<&ScalarFn>,
    value: &Value,
) -> Result<Value, FieldError> {
    match scalar_fn {
        Some(scalar_fn) => scalar_fn.call(value),
        None => Ok(value.clone()),
    }
}
