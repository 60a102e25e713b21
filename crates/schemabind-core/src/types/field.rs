use crate::DirectiveAnnotation;
use crate::loc;
use crate::resolvers;
use crate::resolvers::FieldError;
use crate::resolvers::ResolveInfo;
use crate::resolvers::Resolver;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType), along with the
/// [`Resolver`] bound to it (if any).
#[derive(Clone, Debug)]
pub struct Field {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) parent_type_name: String,
    pub(crate) resolver: Option<Resolver>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`Field`] was defined within the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The description of this [`Field`] as defined in the schema
    /// (e.g. in a `"""`-string immediately before the field definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`Field`], in the
    /// order they were written.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The parameters defined for this [`Field`], keyed by name and ordered as
    /// written.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    /// The name of the object or interface type this [`Field`] is defined on.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    /// Invokes this field's bound [`Resolver`], or
    /// [`default_field_resolver`](resolvers::default_field_resolver) if no
    /// resolver has been bound.
    pub fn resolve(
        &self,
        parent: &Value,
        args: &IndexMap<String, Value>,
    ) -> Result<Value, FieldError> {
        let info = ResolveInfo {
            args,
            field_name: self.name.as_str(),
            parent,
            parent_type_name: self.parent_type_name.as_str(),
        };
        match &self.resolver {
            Some(resolver) => resolver.call(&info),
            None => resolvers::default_field_resolver(&info),
        }
    }

    pub fn resolver(&self) -> Option<&Resolver> {
        self.resolver.as_ref()
    }

    /// Replaces any previously bound [`Resolver`].
    pub fn set_resolver(&mut self, resolver: Resolver) {
        self.resolver = Some(resolver);
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
