use crate::DirectiveAnnotation;
use crate::loc;
use crate::resolvers::TypeResolver;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::Schema).
#[derive(Clone, Debug)]
pub struct UnionType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) members: IndexMap<String, loc::SourceLocation>,
    pub(crate) name: String,
    pub(crate) type_resolver: Option<TypeResolver>,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// An ordered list of the names of each type defined as a member of this
    /// union.
    ///
    /// Members added from type extensions follow the members listed on the
    /// union definition, in the order they were specified on each extension.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn set_type_resolver(&mut self, type_resolver: TypeResolver) {
        self.type_resolver = Some(type_resolver);
    }

    pub fn type_resolver(&self) -> Option<&TypeResolver> {
        self.type_resolver.as_ref()
    }
}
