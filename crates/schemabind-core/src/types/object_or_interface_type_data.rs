use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

/// The definition data shared by [`ObjectType`](crate::types::ObjectType)
/// and [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: IndexMap<String, loc::SourceLocation>,
    pub(crate) name: String,
}
impl ObjectOrInterfaceTypeData {
    pub(crate) fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .keys()
            .map(|iface_name| iface_name.as_str())
            .collect()
    }
}
