use crate::loc;
use crate::types::Parameter;
use indexmap::IndexMap;

/// Represents a directive definition: either one of the built-in directives
/// every schema carries, or a custom directive defined in the type
/// definitions.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Directive {
    Custom {
        def_location: loc::SourceLocation,
        description: Option<String>,
        locations: Vec<String>,
        name: String,
        params: IndexMap<String, Parameter>,
        repeatable: bool,
    },
    Deprecated,
    Include,
    Skip,
    SpecifiedBy,
}
impl Directive {
    pub(crate) const BUILTIN_NAMES: [&'static str; 4] = [
        "deprecated",
        "include",
        "skip",
        "specifiedBy",
    ];

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom { .. })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Custom { name, .. } => name.as_str(),
            Self::Deprecated => "deprecated",
            Self::Include => "include",
            Self::Skip => "skip",
            Self::SpecifiedBy => "specifiedBy",
        }
    }
}
