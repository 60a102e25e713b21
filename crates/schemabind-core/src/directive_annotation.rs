use crate::ast;
use crate::loc;
use crate::Value;
use indexmap::IndexMap;

/// Represents a
/// [directive annotation](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// placed on some type, field, enum value, or input field within a
/// [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) directive_name: String,
    pub(crate) ref_location: loc::SourceLocation,
}
impl DirectiveAnnotation {
    /// A map from ParameterName -> [`Value`] for all arguments passed to this
    /// [`DirectiveAnnotation`], in the order they were written.
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    /// The name of the [`Directive`](crate::types::Directive) this annotation
    /// refers to.
    pub fn directive_name(&self) -> &str {
        self.directive_name.as_str()
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}

#[derive(Debug)]
pub struct DirectiveAnnotationBuilder;
impl DirectiveAnnotationBuilder {
    pub fn from_ast(
        directives: &[ast::operation::Directive],
    ) -> Vec<DirectiveAnnotation> {
        directives.iter().map(|ast_annot| {
            let mut arguments = IndexMap::new();
            for (arg_name, ast_arg) in ast_annot.arguments.iter() {
                arguments.insert(arg_name.to_string(), Value::from_ast(ast_arg));
            }
            DirectiveAnnotation {
                arguments,
                directive_name: ast_annot.name.to_string(),
                ref_location: loc::SourceLocation::from_ast_position(
                    &ast_annot.position,
                ),
            }
        }).collect()
    }
}
