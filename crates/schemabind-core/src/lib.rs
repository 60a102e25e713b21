pub mod ast;
pub mod bindables;
mod directive_annotation;
mod executable_schema;
pub mod extensions;
mod file_reader;
pub mod loc;
pub mod resolvers;
pub mod schema;
pub mod type_defs;
pub mod types;
mod value;

pub use bindables::Bindables;
pub use bindables::BindError;
pub use bindables::SchemaBindable;
pub use directive_annotation::DirectiveAnnotation;
pub(crate) use directive_annotation::DirectiveAnnotationBuilder;
pub use executable_schema::build_and_extend_schema;
pub use executable_schema::make_executable_schema;
pub use executable_schema::MakeExecutableSchemaError;
pub use file_reader::ReadContentError;
pub use schema::Schema;
pub use type_defs::load_schema_from_path;
pub use type_defs::LoadSchemaError;
pub use type_defs::SchemaSyntaxError;
pub use type_defs::TypeDefs;
pub use value::Value;

#[cfg(test)]
mod tests;
