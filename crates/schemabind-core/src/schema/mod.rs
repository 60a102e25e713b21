#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;
mod schema_extender;
mod type_validation_error;
mod types_validator;

pub use schema::Schema;
pub use schema_builder::GraphQLOperationType;
pub use schema_builder::NamedTypeDefLocation;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaBuildError;
pub use schema_extender::check_extension_targets;
pub use schema_extender::extend_schema;
pub use schema_extender::SchemaExtendError;
pub use type_validation_error::TypeValidationError;
pub(crate) use types_validator::TypesValidator;

#[cfg(test)]
mod tests;
