use crate::ast;
use crate::bindables::Bindables;
use crate::BindError;
use crate::extensions::extract_extensions;
use crate::schema::check_extension_targets;
use crate::schema::extend_schema;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaExtendError;
use crate::type_defs::parse_type_defs;
use crate::type_defs::SchemaSyntaxError;
use crate::TypeDefs;
use thiserror::Error;

/// Builds a [`Schema`] from type definitions and attaches behaviour to it.
///
/// The type definitions are joined into one document and parsed. A schema
/// is built from the document's base definitions and then extended with its
/// object, interface, input object, union and enum extensions. Finally each
/// bindable is applied, in order, to the resulting schema.
///
/// ```
/// use schemabind_core::bindables::ObjectTypeBinding;
/// use schemabind_core::make_executable_schema;
/// use schemabind_core::resolvers::Resolver;
///
/// let query = ObjectTypeBinding::query()
///     .field("hello", Resolver::new(|_| Ok("Hello!".into())));
/// let schema = make_executable_schema(
///     vec!["type Query { hello: String }", "extend type Query { bye: String }"],
///     &query,
/// ).unwrap();
///
/// assert!(schema.get_field("Query", "bye").is_some());
/// assert!(schema.get_field("Query", "hello").unwrap().resolver().is_some());
/// ```
pub fn make_executable_schema<'a>(
    type_defs: impl Into<TypeDefs>,
    bindables: impl Into<Bindables<'a>>,
) -> Result<Schema, MakeExecutableSchemaError> {
    let type_defs = type_defs.into().join();
    log::debug!("Parsing {} bytes of type definitions.", type_defs.len());
    let document = parse_type_defs(&type_defs)?;

    let mut schema = build_and_extend_schema(&document)?;

    let bindables = bindables.into();
    log::debug!("Binding {} bindables to the schema.", bindables.len());
    bindables.bind_to_schema(&mut schema)?;

    Ok(schema)
}

/// Builds a [`Schema`] from the base definitions in `document`, then applies
/// the document's extensions (other than scalar extensions) to it.
///
/// Extension targets are checked against the base types before root
/// operation types are resolved, so an extension of a type that has no base
/// definition fails as a [`SchemaExtendError`] even when that type would
/// also have been the query root. Whether implementors define every field
/// of their interfaces is only judged once the extensions are merged, so an
/// extension may supply such a field.
pub fn build_and_extend_schema(
    document: &ast::schema::Document,
) -> Result<Schema, MakeExecutableSchemaError> {
    log::debug!(
        "Building schema from {} definitions.",
        document.definitions.len(),
    );
    let builder = SchemaBuilder::new().load_document(document)?;

    let extensions = extract_extensions(document);
    if extensions.definitions.is_empty() {
        return Ok(builder.build()?);
    }

    check_extension_targets(builder.types(), &extensions)?;
    let schema = builder.build_base()?;

    log::debug!("Extending schema with {} extensions.", extensions.definitions.len());
    Ok(extend_schema(schema, &extensions)?)
}

/// The failure of any stage of [`make_executable_schema`], carrying the
/// originating stage's error unchanged.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MakeExecutableSchemaError {
    #[error(transparent)]
    Bind(#[from] BindError),

    #[error(transparent)]
    Build(#[from] SchemaBuildError),

    #[error(transparent)]
    Extend(#[from] SchemaExtendError),

    #[error(transparent)]
    Syntax(#[from] SchemaSyntaxError),
}
