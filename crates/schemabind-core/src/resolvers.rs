//! Callback types stored in a [`Schema`](crate::Schema)'s behaviour-bearing
//! slots.
//!
//! Each callback is reference counted and `Send + Sync`, so a fully bound
//! [`Schema`](crate::Schema) can be cloned cheaply and shared across threads
//! once binding has completed.

use crate::Value;
use indexmap::IndexMap;
use std::sync::Arc;
use thiserror::Error;

/// The failure type returned by resolvers and scalar callbacks.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct FieldError {
    message: String,
}
impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Everything a [`Resolver`] is given when asked for a field's value.
#[derive(Clone, Copy, Debug)]
pub struct ResolveInfo<'a> {
    pub args: &'a IndexMap<String, Value>,
    pub field_name: &'a str,
    pub parent: &'a Value,
    pub parent_type_name: &'a str,
}

type ResolverFn =
    dyn Fn(&ResolveInfo<'_>) -> Result<Value, FieldError> + Send + Sync;

/// A field resolver.
#[derive(Clone)]
pub struct Resolver(Arc<ResolverFn>);
impl Resolver {
    pub fn new<F>(resolver_fn: F) -> Self
    where
        F: Fn(&ResolveInfo<'_>) -> Result<Value, FieldError> + Send + Sync + 'static,
    {
        Self(Arc::new(resolver_fn))
    }

    /// A resolver that reads `property_name` off of an object parent value.
    pub fn property(property_name: impl Into<String>) -> Self {
        let property_name = property_name.into();
        Self::new(move |info| Ok(lookup_property(info.parent, &property_name)))
    }

    pub fn call(&self, info: &ResolveInfo<'_>) -> Result<Value, FieldError> {
        (self.0)(info)
    }

    /// True when both handles point at the same underlying callback.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Resolver(..)")
    }
}

type TypeResolverFn = dyn Fn(&Value) -> Option<String> + Send + Sync;

/// Picks the concrete object type name for a value of an abstract
/// (interface or union) type.
#[derive(Clone)]
pub struct TypeResolver(Arc<TypeResolverFn>);
impl TypeResolver {
    pub fn new<F>(type_resolver_fn: F) -> Self
    where
        F: Fn(&Value) -> Option<String> + Send + Sync + 'static,
    {
        Self(Arc::new(type_resolver_fn))
    }

    pub fn resolve_type(&self, value: &Value) -> Option<String> {
        (self.0)(value)
    }
}
impl std::fmt::Debug for TypeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TypeResolver(..)")
    }
}

type ScalarFnImpl = dyn Fn(&Value) -> Result<Value, FieldError> + Send + Sync;

/// A value-to-value conversion used for scalar serialization and parsing.
#[derive(Clone)]
pub struct ScalarFn(Arc<ScalarFnImpl>);
impl ScalarFn {
    pub fn new<F>(scalar_fn: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, FieldError> + Send + Sync + 'static,
    {
        Self(Arc::new(scalar_fn))
    }

    pub fn call(&self, value: &Value) -> Result<Value, FieldError> {
        (self.0)(value)
    }
}
impl std::fmt::Debug for ScalarFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ScalarFn(..)")
    }
}

/// Used for any field that has no [`Resolver`] bound to it: reads the
/// property named after the field off of an object parent, and yields
/// [`Value::Null`] for any other parent.
pub fn default_field_resolver(info: &ResolveInfo<'_>) -> Result<Value, FieldError> {
    Ok(lookup_property(info.parent, info.field_name))
}

fn lookup_property(parent: &Value, property_name: &str) -> Value {
    parent.as_object()
        .and_then(|entries| entries.get(property_name))
        .cloned()
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolver_reads_object_properties() {
        let parent = Value::Object(IndexMap::from([
            ("name".to_string(), Value::from("Bob")),
        ]));
        let args = IndexMap::new();
        let info = ResolveInfo {
            args: &args,
            field_name: "name",
            parent: &parent,
            parent_type_name: "User",
        };
        assert_eq!(default_field_resolver(&info), Ok(Value::from("Bob")));

        let info = ResolveInfo { field_name: "missing", ..info };
        assert_eq!(default_field_resolver(&info), Ok(Value::Null));

        let info = ResolveInfo { parent: &Value::Null, ..info };
        assert_eq!(default_field_resolver(&info), Ok(Value::Null));
    }
}
