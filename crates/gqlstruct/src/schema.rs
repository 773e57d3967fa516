// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! GraphQL schema primitives: scalar constants, the non-null wrapper and object types.
//!
//! This is the minimal slice of a schema library the translator needs: it only
//! describes types, it does not execute or validate queries.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Built-in scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    Boolean,
    String,
    Int,
    Float,
    DateTime,
}

impl Scalar {
    /// GraphQL name of the scalar.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::String => "String",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::DateTime => "DateTime",
        }
    }
}

/// Schema type handle.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// Built-in scalar.
    Scalar(Scalar),
    /// Non-null wrapper around a nullable type.
    NonNull(Box<Type>),
    /// Object type with named fields.
    Object(Arc<Object>),
}

impl Type {
    pub const BOOLEAN: Type = Type::Scalar(Scalar::Boolean);
    pub const STRING: Type = Type::Scalar(Scalar::String);
    pub const INT: Type = Type::Scalar(Scalar::Int);
    pub const FLOAT: Type = Type::Scalar(Scalar::Float);
    pub const DATE_TIME: Type = Type::Scalar(Scalar::DateTime);

    /// Wrap `inner` in a non-null modifier.
    ///
    /// A type that is already non-null is returned as is.
    pub fn non_null(inner: Type) -> Self {
        match inner {
            Type::NonNull(_) => inner,
            other => Type::NonNull(Box::new(other)),
        }
    }

    /// Check if this is a non-null type.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Type::NonNull(_))
    }

    /// Type with the non-null modifier removed.
    pub fn nullable(&self) -> &Type {
        match self {
            Type::NonNull(inner) => &**inner,
            other => other,
        }
    }

    /// Name of the named type (scalar or object) behind any modifier.
    pub fn name(&self) -> &str {
        match self {
            Type::Scalar(s) => s.name(),
            Type::NonNull(inner) => inner.name(),
            Type::Object(obj) => obj.name(),
        }
    }
}

impl From<Scalar> for Type {
    fn from(scalar: Scalar) -> Self {
        Type::Scalar(scalar)
    }
}

impl From<Object> for Type {
    fn from(object: Object) -> Self {
        Type::Object(Arc::new(object))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::NonNull(inner) => write!(f, "{}!", inner),
            other => f.write_str(other.name()),
        }
    }
}

/// Field of an object type.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Resolved field type (non-null wrapped when required).
    pub ty: Type,
}

impl Field {
    /// Create a new field descriptor.
    pub fn new(ty: Type) -> Self {
        Self { ty }
    }

    /// Check if the field may never be absent.
    pub fn is_non_null(&self) -> bool {
        self.ty.is_non_null()
    }
}

/// Field name to field descriptor mapping.
pub type Fields = BTreeMap<String, Field>;

/// Object construction input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectConfig {
    /// Object type name.
    pub name: String,
    /// Field descriptors keyed by output name.
    pub fields: Fields,
}

/// Object type.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    name: String,
    fields: Fields,
}

impl Object {
    /// Build an object type from its configuration.
    pub fn new(config: ObjectConfig) -> Self {
        Self {
            name: config.name,
            fields: config.fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Get field by output name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Render the object as an SDL type definition.
    pub fn to_sdl(&self) -> String {
        let mut out = format!("type {} {{\n", self.name);
        for (name, field) in &self.fields {
            out.push_str(&format!("  {}: {}\n", name, field.ty));
        }
        out.push('}');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> Object {
        let mut fields = Fields::new();
        fields.insert("y".into(), Field::new(Type::non_null(Type::FLOAT)));
        fields.insert("x".into(), Field::new(Type::FLOAT));
        Object::new(ObjectConfig {
            name: "Point".into(),
            fields,
        })
    }

    #[test]
    fn test_scalar_names() {
        assert_eq!(Type::BOOLEAN.name(), "Boolean");
        assert_eq!(Type::STRING.name(), "String");
        assert_eq!(Type::INT.name(), "Int");
        assert_eq!(Type::FLOAT.name(), "Float");
        assert_eq!(Type::DATE_TIME.name(), "DateTime");
    }

    #[test]
    fn test_non_null_wraps_once() {
        let once = Type::non_null(Type::INT);
        assert!(once.is_non_null());
        assert_eq!(once.nullable(), &Type::INT);

        let twice = Type::non_null(once.clone());
        assert_eq!(twice, once);
        assert_eq!(twice.to_string(), "Int!");
    }

    #[test]
    fn test_object_type_reference() {
        let ty = Type::non_null(Type::from(point()));
        assert_eq!(ty.name(), "Point");
        assert_eq!(ty.to_string(), "Point!");
    }

    #[test]
    fn test_object_sdl_sorted_by_field() {
        let obj = point();
        assert_eq!(obj.to_sdl(), "type Point {\n  x: Float\n  y: Float!\n}");
        assert!(obj.field("y").unwrap().is_non_null());
        assert!(obj.field("z").is_none());
    }
}
