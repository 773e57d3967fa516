// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type resolution: maps a field's declared shape and sample value to a schema type.
//!
//! # Resolution order
//!
//! First match wins:
//!
//! 1. Record shape whose reference type (`&T`) implements [`GraphqlTyped`]
//! 2. Declared type implements [`GraphqlTyped`]. A pointer to a record (`Box<T>`,
//!    `&T`, `Rc<T>`, `Arc<T>`) also qualifies when `&T` implements it
//! 3. One level of pointer / `Option` is unwrapped
//! 4. Date-time shapes -> `DateTime`
//! 5. `bool` -> `Boolean`, text -> `String`, integers -> `Int`, floats and complex -> `Float`
//! 6. Anything else is [`Error::UnsupportedShape`]
//!
//! `Option<T>` records never use the reference capability: a `None` has no value
//! to call it on.

use crate::error::{Error, Result};
use crate::schema::Type;
use crate::shape::{Reflect, Shape};

/// Types that supply their own schema type.
///
/// Implement it on the value type, or on a reference to it (`impl GraphqlTyped for &Foo`)
/// to override typing of record fields declared by value or behind a pointer.
///
/// # Example
///
/// ```
/// use gqlstruct::{GraphqlTyped, Type};
///
/// struct Cents(i64);
///
/// impl GraphqlTyped for Cents {
///     fn graphql_type(&self) -> Type {
///         Type::FLOAT
///     }
/// }
/// ```
pub trait GraphqlTyped {
    /// Schema type of `self`.
    fn graphql_type(&self) -> Type;
}

// Owning pointers describe themselves as their pointee.
impl<T: GraphqlTyped + ?Sized> GraphqlTyped for Box<T> {
    fn graphql_type(&self) -> Type {
        (**self).graphql_type()
    }
}

impl<T: GraphqlTyped + ?Sized> GraphqlTyped for std::rc::Rc<T> {
    fn graphql_type(&self) -> Type {
        (**self).graphql_type()
    }
}

impl<T: GraphqlTyped + ?Sized> GraphqlTyped for std::sync::Arc<T> {
    fn graphql_type(&self) -> Type {
        (**self).graphql_type()
    }
}

/// One field's declared shape together with its self-describing views.
pub struct FieldValue<'a> {
    shape: Shape,
    by_ref: Option<Box<dyn GraphqlTyped + 'a>>,
    pointee: Option<Box<dyn GraphqlTyped + 'a>>,
    direct: Option<&'a dyn GraphqlTyped>,
}

impl<'a> FieldValue<'a> {
    /// Field value of a type with a known shape.
    pub fn new<T: Reflect + ?Sized>(_value: &'a T) -> Self {
        Self::with_shape(T::shape())
    }

    /// Field value with an explicit declared shape.
    pub fn with_shape(shape: Shape) -> Self {
        Self {
            shape,
            by_ref: None,
            pointee: None,
            direct: None,
        }
    }

    /// Attach the capability implemented on the reference type `&T`.
    #[must_use]
    pub fn typed_by_ref<T: ?Sized>(mut self, value: &'a T) -> Self
    where
        &'a T: GraphqlTyped,
    {
        self.by_ref = Some(Box::new(value));
        self
    }

    /// Attach the capability implemented on a reference to the pointee.
    ///
    /// `value` is the pointed-to value of a pointer field (`&*field`).
    #[must_use]
    pub fn typed_pointee<T: ?Sized>(mut self, value: &'a T) -> Self
    where
        &'a T: GraphqlTyped,
    {
        self.pointee = Some(Box::new(value));
        self
    }

    /// Attach the capability implemented on the declared type `T`.
    #[must_use]
    pub fn typed<T: GraphqlTyped>(mut self, value: &'a T) -> Self {
        self.direct = Some(value);
        self
    }

    /// Declared shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl std::fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldValue")
            .field("shape", &self.shape)
            .field("by_ref", &self.by_ref.is_some())
            .field("pointee", &self.pointee.is_some())
            .field("direct", &self.direct.is_some())
            .finish()
    }
}

/// Resolve the schema type of one field.
///
/// `field` names the field in diagnostics only.
pub fn resolve(field: &str, value: &FieldValue<'_>) -> Result<Type> {
    if value.shape.is_record() {
        if let Some(typed) = &value.by_ref {
            return Ok(typed.graphql_type());
        }
    }

    if let Shape::Pointer(inner) = &value.shape {
        if inner.is_record() {
            if let Some(typed) = &value.pointee {
                return Ok(typed.graphql_type());
            }
        }
    }

    if let Some(typed) = value.direct {
        return Ok(typed.graphql_type());
    }

    let shape = value.shape.elem();

    match shape {
        Shape::DateTime(_) => Ok(Type::DATE_TIME),
        Shape::Bool => Ok(Type::BOOLEAN),
        Shape::String => Ok(Type::STRING),
        Shape::Int(_) | Shape::Uint(_) => Ok(Type::INT),
        Shape::Float(_) | Shape::Complex(_) => Ok(Type::FLOAT),
        Shape::Pointer(_) | Shape::Optional(_) | Shape::Record(_) | Shape::Opaque(_) => {
            Err(Error::UnsupportedShape {
                field: field.to_string(),
                shape: shape.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{FloatWidth, IntWidth};

    struct Money;

    impl GraphqlTyped for Money {
        fn graphql_type(&self) -> Type {
            Type::FLOAT
        }
    }

    struct Geo;

    impl GraphqlTyped for &Geo {
        fn graphql_type(&self) -> Type {
            Type::STRING
        }
    }

    fn resolve_shape(shape: Shape) -> Result<Type> {
        resolve("f", &FieldValue::with_shape(shape))
    }

    #[test]
    fn test_primitive_categories() {
        assert_eq!(resolve_shape(Shape::Bool).unwrap(), Type::BOOLEAN);
        assert_eq!(resolve_shape(Shape::String).unwrap(), Type::STRING);
        for w in [
            IntWidth::W8,
            IntWidth::W16,
            IntWidth::W32,
            IntWidth::W64,
            IntWidth::W128,
            IntWidth::Native,
        ] {
            assert_eq!(resolve_shape(Shape::Int(w)).unwrap(), Type::INT);
            assert_eq!(resolve_shape(Shape::Uint(w)).unwrap(), Type::INT);
        }
        for w in [FloatWidth::W32, FloatWidth::W64] {
            assert_eq!(resolve_shape(Shape::Float(w)).unwrap(), Type::FLOAT);
            assert_eq!(resolve_shape(Shape::Complex(w)).unwrap(), Type::FLOAT);
        }
    }

    #[test]
    fn test_date_time() {
        assert_eq!(
            resolve_shape(Shape::DateTime("SystemTime")).unwrap(),
            Type::DATE_TIME
        );
        assert_eq!(
            resolve_shape(Shape::Optional(Box::new(Shape::DateTime("DateTime")))).unwrap(),
            Type::DATE_TIME
        );
    }

    #[test]
    fn test_unwraps_single_level() {
        let count = 3i32;
        let boxed = Box::new(count);
        assert_eq!(
            resolve("count", &FieldValue::new(&boxed)).unwrap(),
            Type::INT
        );

        let double: Option<Box<i32>> = None;
        let err = resolve("count", &FieldValue::new(&double)).unwrap_err();
        match err {
            Error::UnsupportedShape { field, shape } => {
                assert_eq!(field, "count");
                assert_eq!(shape, "*i32");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_unmatched_shapes_fail() {
        let err = resolve_shape(Shape::Opaque("fn()")).unwrap_err();
        assert_eq!(err.to_string(), "fn() not recognized (field `f`)");
        assert!(resolve_shape(Shape::Record("Address")).is_err());
    }

    #[test]
    fn test_direct_capability_wins_over_primitive() {
        let money = Money;
        let value = FieldValue::with_shape(Shape::Int(IntWidth::W64)).typed(&money);
        assert_eq!(resolve("price", &value).unwrap(), Type::FLOAT);
    }

    #[test]
    fn test_reference_capability_on_record() {
        let geo = Geo;
        let value = FieldValue::with_shape(Shape::Record("Geo")).typed_by_ref(&geo);
        assert_eq!(resolve("geo", &value).unwrap(), Type::STRING);
    }

    #[test]
    fn test_reference_capability_through_pointer() {
        let geo = Box::new(Geo);
        let value = FieldValue::with_shape(Shape::Pointer(Box::new(Shape::Record("Geo"))))
            .typed_pointee(&*geo);
        assert_eq!(resolve("geo", &value).unwrap(), Type::STRING);

        // Without the view, the pointer unwraps to a bare record.
        let bare = FieldValue::with_shape(Shape::Pointer(Box::new(Shape::Record("Geo"))));
        assert_eq!(
            resolve("geo", &bare).unwrap_err().to_string(),
            "record Geo not recognized (field `geo`)"
        );
    }

    #[test]
    fn test_pointee_view_ignored_for_optional_record() {
        let geo = Geo;
        let value = FieldValue::with_shape(Shape::Optional(Box::new(Shape::Record("Geo"))))
            .typed_pointee(&geo);
        assert!(resolve("geo", &value).is_err());
    }

    #[test]
    fn test_reference_capability_ignored_for_non_record() {
        let geo = Geo;
        let value = FieldValue::with_shape(Shape::Opaque("Geo")).typed_by_ref(&geo);
        assert!(resolve("geo", &value).is_err());
    }

    #[test]
    fn test_reference_capability_before_direct() {
        struct Both;
        impl GraphqlTyped for Both {
            fn graphql_type(&self) -> Type {
                Type::INT
            }
        }
        impl GraphqlTyped for &Both {
            fn graphql_type(&self) -> Type {
                Type::BOOLEAN
            }
        }

        let both = Both;
        let value = FieldValue::with_shape(Shape::Record("Both"))
            .typed_by_ref(&both)
            .typed(&both);
        assert_eq!(resolve("both", &value).unwrap(), Type::BOOLEAN);
    }
}
