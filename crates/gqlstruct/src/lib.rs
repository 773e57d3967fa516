// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # gqlstruct - GraphQL object types from annotated structs
//!
//! Derives a GraphQL object type (field names and types) from a struct's declared
//! fields. Only fields annotated with `#[graphql("...")]` participate.
//!
//! ## Quick Start
//!
//! ```rust
//! use gqlstruct::{GraphqlObject, Type};
//!
//! #[derive(GraphqlObject)]
//! struct Order {
//!     #[graphql("!id")]
//!     id: u32,
//!     #[graphql("total")]
//!     total: Box<f64>,
//!     #[graphql("placedAt")]
//!     placed_at: std::time::SystemTime,
//!     internal_note: String, // not annotated: skipped
//! }
//!
//! let order = Order {
//!     id: 7,
//!     total: Box::new(12.5),
//!     placed_at: std::time::SystemTime::UNIX_EPOCH,
//!     internal_note: String::new(),
//! };
//!
//! let object = gqlstruct::object(&order)?;
//! assert_eq!(object.name(), "Order");
//! assert_eq!(object.field("id").unwrap().ty, Type::non_null(Type::INT));
//! assert_eq!(object.field("total").unwrap().ty, Type::FLOAT);
//! assert_eq!(object.field("placedAt").unwrap().ty, Type::DATE_TIME);
//! # Ok::<(), gqlstruct::Error>(())
//! ```
//!
//! ## Custom typing
//!
//! A field type implementing [`GraphqlTyped`] supplies its own schema type. For
//! record fields declared by value or behind a pointer (`Box<Address>`, `&Address`,
//! `Rc<Address>`, `Arc<Address>`), an implementation on the reference type
//! (`impl GraphqlTyped for &Address`) is checked first.
//!
//! ## Derive rejections
//!
//! Only structs with named fields describe a record. Anything else is rejected
//! at compile time:
//!
//! ```compile_fail
//! #[derive(gqlstruct::GraphqlObject)]
//! enum Status {
//!     Active,
//!     Closed,
//! }
//! ```
//!
//! ```compile_fail
//! #[derive(gqlstruct::GraphqlObject)]
//! struct Point(#[graphql("x")] f64, #[graphql("y")] f64);
//! ```
//!
//! ```compile_fail
//! #[derive(gqlstruct::GraphqlObject)]
//! struct Wrapper<T> {
//!     #[graphql("inner")]
//!     inner: T,
//! }
//! ```
//!
//! ```compile_fail
//! #[derive(gqlstruct::GraphqlObject)]
//! struct Tagged {
//!     #[graphql("a")]
//!     #[graphql("b")]
//!     value: u32,
//! }
//! ```
//!
//! Lifetime parameters are fine:
//!
//! ```
//! #[derive(gqlstruct::GraphqlObject)]
//! struct Label<'a> {
//!     #[graphql("!text")]
//!     text: &'a str,
//! }
//!
//! let object = gqlstruct::object(&Label { text: "x" })?;
//! assert_eq!(object.to_sdl(), "type Label {\n  text: String!\n}");
//! # Ok::<(), gqlstruct::Error>(())
//! ```
//!
//! ## Modules Overview
//!
//! - [`schema`] - Scalar, non-null and object types
//! - [`shape`] - Declared shapes and the [`Reflect`] trait
//! - [`resolve`] - Field type resolution
//! - [`record`] - Record translation and the [`Record`] trait
//! - [`config`] - Translator configuration

// Allow the derive macro to work inside this crate's tests
extern crate self as gqlstruct;

/// Translator configuration (duplicate field handling).
pub mod config;
mod error;
/// Record translation (annotations, `Record` trait, `Translator`).
pub mod record;
/// Type resolution (`GraphqlTyped`, `FieldValue`, `resolve`).
pub mod resolve;
/// Schema primitives (scalars, non-null wrapper, objects).
pub mod schema;
/// Declared shapes and the `Reflect` trait.
pub mod shape;

pub use config::{DuplicatePolicy, TranslatorConfig};
pub use error::{Error, Result};
pub use record::{object, object_config, Annotation, FieldDecl, Record, Translator};
pub use resolve::{resolve, FieldValue, GraphqlTyped};
pub use schema::{Field, Fields, Object, ObjectConfig, Scalar, Type};
pub use shape::{FloatWidth, IntWidth, Reflect, Shape};

pub use gqlstruct_codegen::GraphqlObject; // Derive macro (for #[derive(gqlstruct::GraphqlObject)])

/// Support code for `#[derive(GraphqlObject)]`. Not public API.
///
/// The derive calls `(&Probe(&value)).method()` for each field. Method lookup
/// picks the impl on `Probe<T>` when its bound holds and falls back to the impl
/// on `&Probe<T>` otherwise, so capabilities are detected per concrete field type.
#[doc(hidden)]
pub mod __private {
    use std::ops::Deref;

    use crate::resolve::{FieldValue, GraphqlTyped};
    use crate::shape::{Reflect, Shape};

    pub struct Probe<'a, T: ?Sized>(pub &'a T);

    pub trait ShapeOf<'a> {
        fn field_value(&self) -> FieldValue<'a>;
    }

    impl<'a, T: Reflect + ?Sized> ShapeOf<'a> for Probe<'a, T> {
        fn field_value(&self) -> FieldValue<'a> {
            FieldValue::new(self.0)
        }
    }

    pub trait ShapeFallback<'a> {
        fn field_value(&self) -> FieldValue<'a>;
    }

    impl<'a, T: ?Sized> ShapeFallback<'a> for &Probe<'a, T> {
        fn field_value(&self) -> FieldValue<'a> {
            FieldValue::with_shape(Shape::Opaque(std::any::type_name::<T>()))
        }
    }

    pub trait TypedByRef<'a> {
        fn attach_by_ref(&self, value: FieldValue<'a>) -> FieldValue<'a>;
    }

    impl<'a, T: ?Sized> TypedByRef<'a> for Probe<'a, T>
    where
        &'a T: GraphqlTyped,
    {
        fn attach_by_ref(&self, value: FieldValue<'a>) -> FieldValue<'a> {
            value.typed_by_ref(self.0)
        }
    }

    pub trait TypedByRefFallback<'a> {
        fn attach_by_ref(&self, value: FieldValue<'a>) -> FieldValue<'a>;
    }

    impl<'a, T: ?Sized> TypedByRefFallback<'a> for &Probe<'a, T> {
        fn attach_by_ref(&self, value: FieldValue<'a>) -> FieldValue<'a> {
            value
        }
    }

    pub trait TypedPointee<'a> {
        fn attach_pointee(&self, value: FieldValue<'a>) -> FieldValue<'a>;
    }

    impl<'a, T> TypedPointee<'a> for Probe<'a, T>
    where
        T: Deref + ?Sized,
        T::Target: 'a,
        &'a T::Target: GraphqlTyped,
    {
        fn attach_pointee(&self, value: FieldValue<'a>) -> FieldValue<'a> {
            let pointer: &'a T = self.0;
            value.typed_pointee(pointer.deref())
        }
    }

    pub trait TypedPointeeFallback<'a> {
        fn attach_pointee(&self, value: FieldValue<'a>) -> FieldValue<'a>;
    }

    impl<'a, T: ?Sized> TypedPointeeFallback<'a> for &Probe<'a, T> {
        fn attach_pointee(&self, value: FieldValue<'a>) -> FieldValue<'a> {
            value
        }
    }

    pub trait Typed<'a> {
        fn attach_direct(&self, value: FieldValue<'a>) -> FieldValue<'a>;
    }

    impl<'a, T: GraphqlTyped> Typed<'a> for Probe<'a, T> {
        fn attach_direct(&self, value: FieldValue<'a>) -> FieldValue<'a> {
            value.typed(self.0)
        }
    }

    pub trait TypedFallback<'a> {
        fn attach_direct(&self, value: FieldValue<'a>) -> FieldValue<'a>;
    }

    impl<'a, T: ?Sized> TypedFallback<'a> for &Probe<'a, T> {
        fn attach_direct(&self, value: FieldValue<'a>) -> FieldValue<'a> {
            value
        }
    }
}
