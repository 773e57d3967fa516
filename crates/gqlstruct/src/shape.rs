// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Declared shapes of record fields.
//!
//! A `Shape` is the runtime description of a field's declared Rust type, the
//! input the type resolver matches on. Types report their shape through
//! [`Reflect`]; records get it from `#[derive(GraphqlObject)]`, and types without
//! an impl are seen as [`Shape::Opaque`].

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Integer width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
    W128,
    /// Platform-native (`isize` / `usize`).
    Native,
}

impl IntWidth {
    fn suffix(&self) -> &'static str {
        match self {
            Self::W8 => "8",
            Self::W16 => "16",
            Self::W32 => "32",
            Self::W64 => "64",
            Self::W128 => "128",
            Self::Native => "size",
        }
    }
}

/// Floating-point width (of each component, for complex numbers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    W32,
    W64,
}

/// Declared shape of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    Bool,
    /// Text (`String`, `str`, `char`).
    String,
    /// Signed integer.
    Int(IntWidth),
    /// Unsigned integer.
    Uint(IntWidth),
    Float(FloatWidth),
    /// Complex number (`num_complex::Complex<f32>` / `Complex<f64>`).
    Complex(FloatWidth),
    /// Date-time value, tagged with its type name.
    DateTime(&'static str),
    /// Owning or borrowing pointer (`Box`, `&`, `Rc`, `Arc`).
    Pointer(Box<Shape>),
    /// Optional wrapper (`Option`).
    Optional(Box<Shape>),
    /// Named record (struct with declared fields).
    Record(&'static str),
    /// Any other type, by type name.
    Opaque(&'static str),
}

impl Shape {
    /// Check if this is a record shape.
    pub fn is_record(&self) -> bool {
        matches!(self, Shape::Record(_))
    }

    /// Pointed-to or contained shape, one level deep.
    ///
    /// Returns `self` for shapes without indirection.
    pub fn elem(&self) -> &Shape {
        match self {
            Shape::Pointer(inner) | Shape::Optional(inner) => &**inner,
            other => other,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Bool => f.write_str("bool"),
            Shape::String => f.write_str("string"),
            Shape::Int(w) => write!(f, "i{}", w.suffix()),
            Shape::Uint(w) => write!(f, "u{}", w.suffix()),
            Shape::Float(FloatWidth::W32) => f.write_str("f32"),
            Shape::Float(FloatWidth::W64) => f.write_str("f64"),
            Shape::Complex(FloatWidth::W32) => f.write_str("complex64"),
            Shape::Complex(FloatWidth::W64) => f.write_str("complex128"),
            Shape::DateTime(name) | Shape::Opaque(name) => f.write_str(name),
            Shape::Pointer(inner) => write!(f, "*{}", inner),
            Shape::Optional(inner) => write!(f, "Option<{}>", inner),
            Shape::Record(name) => write!(f, "record {}", name),
        }
    }
}

/// Static shape of a Rust type.
pub trait Reflect {
    /// Declared shape of `Self`.
    fn shape() -> Shape;
}

macro_rules! reflect {
    ($($ty:ty => $shape:expr),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn shape() -> Shape {
                    $shape
                }
            }
        )*
    };
}

reflect! {
    bool => Shape::Bool,
    str => Shape::String,
    String => Shape::String,
    char => Shape::String,
    i8 => Shape::Int(IntWidth::W8),
    i16 => Shape::Int(IntWidth::W16),
    i32 => Shape::Int(IntWidth::W32),
    i64 => Shape::Int(IntWidth::W64),
    i128 => Shape::Int(IntWidth::W128),
    isize => Shape::Int(IntWidth::Native),
    u8 => Shape::Uint(IntWidth::W8),
    u16 => Shape::Uint(IntWidth::W16),
    u32 => Shape::Uint(IntWidth::W32),
    u64 => Shape::Uint(IntWidth::W64),
    u128 => Shape::Uint(IntWidth::W128),
    usize => Shape::Uint(IntWidth::Native),
    f32 => Shape::Float(FloatWidth::W32),
    f64 => Shape::Float(FloatWidth::W64),
    std::time::SystemTime => Shape::DateTime("SystemTime"),
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> Reflect for chrono::DateTime<Tz> {
    fn shape() -> Shape {
        Shape::DateTime("DateTime")
    }
}

#[cfg(feature = "chrono")]
reflect! {
    chrono::NaiveDateTime => Shape::DateTime("NaiveDateTime"),
}

#[cfg(feature = "num-complex")]
reflect! {
    num_complex::Complex<f32> => Shape::Complex(FloatWidth::W32),
    num_complex::Complex<f64> => Shape::Complex(FloatWidth::W64),
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn shape() -> Shape {
        Shape::Pointer(Box::new(T::shape()))
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn shape() -> Shape {
        Shape::Pointer(Box::new(T::shape()))
    }
}

impl<T: Reflect + ?Sized> Reflect for Rc<T> {
    fn shape() -> Shape {
        Shape::Pointer(Box::new(T::shape()))
    }
}

impl<T: Reflect + ?Sized> Reflect for Arc<T> {
    fn shape() -> Shape {
        Shape::Pointer(Box::new(T::shape()))
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn shape() -> Shape {
        Shape::Optional(Box::new(T::shape()))
    }
}
