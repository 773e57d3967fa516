// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record translation: annotated struct fields -> object type.
//!
//! A [`Record`] lists its declared fields in order. Fields carrying a
//! `#[graphql("...")]` annotation are resolved and collected into an
//! [`ObjectConfig`]; the rest are skipped.
//!
//! # Annotation grammar
//!
//! | Annotation | Output name | Type |
//! |------------|-------------|------|
//! | absent     | -           | field skipped |
//! | `name`     | `name`      | nullable |
//! | `!name`    | `name`      | non-null |

use crate::config::{DuplicatePolicy, TranslatorConfig};
use crate::error::{Error, Result};
use crate::resolve::{resolve, FieldValue};
use crate::schema::{Field, Fields, Object, ObjectConfig, Type};

/// Parsed field annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation<'s> {
    /// Output field name (leading `!` stripped).
    pub name: &'s str,
    /// Field may never be absent.
    pub non_null: bool,
}

impl<'s> Annotation<'s> {
    /// Parse an annotation string.
    ///
    /// An empty name is passed through unchanged.
    pub fn parse(raw: &'s str) -> Self {
        match raw.strip_prefix('!') {
            Some(name) => Self {
                name,
                non_null: true,
            },
            None => Self {
                name: raw,
                non_null: false,
            },
        }
    }
}

/// A declared record field.
#[derive(Debug)]
pub struct FieldDecl<'a> {
    /// Rust field name.
    pub name: &'static str,
    /// Raw annotation, if the field carries one.
    pub annotation: Option<&'static str>,
    /// Declared shape and value.
    pub value: FieldValue<'a>,
}

impl<'a> FieldDecl<'a> {
    pub fn new(name: &'static str, annotation: Option<&'static str>, value: FieldValue<'a>) -> Self {
        Self {
            name,
            annotation,
            value,
        }
    }
}

/// A struct whose declared fields can be enumerated.
///
/// Usually implemented with `#[derive(GraphqlObject)]`.
pub trait Record {
    /// Declared type name (object name).
    fn type_name(&self) -> &'static str;

    /// Declared fields, in declaration order.
    fn fields(&self) -> Vec<FieldDecl<'_>>;
}

/// Translates records into object types.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    /// Create a translator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a translator.
    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::default()
    }

    /// Create a translator from an explicit configuration.
    pub fn with_config(config: TranslatorConfig) -> Self {
        Self { config }
    }

    /// Build the object configuration for `record`.
    ///
    /// # Errors
    ///
    /// Fails on the first field whose shape resolves to no schema type; no partial
    /// configuration is returned.
    pub fn object_config<R: Record + ?Sized>(&self, record: &R) -> Result<ObjectConfig> {
        let object = record.type_name();
        let mut fields = Fields::new();

        for decl in record.fields() {
            let Some(raw) = decl.annotation else {
                log::trace!("[{}] skip `{}`: no annotation", object, decl.name);
                continue;
            };

            let annotation = Annotation::parse(raw);
            let mut ty = resolve(decl.name, &decl.value).inspect_err(|e| {
                log::debug!("[{}] translation aborted: {}", object, e);
            })?;
            if annotation.non_null {
                ty = Type::non_null(ty);
            }
            log::trace!("[{}] `{}` -> {}: {}", object, decl.name, annotation.name, ty);

            if fields.contains_key(annotation.name) {
                match self.config.duplicates {
                    DuplicatePolicy::LastWins => {
                        log::warn!(
                            "[{}] field `{}` replaces earlier `{}`",
                            object,
                            decl.name,
                            annotation.name
                        );
                    }
                    DuplicatePolicy::Reject => {
                        log::debug!(
                            "[{}] translation aborted: duplicate `{}`",
                            object,
                            annotation.name
                        );
                        return Err(Error::DuplicateField {
                            object: object.to_string(),
                            field: annotation.name.to_string(),
                        });
                    }
                }
            }
            fields.insert(annotation.name.to_string(), Field::new(ty));
        }

        log::debug!("[{}] translated {} field(s)", object, fields.len());
        Ok(ObjectConfig {
            name: object.to_string(),
            fields,
        })
    }

    /// Build the object type for `record`.
    pub fn object<R: Record + ?Sized>(&self, record: &R) -> Result<Object> {
        self.object_config(record).map(Object::new)
    }
}

/// Builder for [`Translator`].
#[derive(Debug, Default)]
pub struct TranslatorBuilder {
    config: TranslatorConfig,
}

impl TranslatorBuilder {
    /// Set duplicate output name handling.
    #[must_use]
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicates = policy;
        self
    }

    pub fn build(self) -> Translator {
        Translator::with_config(self.config)
    }
}

/// Build the object configuration for `record` with the default translator.
pub fn object_config<R: Record + ?Sized>(record: &R) -> Result<ObjectConfig> {
    Translator::new().object_config(record)
}

/// Build the object type for `record` with the default translator.
///
/// All fields annotated with `#[graphql("...")]` are added.
///
/// # Example
///
/// ```
/// use gqlstruct::GraphqlObject;
///
/// #[derive(GraphqlObject)]
/// struct User {
///     #[graphql("!id")]
///     id: u64,
///     #[graphql("name")]
///     name: Option<String>,
///     password_hash: String,
/// }
///
/// let user = User { id: 1, name: None, password_hash: String::new() };
/// let object = gqlstruct::object(&user).unwrap();
/// assert_eq!(object.name(), "User");
/// assert_eq!(object.to_sdl(), "type User {\n  id: Int!\n  name: String\n}");
/// ```
pub fn object<R: Record + ?Sized>(record: &R) -> Result<Object> {
    Translator::new().object(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{IntWidth, Shape};

    struct Manual {
        count: i32,
        label: String,
    }

    impl Record for Manual {
        fn type_name(&self) -> &'static str {
            "Manual"
        }

        fn fields(&self) -> Vec<FieldDecl<'_>> {
            vec![
                FieldDecl::new("count", Some("!count"), FieldValue::new(&self.count)),
                FieldDecl::new("label", None, FieldValue::new(&self.label)),
                FieldDecl::new(
                    "extra",
                    Some("count"),
                    FieldValue::with_shape(Shape::Pointer(Box::new(Shape::Uint(IntWidth::W8)))),
                ),
            ]
        }
    }

    fn manual() -> Manual {
        Manual {
            count: 1,
            label: "x".into(),
        }
    }

    #[test]
    fn test_annotation_parse() {
        assert_eq!(
            Annotation::parse("!count"),
            Annotation {
                name: "count",
                non_null: true
            }
        );
        assert_eq!(
            Annotation::parse("count"),
            Annotation {
                name: "count",
                non_null: false
            }
        );
        assert_eq!(Annotation::parse("!").name, "");
        assert_eq!(Annotation::parse("").name, "");
        // Only one leading marker is stripped.
        assert_eq!(Annotation::parse("!!x").name, "!x");
    }

    #[test]
    fn test_last_wins_by_default() {
        let config = object_config(&manual()).unwrap();
        assert_eq!(config.name, "Manual");
        assert_eq!(config.fields.len(), 1);
        assert_eq!(config.fields["count"].ty, Type::INT);
        assert!(!config.fields.contains_key("label"));
    }

    #[test]
    fn test_reject_duplicates() {
        let translator = Translator::builder()
            .duplicates(DuplicatePolicy::Reject)
            .build();
        let err = translator.object(&manual()).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateField {
                object: "Manual".into(),
                field: "count".into()
            }
        );
    }

    #[test]
    fn test_unsupported_field_aborts() {
        struct Broken;

        impl Record for Broken {
            fn type_name(&self) -> &'static str {
                "Broken"
            }

            fn fields(&self) -> Vec<FieldDecl<'_>> {
                vec![
                    FieldDecl::new("ok", Some("ok"), FieldValue::with_shape(Shape::Bool)),
                    FieldDecl::new("cb", Some("cb"), FieldValue::with_shape(Shape::Opaque("fn()"))),
                ]
            }
        }

        let err = object(&Broken).unwrap_err();
        assert!(matches!(err, Error::UnsupportedShape { ref field, .. } if field == "cb"));
    }
}
