// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Errors returned while translating records into object types.
//!
//! Every variant is a schema-definition bug: translation runs once against
//! statically known records, so callers are expected to surface these as hard
//! failures rather than retry.

/// Errors returned by gqlstruct operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A field's declared shape maps to no schema type.
    #[error("{shape} not recognized (field `{field}`)")]
    UnsupportedShape {
        /// Declared field name.
        field: String,
        /// Description of the unmatched shape.
        shape: String,
    },

    /// Two fields resolved to the same output name (`DuplicatePolicy::Reject` only).
    #[error("duplicate field `{field}` in object `{object}`")]
    DuplicateField {
        /// Object type name.
        object: String,
        /// Output field name.
        field: String,
    },
}

/// Convenient alias for results using the crate `Error` type.
pub type Result<T> = core::result::Result<T, Error>;
