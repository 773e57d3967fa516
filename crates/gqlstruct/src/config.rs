// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Translator configuration.
//!
//! The default configuration keeps the plain map-insert semantics: a later
//! field silently replaces an earlier one with the same output name.

/// What to do when two fields map to the same output name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Later-declared field replaces the earlier entry (logged at `warn`).
    #[default]
    LastWins,
    /// Fail translation with `Error::DuplicateField`.
    Reject,
}

/// Configuration for a [`Translator`](crate::Translator).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Duplicate output name handling.
    pub duplicates: DuplicatePolicy,
}

impl TranslatorConfig {
    /// Configuration rejecting duplicate output names.
    pub fn strict() -> Self {
        Self {
            duplicates: DuplicatePolicy::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_last_wins() {
        assert_eq!(TranslatorConfig::default().duplicates, DuplicatePolicy::LastWins);
        assert_eq!(TranslatorConfig::strict().duplicates, DuplicatePolicy::Reject);
    }
}
