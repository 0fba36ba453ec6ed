// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation request.
//!
//! A [`GenerationRequest`] is what the command line hands to the library: the
//! raw options for one invocation. It is built once and only the optional
//! table name is filled in later, by [`super::naming`].

use std::{collections::BTreeSet, path::PathBuf};

/// Options for one generation run.
///
/// # Example
///
/// ```rust
/// use entity_crudgen::GenerationRequest;
///
/// let request = GenerationRequest::new("User", "src/models/user.rs", "models")
///     .with_excluded(["delete", "join_sql"])
///     .single_name(false);
/// assert!(request.excluded.contains("delete"));
/// assert!(request.auto_id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Name of the struct to generate for (e.g. `User`).
    pub type_name: String,

    /// File declaring the struct.
    pub source_path: PathBuf,

    /// Storage table. Derived from the type name when `None` or empty.
    pub table: Option<String>,

    /// Module path, relative to the crate root, where the struct is
    /// reachable (e.g. `models` or `models::user`).
    pub package: String,

    /// Capability tags that must not be generated.
    pub excluded: BTreeSet<String>,

    /// Omit the type name from generated function names
    /// (`get_by_id` instead of `get_user_by_id`).
    pub single_name: bool,

    /// Generated code assigns a UUID on create instead of expecting the
    /// caller to supply one.
    pub auto_id: bool
}

impl GenerationRequest {
    /// Create a request with no exclusions, single-name and auto-id enabled.
    pub fn new(
        type_name: impl Into<String>,
        source_path: impl Into<PathBuf>,
        package: impl Into<String>
    ) -> Self {
        Self {
            type_name:   type_name.into(),
            source_path: source_path.into(),
            table:       None,
            package:     package.into(),
            excluded:    BTreeSet::new(),
            single_name: true,
            auto_id:     true
        }
    }

    /// Set an explicit table name.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Add capability tags to the exclusion set.
    ///
    /// Entries are trimmed; empty entries are dropped.
    #[must_use]
    pub fn with_excluded<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        self.excluded.extend(
            tags.into_iter()
                .map(|tag| tag.as_ref().trim().to_string())
                .filter(|tag| !tag.is_empty())
        );
        self
    }

    /// Toggle single-name mode.
    #[must_use]
    pub fn single_name(mut self, enabled: bool) -> Self {
        self.single_name = enabled;
        self
    }

    /// Toggle auto-id mode.
    #[must_use]
    pub fn auto_id(mut self, enabled: bool) -> Self {
        self.auto_id = enabled;
        self
    }
}

/// Split a comma separated exclusion list as given on the command line.
///
/// ```rust
/// use entity_crudgen::parse_exclusions;
///
/// let tags = parse_exclusions(" save, delete ,,is_zero");
/// assert_eq!(tags, vec!["save", "delete", "is_zero"]);
/// ```
pub fn parse_exclusions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}
