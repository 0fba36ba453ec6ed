// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level storage tag parsing.
//!
//! A persisted field carries a name-value attribute whose value starts with
//! the column name, optionally followed by comma separated modifiers:
//!
//! ```rust,ignore
//! pub struct User {
//!     #[db = "id"]
//!     pub id: String,
//!
//!     #[db = "created_at,readonly"]   // column `created_at`
//!     pub created_at: Option<DateTime<Utc>>,
//!
//!     pub cache: Cache,               // untagged: not persisted
//! }
//! ```

use std::sync::LazyLock;

use regex::Regex;
use syn::{Attribute, Expr, ExprLit, Field, Ident, Lit, Meta, Visibility};

/// Attribute key marking a persisted field.
pub const TAG_KEY: &str = "db";

/// Column token at the start of the tag value; whatever follows it
/// (`,modifiers` or anything else) is ignored.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z0-9_-]+)").expect("valid tag pattern"));

/// Persisted field of the target struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field identifier (e.g. `created_at`).
    pub ident:  Ident,
    /// Storage column, taken verbatim from the tag.
    pub column: String
}

impl FieldDescriptor {
    /// Build a descriptor from a struct field.
    ///
    /// Returns `None` when the field is anonymous, private, untagged or
    /// carries a tag that does not match the column pattern.
    pub fn from_field(field: &Field) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        if !is_exported(&field.vis) {
            return None;
        }

        let column = field.attrs.iter().find_map(column_from_attr)?;
        Some(Self {
            ident: ident.clone(),
            column
        })
    }

    /// Field name as a string.
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }
}

/// Any explicit visibility counts: the generated module is a sibling of the
/// one declaring the struct.
fn is_exported(vis: &Visibility) -> bool {
    !matches!(vis, Visibility::Inherited)
}

/// Extract the column from `#[db = "column,modifiers"]`.
fn column_from_attr(attr: &Attribute) -> Option<String> {
    if !attr.path().is_ident(TAG_KEY) {
        return None;
    }
    let Meta::NameValue(name_value) = &attr.meta else {
        return None;
    };
    let Expr::Lit(ExprLit {
        lit: Lit::Str(value),
        ..
    }) = &name_value.value
    else {
        return None;
    };
    column_from_tag(&value.value())
}

/// Match a raw tag value against the column pattern.
pub fn column_from_tag(tag: &str) -> Option<String> {
    TAG_PATTERN
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
