// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field extraction from source text.
//!
//! Parsing happens in three steps:
//!
//! 1. The file is parsed with [`syn::parse_file`].
//! 2. Its top-level items are indexed into a [`DeclarationTable`].
//! 3. The requested name is looked up directly and, if it is a struct, its
//!    fields are turned into [`FieldDescriptor`]s in declaration order.
//!
//! # Data Structures
//!
//! ```text
//! DeclarationTable
//! └── "User" → Declaration::Struct(&ItemStruct)
//!                 └── fields
//!                     ├── #[db = "id"]   pub id      → FieldDescriptor { id, "id" }
//!                     ├──                pub cache   → (skipped, untagged)
//!                     └── #[db = "name"] pub name    → FieldDescriptor { name, "name" }
//! ```

mod decl;
mod field;

use std::path::Path;

pub use decl::{Declaration, DeclarationTable};
pub use field::{FieldDescriptor, TAG_KEY, column_from_tag};
use tracing::debug;

use crate::error::{Error, Result};

/// Extract the persisted fields of `type_name` from `source`.
///
/// `path` is only used in error messages.
///
/// # Errors
///
/// - [`Error::Parse`] when `source` is not valid Rust
/// - [`Error::NotFound`] when no top-level item is called `type_name`
/// - [`Error::TypeMismatch`] when that item is not a struct
pub fn extract_fields(source: &str, path: &Path, type_name: &str) -> Result<Vec<FieldDescriptor>> {
    let file = syn::parse_file(source).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source
    })?;
    let table = DeclarationTable::build(&file);
    debug!(declarations = table.len(), "indexed source file");

    let item = match table.get(type_name) {
        Some(Declaration::Struct(item)) => item,
        Some(other) => {
            return Err(Error::TypeMismatch {
                name:  type_name.to_string(),
                found: other.kind()
            });
        }
        None => {
            return Err(Error::NotFound {
                name: type_name.to_string(),
                path: path.to_path_buf()
            });
        }
    };

    let fields: Vec<FieldDescriptor> = item
        .fields
        .iter()
        .filter_map(FieldDescriptor::from_field)
        .collect();
    debug!(
        total = item.fields.len(),
        persisted = fields.len(),
        "extracted fields of {type_name}"
    );
    Ok(fields)
}
