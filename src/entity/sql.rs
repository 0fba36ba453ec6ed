// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement building.
//!
//! Builds every SQL string the generated code embeds. Column order always
//! equals field declaration order so regenerated files diff cleanly.
//!
//! # Statements
//!
//! | Statement | Placeholders | Pattern |
//! |-----------|--------------|---------|
//! | insert | named | `INSERT INTO t (a, b) VALUES (:a, :b)` |
//! | update | named | `UPDATE t SET a=:a, b=:b WHERE id=:id` |
//! | select active | positional | `SELECT * FROM t WHERE id=$1 AND deleted_at IS NULL LIMIT 1` |
//! | select any | positional | `SELECT * FROM t WHERE id=$1 LIMIT 1` |
//! | delete | positional | `DELETE FROM t WHERE id=$1` |

use super::parse::FieldDescriptor;
use crate::utils::sql::{join_columns, named_placeholders, quoted_columns, set_clause};

/// Column every generated statement filters on.
pub const ID_COLUMN: &str = "id";

/// Statements for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statements {
    /// Insert of every persisted column.
    pub insert:         String,
    /// Update of every persisted column, filtered by id.
    pub update:         String,
    /// `"a", "b"`: column list for the join helper.
    pub fields_literal: String
}

impl Statements {
    /// Build the statements for `table` from the extracted fields.
    ///
    /// An empty field list still produces well-formed, if useless, text.
    pub fn build(table: &str, fields: &[FieldDescriptor]) -> Self {
        Self {
            insert:         format!(
                "INSERT INTO {table} ({}) VALUES ({})",
                join_columns(fields),
                named_placeholders(fields)
            ),
            update:         format!(
                "UPDATE {table} SET {} WHERE {ID_COLUMN}=:{ID_COLUMN}",
                set_clause(fields)
            ),
            fields_literal: quoted_columns(fields)
        }
    }
}

/// Lookup by id, optionally skipping soft-deleted rows.
pub fn select_by_id(table: &str, active_only: bool) -> String {
    let deleted_filter = if active_only {
        " AND deleted_at IS NULL"
    } else {
        ""
    };
    format!("SELECT * FROM {table} WHERE {ID_COLUMN}=$1{deleted_filter} LIMIT 1")
}

/// Deletion by id.
pub fn delete_by_id(table: &str) -> String {
    format!("DELETE FROM {table} WHERE {ID_COLUMN}=$1")
}
