// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL fragment building utilities.
//!
//! All helpers keep the order of their input; nothing is sorted.

use crate::entity::parse::FieldDescriptor;

/// Join column names with comma separator: `id, name`.
pub fn join_columns(fields: &[FieldDescriptor]) -> String {
    fields
        .iter()
        .map(|f| f.column.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build named placeholders: `:id, :name`.
pub fn named_placeholders(fields: &[FieldDescriptor]) -> String {
    fields
        .iter()
        .map(|f| format!(":{}", f.column))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build SET clause with named placeholders: `id=:id, name=:name`.
pub fn set_clause(fields: &[FieldDescriptor]) -> String {
    fields
        .iter()
        .map(|f| format!("{col}=:{col}", col = f.column))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build a quoted column list: `"id", "name"`.
pub fn quoted_columns(fields: &[FieldDescriptor]) -> String {
    fields
        .iter()
        .map(|f| format!("\"{}\"", f.column))
        .collect::<Vec<_>>()
        .join(", ")
}
