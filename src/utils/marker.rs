// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated code marker.

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Code generated by entity-crudgen; DO NOT EDIT.";

/// Prefix `body` with the marker and trim surrounding whitespace.
pub fn with_header(body: &str) -> String {
    format!("{GENERATED_HEADER}\n\n{}", body.trim())
        .trim()
        .to_string()
}

/// Whether `text` was produced by this tool.
pub fn is_generated(text: &str) -> bool {
    text.starts_with(GENERATED_HEADER)
}
