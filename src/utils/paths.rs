// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Output file naming.
//!
//! ```text
//! models/user.rs  →  models/user_generated.rs
//!                 →  models/user_generated_test.rs
//! Makefile        →  Makefile_generated
//! ```

use std::path::{Path, PathBuf};

/// Suffix of the implementation file.
pub const IMPLEMENTATION_SUFFIX: &str = "_generated";
/// Suffix of the test file.
pub const TEST_SUFFIX: &str = "_generated_test";

/// Sibling of `source` with `suffix` appended to the stem.
///
/// The extension, if any, is kept.
pub fn with_suffix(source: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match source.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}")
    };
    source.with_file_name(name)
}

/// Implementation output for `source`.
pub fn implementation_path(source: &Path) -> PathBuf {
    with_suffix(source, IMPLEMENTATION_SUFFIX)
}

/// Test output for `source`.
pub fn test_path(source: &Path) -> PathBuf {
    with_suffix(source, TEST_SUFFIX)
}

/// Module name the generated tests import the implementation from.
pub fn generated_module(source: &Path) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{stem}{IMPLEMENTATION_SUFFIX}")
}
