// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Naming conventions and request defaults.
//!
//! Fills in what the caller left out and derives the names the generated code
//! uses:
//!
//! | Input | Derived | Example |
//! |-------|---------|---------|
//! | type name | default table | `UserProfile` → `user_profile` |
//! | type name | local variable | `User` → `u`, `Tag` → `ta` |
//! | type name | display name | `UserProfile` → `userprofile` |
//!
//! The local variable is the first letter of the type, lower-cased. Generated
//! tests bind their mock backend to [`RESERVED_VAR`] and generated members
//! take the backend as [`QUERYABLE_VAR`], so a type starting with either
//! letter takes its second letter as well.

use convert_case::{Case, Casing};
use tracing::debug;

use super::request::GenerationRequest;
use crate::error::{Error, RequiredField, Result};

/// Identifier the generated tests bind the mock backend to.
pub const RESERVED_VAR: &str = "t";

/// Parameter name of the backend in generated members.
pub const QUERYABLE_VAR: &str = "q";

/// Names derived from a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Names {
    /// Storage table.
    pub table:         String,
    /// Local variable holding a model instance in generated code.
    pub model_var:     String,
    /// Type name in lower case, used in messages.
    pub model_name_lc: String
}

/// Check required fields and fill in the table default.
///
/// # Errors
///
/// [`Error::MissingField`] when the type name, source path or package is
/// empty.
pub fn apply_defaults(request: &mut GenerationRequest) -> Result<()> {
    if request.type_name.is_empty() {
        return Err(Error::MissingField(RequiredField::TypeName));
    }
    if request.source_path.as_os_str().is_empty() {
        return Err(Error::MissingField(RequiredField::SourcePath));
    }
    if request.package.is_empty() {
        return Err(Error::MissingField(RequiredField::Package));
    }

    if request.table.as_deref().is_none_or(str::is_empty) {
        let table = default_table(&request.type_name);
        debug!(%table, "table name defaulted from type name");
        request.table = Some(table);
    }
    Ok(())
}

/// Resolve every derived name for a defaulted request.
///
/// # Errors
///
/// [`Error::Validation`] when no usable local variable can be derived.
pub fn resolve(request: &GenerationRequest) -> Result<Names> {
    let table = match request.table.as_deref() {
        Some(table) if !table.is_empty() => table.to_string(),
        _ => default_table(&request.type_name)
    };

    Ok(Names {
        table,
        model_var: model_var(&request.type_name)?,
        model_name_lc: request.type_name.to_lowercase()
    })
}

/// Default table name: snake case of the type name.
///
/// Word boundaries are `convert_case`'s defaults, so acronyms and digits
/// split the way that crate splits them.
pub fn default_table(type_name: &str) -> String {
    type_name.to_case(Case::Snake)
}

/// Local variable for a model instance.
///
/// # Errors
///
/// [`Error::Validation`] when the type name is a single letter equal to
/// [`RESERVED_VAR`] or [`QUERYABLE_VAR`], or when the result is not a usable
/// identifier.
pub fn model_var(type_name: &str) -> Result<String> {
    let mut letters = type_name.chars().flat_map(char::to_lowercase);
    let mut var: String = letters.next().into_iter().collect();

    if var == RESERVED_VAR || var == QUERYABLE_VAR {
        match letters.next() {
            Some(second) => var.push(second),
            None => {
                return Err(Error::Validation(format!(
                    "type name `{type_name}` collides with the reserved variable `{var}`"
                )));
            }
        }
    }

    if syn::parse_str::<syn::Ident>(&var).is_err() {
        return Err(Error::Validation(format!(
            "cannot derive a variable name from type `{type_name}` (got `{var}`)"
        )));
    }
    Ok(var)
}
