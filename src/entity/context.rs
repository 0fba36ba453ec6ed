// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Render context and exclusion predicate.
//!
//! [`RenderContext`] is the single, read-only variable set both render
//! targets are built from. Only two things in it steer what gets generated:
//!
//! - [`RenderContext::generates`]: whether a [`Capability`] survived the
//!   exclusion list
//! - [`RenderContext::optional_name`]: whether generated function names
//!   carry the type name
//!
//! Every other value is used unconditionally.

use std::{collections::BTreeSet, fmt};

use convert_case::{Case, Casing};
use proc_macro2::Span;
use syn::Ident;
use tracing::warn;

use super::{naming::Names, request::GenerationRequest, sql::Statements};

/// Independently excludable piece of generated code.
///
/// | Tag | Generated member |
/// |-----|------------------|
/// | `join_sql` | `join_{name}_sql(prefix)` |
/// | `get` | `get_{name}_by_id(q, id)` |
/// | `get_any` | `get_any_{name}_by_id(q, id)` |
/// | `save` | `Model::save` |
/// | `create` | `Model::create` |
/// | `do_create` | `Model::do_create` |
/// | `update` | `Model::update` |
/// | `do_update` | `Model::do_update` |
/// | `delete` | `Model::delete` |
/// | `is_zero` | `Model::is_zero` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Column list helper for JOIN queries.
    JoinSql,
    /// Lookup of an active row by id.
    Get,
    /// Lookup of any row by id, soft-deleted included.
    GetAny,
    /// Insert-or-update dispatch.
    Save,
    /// Public insert.
    Create,
    /// Internal insert.
    DoCreate,
    /// Public update.
    Update,
    /// Internal update.
    DoUpdate,
    /// Deletion by id.
    Delete,
    /// Persisted check.
    IsZero
}

impl Capability {
    /// Every capability, in output order.
    pub const ALL: [Self; 10] = [
        Self::JoinSql,
        Self::Get,
        Self::GetAny,
        Self::Save,
        Self::Create,
        Self::DoCreate,
        Self::Update,
        Self::DoUpdate,
        Self::Delete,
        Self::IsZero
    ];

    /// Tag used on the command line.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::JoinSql => "join_sql",
            Self::Get => "get",
            Self::GetAny => "get_any",
            Self::Save => "save",
            Self::Create => "create",
            Self::DoCreate => "do_create",
            Self::Update => "update",
            Self::DoUpdate => "do_update",
            Self::Delete => "delete",
            Self::IsZero => "is_zero"
        }
    }

    /// Capability for a tag, exact match only.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag() == tag)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Fully resolved variables for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Type name as declared (`UserProfile`).
    pub model_name:       String,
    /// Type name in lower case (`userprofile`).
    pub model_name_lc:    String,
    /// Storage table.
    pub table_name:       String,
    /// Local variable for a model instance (`u`).
    pub model_var:        String,
    /// Module path the model is reachable at.
    pub package:          String,
    /// Module name of the generated implementation file.
    pub generated_module: String,
    /// Insert statement.
    pub create_stmt:      String,
    /// Update statement.
    pub update_stmt:      String,
    /// `"a", "b"` column list.
    pub fields_as_array:  String,
    /// Excluded capability tags.
    pub excluded:         BTreeSet<String>,
    /// Single-name mode.
    pub single_name:      bool,
    /// Generated code assigns ids itself.
    pub auto_id:          bool
}

impl RenderContext {
    /// Assemble the context from a defaulted request and its derived parts.
    pub fn assemble(
        request: &GenerationRequest,
        names: Names,
        statements: Statements,
        generated_module: String
    ) -> Self {
        for tag in &request.excluded {
            if Capability::from_tag(tag).is_none() {
                warn!(%tag, "exclusion does not match any generated member");
            }
        }

        Self {
            model_name: request.type_name.clone(),
            model_name_lc: names.model_name_lc,
            table_name: names.table,
            model_var: names.model_var,
            package: request.package.clone(),
            generated_module,
            create_stmt: statements.insert,
            update_stmt: statements.update,
            fields_as_array: statements.fields_literal,
            excluded: request.excluded.clone(),
            single_name: request.single_name,
            auto_id: request.auto_id
        }
    }

    /// Whether `capability` is generated: false iff its tag was excluded.
    #[must_use]
    pub fn generates(&self, capability: Capability) -> bool {
        !self.excluded.contains(capability.tag())
    }

    /// Type name, or nothing in single-name mode.
    #[must_use]
    pub fn optional_name(&self) -> &str {
        if self.single_name {
            ""
        } else {
            &self.model_name
        }
    }

    /// Free function name built around the optional name.
    ///
    /// ```text
    /// fn_name("get", "by_id")  →  get_by_id           (single-name)
    ///                          →  get_user_by_id      (otherwise)
    /// ```
    #[must_use]
    pub fn fn_name(&self, prefix: &str, suffix: &str) -> String {
        let middle = self.optional_name().to_case(Case::Snake);
        [prefix, middle.as_str(), suffix]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_")
    }

    /// [`Self::fn_name`] as an identifier.
    #[must_use]
    pub fn fn_ident(&self, prefix: &str, suffix: &str) -> Ident {
        Ident::new(&self.fn_name(prefix, suffix), Span::call_site())
    }

    /// Test function name: type name in snake case plus `suffix`.
    #[must_use]
    pub fn test_ident(&self, suffix: &str) -> Ident {
        let name = format!("{}_{suffix}", self.model_name.to_case(Case::Snake));
        Ident::new(&name, Span::call_site())
    }

    /// Type name as an identifier.
    #[must_use]
    pub fn model_ident(&self) -> Ident {
        Ident::new(&self.model_name, Span::call_site())
    }

    /// Local variable as an identifier.
    #[must_use]
    pub fn var_ident(&self) -> Ident {
        Ident::new(&self.model_var, Span::call_site())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Context for `User { id, name }` with default options.
    pub(crate) fn user_context() -> RenderContext {
        RenderContext {
            model_name:       "User".into(),
            model_name_lc:    "user".into(),
            table_name:       "user".into(),
            model_var:        "u".into(),
            package:          "models".into(),
            generated_module: "user_generated".into(),
            create_stmt:      "INSERT INTO user (id, name) VALUES (:id, :name)".into(),
            update_stmt:      "UPDATE user SET id=:id, name=:name WHERE id=:id".into(),
            fields_as_array:  r#""id", "name""#.into(),
            excluded:         BTreeSet::new(),
            single_name:      true,
            auto_id:          true
        }
    }

    #[test]
    fn tags_round_trip() {
        for capability in Capability::ALL {
            assert_eq!(Capability::from_tag(capability.tag()), Some(capability));
        }
    }

    #[test]
    fn tags_match_exactly() {
        assert_eq!(Capability::from_tag("Save"), None);
        assert_eq!(Capability::from_tag(" save"), None);
        assert_eq!(Capability::from_tag("do_*"), None);
    }

    #[test]
    fn everything_is_generated_without_exclusions() {
        let ctx = user_context();
        assert!(Capability::ALL.into_iter().all(|c| ctx.generates(c)));
    }

    #[test]
    fn exclusion_disables_only_its_capability() {
        let mut ctx = user_context();
        ctx.excluded.insert("do_create".into());
        for capability in Capability::ALL {
            assert_eq!(ctx.generates(capability), capability != Capability::DoCreate);
        }
    }

    #[test]
    fn exclusion_is_case_sensitive() {
        let mut ctx = user_context();
        ctx.excluded.insert("DELETE".into());
        assert!(ctx.generates(Capability::Delete));
    }

    #[test]
    fn optional_name_follows_single_mode() {
        let mut ctx = user_context();
        assert_eq!(ctx.optional_name(), "");
        assert_eq!(ctx.fn_name("get", "by_id"), "get_by_id");
        assert_eq!(ctx.fn_name("join", "sql"), "join_sql");

        ctx.single_name = false;
        ctx.model_name = "UserProfile".into();
        assert_eq!(ctx.optional_name(), "UserProfile");
        assert_eq!(ctx.fn_name("get", "by_id"), "get_user_profile_by_id");
        assert_eq!(ctx.fn_name("get_any", "by_id"), "get_any_user_profile_by_id");
    }

    #[test]
    fn test_names_carry_the_type() {
        let ctx = user_context();
        assert_eq!(ctx.test_ident("save_new").to_string(), "user_save_new");
    }
}
