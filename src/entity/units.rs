// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation units.
//!
//! Each [`Capability`] is produced by exactly one [`GenerationUnit`]. A unit
//! emits its implementation items and its tests separately, and names the
//! imports each of them needs. The renderer keeps the units the context
//! [`generates`](RenderContext::generates) and concatenates their output; no
//! unit looks at any other.
//!
//! # Generated Code Contract
//!
//! The emitted code expects:
//!
//! - the model to implement `Default` and to have `id: String`,
//!   `created_at: Option<DateTime<Utc>>` and `updated_at:
//!   Option<DateTime<Utc>>` fields
//! - a `sqldb` crate providing `Queryable` (`get`, `named_exec`, `exec`) and
//!   `mock::MockQueryable` with `expect_*` helpers
//! - `anyhow`, `chrono` and `uuid` as dependencies of the target crate

mod create;
mod delete;
mod get;
mod join;
mod save;
mod update;
mod zero;

use proc_macro2::{Ident, Span, TokenStream};

use super::{
    context::{Capability, RenderContext},
    naming::RESERVED_VAR
};

/// Import of the storage abstraction used by persisting members.
pub(crate) const QUERYABLE: &str = "sqldb::Queryable";
/// Import of the mock backend used by generated tests.
pub(crate) const MOCK: &str = "sqldb::mock::MockQueryable";
/// Import of the clock.
pub(crate) const UTC: &str = "chrono::Utc";
/// Import for date arithmetic in tests.
pub(crate) const DURATION: &str = "chrono::Duration";
/// Import of the id generator.
pub(crate) const UUID: &str = "uuid::Uuid";

/// One independently excludable piece of generated code.
pub trait GenerationUnit: Sync {
    /// Capability this unit produces.
    fn capability(&self) -> Capability;

    /// Name of the unit, the capability tag.
    fn name(&self) -> &'static str {
        self.capability().tag()
    }

    /// Paths the implementation items need in scope.
    fn imports(&self, _ctx: &RenderContext) -> Vec<&'static str> {
        Vec::new()
    }

    /// Paths the tests need in scope.
    fn test_imports(&self, _ctx: &RenderContext) -> Vec<&'static str> {
        Vec::new()
    }

    /// Implementation items.
    ///
    /// # Errors
    ///
    /// When a context value cannot be turned into tokens.
    fn emit(&self, ctx: &RenderContext) -> syn::Result<TokenStream>;

    /// Test functions.
    ///
    /// # Errors
    ///
    /// When a context value cannot be turned into tokens.
    fn emit_tests(&self, ctx: &RenderContext) -> syn::Result<TokenStream>;
}

static UNITS: [&dyn GenerationUnit; 10] = [
    &join::JoinSql,
    &get::GetById { any: false },
    &get::GetById { any: true },
    &save::Save,
    &create::Create,
    &create::DoCreate,
    &update::Update,
    &update::DoUpdate,
    &delete::Delete,
    &zero::IsZero
];

/// Every unit, in output order.
pub fn all() -> &'static [&'static dyn GenerationUnit] {
    &UNITS
}

/// Units whose capability survived the exclusion list, in output order.
pub fn selected(ctx: &RenderContext) -> Vec<&'static dyn GenerationUnit> {
    all()
        .iter()
        .copied()
        .filter(|unit| ctx.generates(unit.capability()))
        .collect()
}

/// Identifier the generated tests bind the mock backend to.
pub(crate) fn harness_ident() -> Ident {
    Ident::new(RESERVED_VAR, Span::call_site())
}

/// Fixed id the generated lookup tests query for.
pub(crate) const EXPECTED_ID: &str = "4408d5e1-b510-42cb-8ff8-788948a246dd";
