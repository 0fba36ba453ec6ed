// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # entity-crudgen
//!
//! Generates CRUD persistence members, and tests for them, from a struct
//! whose persisted fields carry a `#[db = "column"]` tag.
//!
//! ## Quick Start
//!
//! Given `src/models/user.rs`:
//!
//! ```rust,ignore
//! #[derive(Debug, Default)]
//! pub struct User {
//!     #[db = "id"]
//!     pub id: String,
//!
//!     #[db = "name"]
//!     pub name: String,
//!
//!     #[db = "created_at"]
//!     pub created_at: Option<DateTime<Utc>>,
//!
//!     #[db = "updated_at"]
//!     pub updated_at: Option<DateTime<Utc>>,
//! }
//! ```
//!
//! ```rust,no_run
//! use entity_crudgen::{GenerationRequest, generate};
//!
//! let request = GenerationRequest::new("User", "src/models/user.rs", "models")
//!     .with_excluded(["join_sql"]);
//! let files = generate(request)?;
//! assert!(files.implementation.ends_with("user_generated.rs"));
//! # Ok::<(), entity_crudgen::Error>(())
//! ```
//!
//! Writes `src/models/user_generated.rs` with `get_by_id`, `get_any_by_id`,
//! `User::save`, `User::create`, `User::update`, `User::delete`,
//! `User::is_zero` and their internal helpers, and
//! `src/models/user_generated_test.rs` exercising each of them against
//! `sqldb::mock::MockQueryable`.
//!
//! ## Exclusions
//!
//! | Tag | Member |
//! |-----|--------|
//! | `join_sql` | `join_sql(prefix)` |
//! | `get` / `get_any` | `get_by_id` / `get_any_by_id` |
//! | `save` | `save` |
//! | `create` / `do_create` | `create` / `do_create` |
//! | `update` / `do_update` | `update` / `do_update` |
//! | `delete` | `delete` |
//! | `is_zero` | `is_zero` |
//!
//! Excluding a tag removes its member from the implementation and its
//! tests from the test file. Nothing else changes.

mod entity;
mod error;
mod utils;

pub use entity::{
    context::{Capability, RenderContext},
    generate,
    naming::{Names, QUERYABLE_VAR, RESERVED_VAR, apply_defaults, default_table, model_var, resolve},
    parse::{
        Declaration, DeclarationTable, FieldDescriptor, TAG_KEY, column_from_tag, extract_fields
    },
    prepare,
    render::{GeneratedFiles, Target, render, write, write_all},
    request::{GenerationRequest, parse_exclusions},
    sql::{ID_COLUMN, Statements, delete_by_id, select_by_id},
    units::{GenerationUnit, all as all_units, selected as selected_units}
};
pub use error::{Error, RequiredField, Result, TargetError};
pub use utils::{
    marker::{GENERATED_HEADER, is_generated},
    paths::{implementation_path, test_path}
};
