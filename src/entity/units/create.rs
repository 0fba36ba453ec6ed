// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Insertion.
//!
//! `create` is the public entry point; `do_create` does the work and is kept
//! `pub(super)` so sibling modules (the generated tests) can reach it.
//!
//! | Mode | `create` | `do_create` |
//! |------|----------|-------------|
//! | auto-id | refuses a model with an id | assigns a fresh UUID |
//! | manual id | delegates | keeps the caller's id |

use proc_macro2::TokenStream;
use quote::quote;

use super::{DURATION, GenerationUnit, MOCK, QUERYABLE, UTC, UUID, harness_ident};
use crate::entity::context::{Capability, RenderContext};

pub struct Create;

pub struct DoCreate;

/// `u.id = Uuid::new_v4().to_string();` when the caller must supply the id.
fn manual_id(ctx: &RenderContext) -> TokenStream {
    if ctx.auto_id {
        return TokenStream::new();
    }
    let var = ctx.var_ident();
    quote! { #var.id = Uuid::new_v4().to_string(); }
}

impl GenerationUnit for Create {
    fn capability(&self) -> Capability {
        Capability::Create
    }

    fn imports(&self, _ctx: &RenderContext) -> Vec<&'static str> {
        vec![QUERYABLE]
    }

    fn test_imports(&self, _ctx: &RenderContext) -> Vec<&'static str> {
        vec![MOCK, UUID]
    }

    fn emit(&self, ctx: &RenderContext) -> syn::Result<TokenStream> {
        let model = ctx.model_ident();
        let doc = format!(" Persists a new {} in the database.", ctx.model_name_lc);
        let id_guard = if ctx.auto_id {
            let msg = format!("cannot persist a {} that already has an id", ctx.model_name_lc);
            quote! {
                if !self.id.is_empty() {
                    anyhow::bail!(#msg);
                }
            }
        } else {
            TokenStream::new()
        };

        Ok(quote! {
            impl #model {
                #[doc = #doc]
                pub fn create(&mut self, q: &impl Queryable) -> anyhow::Result<()> {
                    #id_guard
                    self.do_create(q)
                }
            }
        })
    }

    fn emit_tests(&self, ctx: &RenderContext) -> syn::Result<TokenStream> {
        let model = ctx.model_ident();
        let var = ctx.var_ident();
        let t = harness_ident();
        let create_test = ctx.test_ident("create");
        let manual_id = manual_id(ctx);

        let with_id_test = if ctx.auto_id {
            let test_name = ctx.test_ident("create_with_id");
            quote! {
                #[test]
                fn #test_name() {
                    let #t = MockQueryable::new();

                    let mut #var = #model::default();
                    #var.id = Uuid::new_v4().to_string();
                    let result = #var.create(&#t);

                    assert!(result.is_err(), "create() should have failed");
                }
            }
        } else {
            TokenStream::new()
        };

        Ok(quote! {
            #[test]
            fn #create_test() {
                let mut #t = MockQueryable::new();
                #t.expect_insert_success();

                let mut #var = #model::default();
                #manual_id
                let result = #var.create(&#t);

                assert!(result.is_ok(), "create() should not have failed");
                assert!(!#var.id.is_empty(), "id should have been set");
                assert!(#var.created_at.is_some(), "created_at should have been set");
                assert!(#var.updated_at.is_some(), "updated_at should have been set");
            }

            #with_id_test
        })
    }
}

impl GenerationUnit for DoCreate {
    fn capability(&self) -> Capability {
        Capability::DoCreate
    }

    fn imports(&self, ctx: &RenderContext) -> Vec<&'static str> {
        if ctx.auto_id {
            vec![QUERYABLE, UTC, UUID]
        } else {
            vec![QUERYABLE, UTC]
        }
    }

    fn test_imports(&self, ctx: &RenderContext) -> Vec<&'static str> {
        if ctx.auto_id {
            vec![MOCK, UTC, DURATION]
        } else {
            vec![MOCK, UTC, DURATION, UUID]
        }
    }

    fn emit(&self, ctx: &RenderContext) -> syn::Result<TokenStream> {
        let model = ctx.model_ident();
        let stmt = &ctx.create_stmt;
        let assign_id = if ctx.auto_id {
            quote! { self.id = Uuid::new_v4().to_string(); }
        } else {
            TokenStream::new()
        };

        Ok(quote! {
            impl #model {
                /// Inserts the row, stamping `updated_at` and, when unset, `created_at`.
                pub(super) fn do_create(&mut self, q: &impl Queryable) -> anyhow::Result<()> {
                    #assign_id
                    let now = Utc::now();
                    self.updated_at = Some(now);
                    if self.created_at.is_none() {
                        self.created_at = Some(now);
                    }

                    let stmt = #stmt;
                    q.named_exec(stmt, &*self)?;
                    Ok(())
                }
            }
        })
    }

    fn emit_tests(&self, ctx: &RenderContext) -> syn::Result<TokenStream> {
        let model = ctx.model_ident();
        let var = ctx.var_ident();
        let t = harness_ident();
        let manual_id = manual_id(ctx);
        let ok_test = ctx.test_ident("do_create");
        let date_test = ctx.test_ident("do_create_with_date");
        let fail_test = ctx.test_ident("do_create_fail");

        Ok(quote! {
            #[test]
            fn #ok_test() {
                let mut #t = MockQueryable::new();
                #t.expect_insert_success();

                let mut #var = #model::default();
                #manual_id
                let result = #var.do_create(&#t);

                assert!(result.is_ok(), "do_create() should not have failed");
                assert!(!#var.id.is_empty(), "id should have been set");
                assert!(#var.created_at.is_some(), "created_at should have been set");
                assert!(#var.updated_at.is_some(), "updated_at should have been set");
            }

            #[test]
            fn #date_test() {
                let mut #t = MockQueryable::new();
                #t.expect_insert_success();

                let created_at = Utc::now() + Duration::days(1);
                let mut #var = #model {
                    created_at: Some(created_at),
                    ..Default::default()
                };
                #manual_id
                let result = #var.do_create(&#t);

                assert!(result.is_ok(), "do_create() should not have failed");
                assert!(!#var.id.is_empty(), "id should have been set");
                assert_eq!(
                    #var.created_at,
                    Some(created_at),
                    "created_at should not have been updated"
                );
                assert!(#var.updated_at.is_some(), "updated_at should have been set");
            }

            #[test]
            fn #fail_test() {
                let mut #t = MockQueryable::new();
                #t.expect_insert_error("sql error");

                let mut #var = #model::default();
                let result = #var.do_create(&#t);

                assert!(result.is_err(), "do_create() should have failed");
            }
        })
    }
}
