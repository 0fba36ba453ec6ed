// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Update of a persisted model.
//!
//! Both members refuse a model without an id; `do_update` checks again
//! because it is reachable on its own.

use proc_macro2::TokenStream;
use quote::quote;

use super::{GenerationUnit, MOCK, QUERYABLE, UTC, UUID, harness_ident};
use crate::entity::context::{Capability, RenderContext};

pub struct Update;

pub struct DoUpdate;

fn require_id(ctx: &RenderContext) -> TokenStream {
    let msg = format!("cannot update a non-persisted {}", ctx.model_name_lc);
    quote! {
        if self.id.is_empty() {
            anyhow::bail!(#msg);
        }
    }
}

impl GenerationUnit for Update {
    fn capability(&self) -> Capability {
        Capability::Update
    }

    fn imports(&self, _ctx: &RenderContext) -> Vec<&'static str> {
        vec![QUERYABLE]
    }

    fn test_imports(&self, _ctx: &RenderContext) -> Vec<&'static str> {
        vec![MOCK, UUID]
    }

    fn emit(&self, ctx: &RenderContext) -> syn::Result<TokenStream> {
        let model = ctx.model_ident();
        let guard = require_id(ctx);
        let doc = format!(" Updates a persisted {}.", ctx.model_name_lc);

        Ok(quote! {
            impl #model {
                #[doc = #doc]
                pub fn update(&mut self, q: &impl Queryable) -> anyhow::Result<()> {
                    #guard
                    self.do_update(q)
                }
            }
        })
    }

    fn emit_tests(&self, ctx: &RenderContext) -> syn::Result<TokenStream> {
        let model = ctx.model_ident();
        let var = ctx.var_ident();
        let t = harness_ident();
        let ok_test = ctx.test_ident("update");
        let no_id_test = ctx.test_ident("update_without_id");

        Ok(quote! {
            #[test]
            fn #ok_test() {
                let mut #t = MockQueryable::new();
                #t.expect_update_success();

                let mut #var = #model::default();
                #var.id = Uuid::new_v4().to_string();
                let result = #var.update(&#t);

                assert!(result.is_ok(), "update() should not have failed");
                assert!(#var.updated_at.is_some(), "updated_at should have been set");
            }

            #[test]
            fn #no_id_test() {
                let #t = MockQueryable::new();

                let mut #var = #model::default();
                let result = #var.update(&#t);

                assert!(result.is_err(), "update() should have failed");
            }
        })
    }
}

impl GenerationUnit for DoUpdate {
    fn capability(&self) -> Capability {
        Capability::DoUpdate
    }

    fn imports(&self, _ctx: &RenderContext) -> Vec<&'static str> {
        vec![QUERYABLE, UTC]
    }

    fn test_imports(&self, _ctx: &RenderContext) -> Vec<&'static str> {
        vec![MOCK, UUID]
    }

    fn emit(&self, ctx: &RenderContext) -> syn::Result<TokenStream> {
        let model = ctx.model_ident();
        let guard = require_id(ctx);
        let stmt = &ctx.update_stmt;

        Ok(quote! {
            impl #model {
                /// Writes every column of the row, stamping `updated_at`.
                pub(super) fn do_update(&mut self, q: &impl Queryable) -> anyhow::Result<()> {
                    #guard
                    self.updated_at = Some(Utc::now());

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
        let ok_test = ctx.test_ident("do_update");
        let no_id_test = ctx.test_ident("do_update_without_id");
        let fail_test = ctx.test_ident("do_update_fail");

        Ok(quote! {
            #[test]
            fn #ok_test() {
                let mut #t = MockQueryable::new();
                #t.expect_update_success();

                let mut #var = #model::default();
                #var.id = Uuid::new_v4().to_string();
                let result = #var.do_update(&#t);

                assert!(result.is_ok(), "do_update() should not have failed");
                assert!(!#var.id.is_empty(), "id should have been kept");
                assert!(#var.updated_at.is_some(), "updated_at should have been set");
            }

            #[test]
            fn #no_id_test() {
                let #t = MockQueryable::new();

                let mut #var = #model::default();
                let result = #var.do_update(&#t);

                assert!(result.is_err(), "do_update() should have failed");
            }

            #[test]
            fn #fail_test() {
                let mut #t = MockQueryable::new();
                #t.expect_update_error("sql error");

                let mut #var = #model::default();
                #var.id = Uuid::new_v4().to_string();
                let result = #var.do_update(&#t);

                assert!(result.is_err(), "do_update() should have failed");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::context::tests::user_context;

    fn pretty(tokens: TokenStream) -> String {
        prettyplease::unparse(&syn::parse2(tokens).unwrap())
    }

    #[test]
    fn do_update_runs_the_update_statement() {
        let text = pretty(DoUpdate.emit(&user_context()).unwrap());
        assert!(text.contains("UPDATE user SET id=:id, name=:name WHERE id=:id"));
        assert!(text.contains("cannot update a non-persisted user"));
    }

    #[test]
    fn update_delegates_after_id_check() {
        let text = pretty(Update.emit(&user_context()).unwrap());
        assert!(text.contains("cannot update a non-persisted user"));
        assert!(text.contains("self.do_update(q)"));
    }

    #[test]
    fn update_tests_cover_missing_id() {
        let text = pretty(Update.emit_tests(&user_context()).unwrap());
        assert!(text.contains("fn user_update()"));
        assert!(text.contains("fn user_update_without_id()"));
    }
}
