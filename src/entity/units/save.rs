// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Insert-or-update dispatch.

use proc_macro2::TokenStream;
use quote::quote;

use super::{GenerationUnit, MOCK, QUERYABLE, UUID, harness_ident};
use crate::entity::context::{Capability, RenderContext};

pub struct Save;

impl GenerationUnit for Save {
    fn capability(&self) -> Capability {
        Capability::Save
    }

    fn imports(&self, _ctx: &RenderContext) -> Vec<&'static str> {
        vec![QUERYABLE]
    }

    fn test_imports(&self, ctx: &RenderContext) -> Vec<&'static str> {
        if ctx.auto_id {
            vec![MOCK, UUID]
        } else {
            Vec::new()
        }
    }

    fn emit(&self, ctx: &RenderContext) -> syn::Result<TokenStream> {
        let model = ctx.model_ident();
        let doc = format!(
            " Creates or updates the {} depending on whether it already has an id.",
            ctx.model_name_lc
        );

        Ok(quote! {
            impl #model {
                #[doc = #doc]
                pub fn save(&mut self, q: &impl Queryable) -> anyhow::Result<()> {
                    if self.id.is_empty() {
                        return self.create(q);
                    }
                    self.update(q)
                }
            }
        })
    }

    /// Without auto-id a new model cannot be saved without an id, so there
    /// is nothing meaningful to test.
    fn emit_tests(&self, ctx: &RenderContext) -> syn::Result<TokenStream> {
        if !ctx.auto_id {
            return Ok(TokenStream::new());
        }

        let model = ctx.model_ident();
        let var = ctx.var_ident();
        let t = harness_ident();
        let new_test = ctx.test_ident("save_new");
        let existing_test = ctx.test_ident("save_existing");

        Ok(quote! {
            #[test]
            fn #new_test() {
                let mut #t = MockQueryable::new();
                #t.expect_insert_success();

                let mut #var = #model::default();
                let result = #var.save(&#t);

                assert!(result.is_ok(), "save() should not have failed");
                assert!(!#var.id.is_empty(), "id should have been set");
            }

            #[test]
            fn #existing_test() {
                let mut #t = MockQueryable::new();
                #t.expect_update_success();

                let mut #var = #model::default();
                let id = Uuid::new_v4().to_string();
                #var.id = id.clone();
                let result = #var.save(&#t);

                assert!(result.is_ok(), "save() should not have failed");
                assert_eq!(#var.id, id, "id should not have changed");
            }
        })
    }
}
