// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Deletion by id.

use proc_macro2::TokenStream;
use quote::quote;

use super::{GenerationUnit, MOCK, QUERYABLE, UUID, harness_ident};
use crate::entity::{
    context::{Capability, RenderContext},
    sql::delete_by_id
};

pub struct Delete;

impl GenerationUnit for Delete {
    fn capability(&self) -> Capability {
        Capability::Delete
    }

    fn imports(&self, _ctx: &RenderContext) -> Vec<&'static str> {
        vec![QUERYABLE]
    }

    fn test_imports(&self, _ctx: &RenderContext) -> Vec<&'static str> {
        vec![MOCK, UUID]
    }

    fn emit(&self, ctx: &RenderContext) -> syn::Result<TokenStream> {
        let model = ctx.model_ident();
        let stmt = delete_by_id(&ctx.table_name);
        let doc = format!(" Removes the {} from the database.", ctx.model_name_lc);
        let msg = format!("cannot delete a non-persisted {}", ctx.model_name_lc);

        Ok(quote! {
            impl #model {
                #[doc = #doc]
                pub fn delete(&self, q: &impl Queryable) -> anyhow::Result<()> {
                    if self.id.is_empty() {
                        anyhow::bail!(#msg);
                    }

                    let stmt = #stmt;
                    q.exec(stmt, &self.id)?;
                    Ok(())
                }
            }
        })
    }

    fn emit_tests(&self, ctx: &RenderContext) -> syn::Result<TokenStream> {
        let model = ctx.model_ident();
        let var = ctx.var_ident();
        let t = harness_ident();
        let ok_test = ctx.test_ident("delete");
        let no_id_test = ctx.test_ident("delete_without_id");
        let fail_test = ctx.test_ident("delete_error");

        Ok(quote! {
            #[test]
            fn #ok_test() {
                let mut #t = MockQueryable::new();
                #t.expect_deletion_success();

                let mut #var = #model::default();
                #var.id = Uuid::new_v4().to_string();
                let result = #var.delete(&#t);

                assert!(result.is_ok(), "delete() should not have failed");
            }

            #[test]
            fn #no_id_test() {
                let #t = MockQueryable::new();

                let #var = #model::default();
                let result = #var.delete(&#t);

                assert!(result.is_err(), "delete() should have failed");
            }

            #[test]
            fn #fail_test() {
                let mut #t = MockQueryable::new();
                #t.expect_deletion_error("sql error");

                let mut #var = #model::default();
                #var.id = Uuid::new_v4().to_string();
                let result = #var.delete(&#t);

                assert!(result.is_err(), "delete() should have failed");
            }
        })
    }
}
