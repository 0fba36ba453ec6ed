// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Lookup by id.
//!
//! Two flavours share one unit type: the active lookup skips soft-deleted
//! rows, the `any` lookup returns them too.

use proc_macro2::TokenStream;
use quote::quote;

use super::{EXPECTED_ID, GenerationUnit, MOCK, QUERYABLE, harness_ident};
use crate::entity::{
    context::{Capability, RenderContext},
    sql::select_by_id
};

pub struct GetById {
    /// Include soft-deleted rows.
    pub any: bool
}

impl GetById {
    fn prefix(&self) -> &'static str {
        if self.any { "get_any" } else { "get" }
    }
}

impl GenerationUnit for GetById {
    fn capability(&self) -> Capability {
        if self.any {
            Capability::GetAny
        } else {
            Capability::Get
        }
    }

    fn imports(&self, _ctx: &RenderContext) -> Vec<&'static str> {
        vec![QUERYABLE]
    }

    fn test_imports(&self, _ctx: &RenderContext) -> Vec<&'static str> {
        vec![MOCK]
    }

    fn emit(&self, ctx: &RenderContext) -> syn::Result<TokenStream> {
        let fn_name = ctx.fn_ident(self.prefix(), "by_id");
        let model = ctx.model_ident();
        let var = ctx.var_ident();
        let stmt = select_by_id(&ctx.table_name, !self.any);
        let doc = if self.any {
            format!(" Finds a {} by id, deleted ones included.", ctx.model_name_lc)
        } else {
            format!(" Finds an active {} by id.", ctx.model_name_lc)
        };

        Ok(quote! {
            #[doc = #doc]
            pub fn #fn_name(q: &impl Queryable, id: &str) -> anyhow::Result<#model> {
                let mut #var = #model::default();
                let stmt = #stmt;
                q.get(&mut #var, stmt, id)?;
                Ok(#var)
            }
        })
    }

    fn emit_tests(&self, ctx: &RenderContext) -> syn::Result<TokenStream> {
        let fn_name = ctx.fn_ident(self.prefix(), "by_id");
        let test_name = ctx.test_ident(&format!("{}_by_id", self.prefix()));
        let t = harness_ident();
        let msg = format!("{fn_name}() should not have failed");

        Ok(quote! {
            #[test]
            fn #test_name() {
                let expected_id = #EXPECTED_ID;
                let mut #t = MockQueryable::new();
                #t.expect_get_id(expected_id);

                let result = #fn_name(&#t, expected_id);
                assert!(result.is_ok(), #msg);
            }
        })
    }
}
