// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! JOIN column helper.
//!
//! ```rust,ignore
//! join_sql("author")
//! // author.id "author.id", author.name "author.name"
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::ExprArray;

use super::GenerationUnit;
use crate::entity::context::{Capability, RenderContext};

pub struct JoinSql;

impl JoinSql {
    /// Column list literal as an array expression.
    fn fields(ctx: &RenderContext) -> syn::Result<ExprArray> {
        syn::parse_str(&format!("[{}]", ctx.fields_as_array))
    }
}

impl GenerationUnit for JoinSql {
    fn capability(&self) -> Capability {
        Capability::JoinSql
    }

    fn emit(&self, ctx: &RenderContext) -> syn::Result<TokenStream> {
        let fn_name = ctx.fn_ident("join", "sql");
        let fields = Self::fields(ctx)?;
        let doc = format!(
            " Returns the columns of `{}` prefixed with `prefix`, each aliased to its",
            ctx.table_name
        );

        Ok(quote! {
            #[doc = #doc]
            /// prefixed name, ready to be embedded in a JOIN query.
            pub fn #fn_name(prefix: &str) -> String {
                const FIELDS: &[&str] = &#fields;
                FIELDS
                    .iter()
                    .map(|field| format!("{prefix}.{field} \"{prefix}.{field}\""))
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        })
    }

    fn emit_tests(&self, ctx: &RenderContext) -> syn::Result<TokenStream> {
        let fn_name = ctx.fn_ident("join", "sql");
        let test_name = ctx.test_ident("join_sql_aliases_every_field");
        let fields = Self::fields(ctx)?;
        let count_msg = "wrong number of fields returned";
        let suffix_msg = format!("{fn_name}() output should end with a \"");

        Ok(quote! {
            #[test]
            fn #test_name() {
                let fields: &[&str] = &#fields;
                let output = #fn_name("tofind");

                assert_eq!(output.matches("tofind.").count(), fields.len() * 2, #count_msg);
                assert!(output.ends_with('"'), #suffix_msg);
            }
        })
    }
}
