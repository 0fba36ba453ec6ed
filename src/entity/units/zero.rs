// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persisted check.

use proc_macro2::TokenStream;
use quote::quote;

use super::{GenerationUnit, UUID};
use crate::entity::context::{Capability, RenderContext};

pub struct IsZero;

impl GenerationUnit for IsZero {
    fn capability(&self) -> Capability {
        Capability::IsZero
    }

    fn test_imports(&self, _ctx: &RenderContext) -> Vec<&'static str> {
        vec![UUID]
    }

    fn emit(&self, ctx: &RenderContext) -> syn::Result<TokenStream> {
        let model = ctx.model_ident();
        Ok(quote! {
            impl #model {
                /// Whether the model has not been persisted yet (no id).
                pub fn is_zero(&self) -> bool {
                    self.id.is_empty()
                }
            }
        })
    }

    fn emit_tests(&self, ctx: &RenderContext) -> syn::Result<TokenStream> {
        let model = ctx.model_ident();
        let test_name = ctx.test_ident("is_zero");

        Ok(quote! {
            #[test]
            fn #test_name() {
                let empty = #model::default();
                assert!(empty.is_zero(), "is_zero() should return true for an empty struct");

                let valid = #model {
                    id: Uuid::new_v4().to_string(),
                    ..Default::default()
                };
                assert!(!valid.is_zero(), "is_zero() should return false for a valid struct");
            }
        })
    }
}
