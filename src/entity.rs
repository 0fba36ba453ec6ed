// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation pipeline.
//!
//! Everything one invocation does, leaves first:
//!
//! ```text
//! GenerationRequest
//!   │ naming::apply_defaults      table default, required fields
//!   │ fs::read_to_string          source read once
//!   │ parse::extract_fields       tagged fields in declaration order
//!   │ naming::resolve             table, local variable, display name
//!   │ sql::Statements::build      insert / update / column list
//!   │ RenderContext::assemble     exclusions, single-name, auto-id
//!   ▼
//! render::write_all ──► stem_generated.rs + stem_generated_test.rs
//! ```
//!
//! Nothing survives an invocation; running it twice on the same input
//! produces the same files.

pub mod context;
pub mod naming;
pub mod parse;
pub mod render;
pub mod request;
pub mod sql;
pub mod units;

use std::fs;

use tracing::{debug, info};

use self::{
    context::RenderContext,
    render::GeneratedFiles,
    request::GenerationRequest,
    sql::Statements
};
use crate::{
    error::{Error, Result},
    utils::paths
};

/// Run the whole pipeline for one type.
///
/// # Errors
///
/// The first failure of any stage before rendering, or
/// [`Error::Targets`] when one or both outputs could not be produced.
pub fn generate(mut request: GenerationRequest) -> Result<GeneratedFiles> {
    naming::apply_defaults(&mut request)?;
    let ctx = prepare(&request)?;
    let files = render::write_all(&ctx, &request.source_path)?;
    info!(model = %ctx.model_name, table = %ctx.table_name, "generation finished");
    Ok(files)
}

/// Everything up to rendering: read, extract, resolve and assemble.
///
/// Expects a request that already went through
/// [`naming::apply_defaults`].
///
/// # Errors
///
/// [`Error::Io`] when the source cannot be read, any extraction error, or
/// [`Error::Validation`] when no local variable can be derived.
pub fn prepare(request: &GenerationRequest) -> Result<RenderContext> {
    let path = &request.source_path;
    let source = fs::read_to_string(path).map_err(|err| Error::io("read", path, err))?;
    debug!(path = %path.display(), bytes = source.len(), "read source");

    let fields = parse::extract_fields(&source, path, &request.type_name)?;
    let names = naming::resolve(request)?;
    let statements = Statements::build(&names.table, &fields);
    debug!(insert = %statements.insert, update = %statements.update, "built statements");

    Ok(RenderContext::assemble(
        request,
        names,
        statements,
        paths::generated_module(path)
    ))
}
