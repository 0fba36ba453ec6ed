// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dual renderer.
//!
//! Turns one [`RenderContext`] into two files: the implementation and its
//! tests. Both are produced the same way:
//!
//! ```text
//! selected units ──► imports (sorted, deduplicated)
//!                └─► items / test fns
//!                        │
//!                        ▼
//!               syn::File ──► prettyplease ──► header + trim ──► file
//! ```
//!
//! The targets do not depend on each other. Both are always attempted and
//! their failures are reported together as [`Error::Targets`].

use std::{
    collections::BTreeSet,
    fmt, fs,
    path::{Path, PathBuf}
};

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, Path as SynPath};
use tracing::{debug, info, warn};

use super::{
    context::RenderContext,
    units::{self, GenerationUnit}
};
use crate::{
    error::{Error, Result, TargetError},
    utils::{marker, paths}
};

/// One of the two generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Persistence members.
    Implementation,
    /// Tests of those members.
    Tests
}

impl Target {
    /// Both targets, in the order they are written.
    pub const BOTH: [Self; 2] = [Self::Implementation, Self::Tests];

    /// Where this target is written for `source`.
    pub fn output_path(self, source: &Path) -> PathBuf {
        match self {
            Self::Implementation => paths::implementation_path(source),
            Self::Tests => paths::test_path(source)
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Implementation => "implementation",
            Self::Tests => "tests"
        })
    }
}

/// Paths of the files written by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    /// Implementation file.
    pub implementation: PathBuf,
    /// Test file.
    pub tests:          PathBuf
}

/// Render `target` to source text.
///
/// # Errors
///
/// [`Error::Template`] when a context value is not a valid identifier or
/// path, or when the emitted tokens do not form a valid file.
pub fn render(target: Target, ctx: &RenderContext) -> Result<String> {
    check_context(target, ctx)?;

    let selected = units::selected(ctx);
    debug!(
        %target,
        units = ?selected.iter().map(|u| u.name()).collect::<Vec<_>>(),
        "rendering"
    );

    let mut body = TokenStream::new();
    for unit in &selected {
        let tokens = match target {
            Target::Implementation => unit.emit(ctx),
            Target::Tests => unit.emit_tests(ctx)
        }
        .map_err(|err| Error::template(target, format!("{}: {err}", unit.name())))?;
        body.extend(tokens);
    }

    let prelude = prelude(target, ctx, &selected)?;
    let file: syn::File =
        syn::parse2(quote! { #prelude #body }).map_err(|err| Error::template(target, err))?;

    Ok(marker::with_header(&prettyplease::unparse(&file)))
}

/// Render `target` and write it next to `source`, truncating any previous
/// output.
///
/// # Errors
///
/// Whatever [`render`] returns, or [`Error::Io`] when the file cannot be
/// written.
pub fn write(target: Target, ctx: &RenderContext, source: &Path) -> Result<PathBuf> {
    let text = render(target, ctx)?;
    let path = target.output_path(source);
    fs::write(&path, text).map_err(|err| Error::io("write", &path, err))?;
    info!(%target, path = %path.display(), "wrote generated file");
    Ok(path)
}

/// Render and write both targets.
///
/// # Errors
///
/// [`Error::Targets`] listing every target that failed. A target that
/// succeeded stays written.
pub fn write_all(ctx: &RenderContext, source: &Path) -> Result<GeneratedFiles> {
    let mut failures = Vec::new();
    for target in Target::BOTH {
        if let Err(err) = write(target, ctx, source) {
            warn!(%target, error = %err, "target failed");
            failures.push(TargetError {
                target,
                source: Box::new(err)
            });
        }
    }

    if !failures.is_empty() {
        return Err(Error::Targets(failures));
    }
    Ok(GeneratedFiles {
        implementation: Target::Implementation.output_path(source),
        tests:          Target::Tests.output_path(source)
    })
}

/// Values `target` splices into the output as identifiers or paths must
/// parse as such; `Ident::new` would panic on them otherwise. The generated
/// module name only appears in the tests.
fn check_context(target: Target, ctx: &RenderContext) -> Result<()> {
    let mut idents = vec![("type name", &ctx.model_name), ("model variable", &ctx.model_var)];
    if target == Target::Tests {
        idents.push(("generated module", &ctx.generated_module));
    }
    for (what, value) in idents {
        if syn::parse_str::<Ident>(value).is_err() {
            return Err(Error::template(target, format!("{what} `{value}` is not an identifier")));
        }
    }
    package_path(target, ctx).map(drop)
}

fn package_path(target: Target, ctx: &RenderContext) -> Result<SynPath> {
    match syn::parse_str::<SynPath>(&ctx.package) {
        Ok(path) if path.leading_colon.is_none() => Ok(path),
        _ => Err(Error::template(
            target,
            format!("package `{}` is not a module path", ctx.package)
        ))
    }
}

/// Inner attributes and `use` items of a target.
fn prelude(
    target: Target,
    ctx: &RenderContext,
    selected: &[&'static dyn GenerationUnit]
) -> Result<TokenStream> {
    let wanted: BTreeSet<&'static str> = selected
        .iter()
        .flat_map(|unit| match target {
            Target::Implementation => unit.imports(ctx),
            Target::Tests => unit.test_imports(ctx)
        })
        .collect();

    let mut imports = Vec::with_capacity(wanted.len());
    for import in wanted {
        let path: SynPath = syn::parse_str(import).map_err(|err| Error::template(target, err))?;
        imports.push(path);
    }

    let package = package_path(target, ctx)?;
    let model = ctx.model_ident();

    Ok(match target {
        Target::Implementation => quote! {
            #(use #imports;)*

            use crate::#package::#model;
        },
        Target::Tests => {
            let module = Ident::new(&ctx.generated_module, proc_macro2::Span::call_site());
            quote! {
                #![cfg(test)]

                #(use #imports;)*

                use super::#module::*;
                use crate::#package::#model;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::context::tests::user_context;

    #[test]
    fn implementation_has_header_imports_and_members() {
        let text = render(Target::Implementation, &user_context()).unwrap();
        assert!(marker::is_generated(&text));
        assert!(text.contains("use chrono::Utc;"));
        assert!(text.contains("use sqldb::Queryable;"));
        assert!(text.contains("use uuid::Uuid;"));
        assert!(text.contains("use crate::models::User;"));
        for member in [
            "pub fn join_sql(",
            "pub fn get_by_id(",
            "pub fn get_any_by_id(",
            "pub fn save(",
            "pub fn create(",
            "pub(super) fn do_create(",
            "pub fn update(",
            "pub(super) fn do_update(",
            "pub fn delete(",
            "pub fn is_zero("
        ] {
            assert!(text.contains(member), "missing {member}");
        }
        assert!(!text.contains("MockQueryable"));
    }

    #[test]
    fn tests_import_the_generated_module() {
        let text = render(Target::Tests, &user_context()).unwrap();
        assert!(text.contains("#![cfg(test)]"));
        assert!(text.contains("use super::user_generated::*;"));
        assert!(text.contains("use sqldb::mock::MockQueryable;"));
        assert!(text.contains("let mut t = MockQueryable::new();"));
        assert!(text.contains("fn user_is_zero()"));
    }

    #[test]
    fn imports_are_sorted() {
        let text = render(Target::Implementation, &user_context()).unwrap();
        let chrono = text.find("use chrono::Utc;").unwrap();
        let sqldb = text.find("use sqldb::Queryable;").unwrap();
        let uuid = text.find("use uuid::Uuid;").unwrap();
        assert!(chrono < sqldb && sqldb < uuid);
    }

    #[test]
    fn rendering_is_deterministic() {
        let ctx = user_context();
        for target in Target::BOTH {
            assert_eq!(render(target, &ctx).unwrap(), render(target, &ctx).unwrap());
        }
    }

    #[test]
    fn exclusion_removes_only_its_members() {
        let mut ctx = user_context();
        ctx.excluded.insert("delete".into());

        let implementation = render(Target::Implementation, &ctx).unwrap();
        assert!(!implementation.contains("pub fn delete("));
        assert!(implementation.contains("pub fn is_zero("));
        assert!(implementation.contains("pub(super) fn do_update("));

        let tests = render(Target::Tests, &ctx).unwrap();
        assert!(!tests.contains("fn user_delete"));
        assert!(tests.contains("fn user_do_update_fail()"));
        assert!(tests.contains("fn user_is_zero()"));
    }

    #[test]
    fn excluding_time_users_drops_the_clock_import() {
        let mut ctx = user_context();
        ctx.excluded.extend(["do_create".to_string(), "do_update".to_string()]);
        let text = render(Target::Implementation, &ctx).unwrap();
        assert!(!text.contains("use chrono::Utc;"));
        assert!(!text.contains("use uuid::Uuid;"));
    }

    #[test]
    fn everything_excluded_leaves_only_imports() {
        let mut ctx = user_context();
        ctx.excluded
            .extend(crate::entity::context::Capability::ALL.map(|c| c.tag().to_string()));
        let text = render(Target::Implementation, &ctx).unwrap();
        assert!(text.contains("use crate::models::User;"));
        assert!(!text.contains("fn "));
    }

    #[test]
    fn getter_queries_the_backend_not_the_model() {
        let mut ctx = user_context();
        ctx.model_name = "Quote".into();
        ctx.model_name_lc = "quote".into();
        ctx.model_var = crate::entity::naming::model_var("Quote").unwrap();

        let text = render(Target::Implementation, &ctx).unwrap();
        assert!(text.contains("let mut qu = Quote::default();"));
        assert!(text.contains("q.get(&mut qu, stmt, id)?;"));
        assert!(!text.contains("q.get(&mut q,"));
    }

    #[test]
    fn nested_package_is_a_module_path() {
        let mut ctx = user_context();
        ctx.package = "domain::models".into();
        let text = render(Target::Tests, &ctx).unwrap();
        assert!(text.contains("use crate::domain::models::User;"));
    }

    #[test]
    fn invalid_context_values_are_template_errors() {
        let mut ctx = user_context();
        ctx.package = "models::".into();
        let err = render(Target::Implementation, &ctx).unwrap_err();
        assert!(matches!(err, Error::Template { target: Target::Implementation, .. }));

        let mut ctx = user_context();
        ctx.generated_module = "user-model_generated".into();
        assert!(matches!(render(Target::Tests, &ctx), Err(Error::Template { .. })));
        assert!(render(Target::Implementation, &ctx).is_ok());

        let mut ctx = user_context();
        ctx.fields_as_array = "\"id\", ".repeat(2) + "(";
        assert!(matches!(
            render(Target::Implementation, &ctx),
            Err(Error::Template { .. })
        ));
    }

    #[test]
    fn output_paths_are_siblings() {
        let source = Path::new("src/models/user.rs");
        assert_eq!(
            Target::Implementation.output_path(source),
            Path::new("src/models/user_generated.rs")
        );
        assert_eq!(
            Target::Tests.output_path(source),
            Path::new("src/models/user_generated_test.rs")
        );
    }
}
