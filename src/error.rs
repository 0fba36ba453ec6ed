// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for the generation pipeline.
//!
//! Every stage returns [`Error`] and propagates it with `?`. The only failure
//! that is not immediate is the dual render: both targets are attempted and
//! their failures are collected into [`Error::Targets`].
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | `MissingField`, `Validation` | request defaults |
//! | `Parse`, `NotFound`, `TypeMismatch` | field extraction |
//! | `Io` | source read, output write |
//! | `Template` | rendering a single target |
//! | `Targets` | dual renderer |

use std::{fmt, io, path::PathBuf};

use crate::entity::render::Target;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Generation failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required request field was empty after defaulting.
    #[error("{0} missing")]
    MissingField(RequiredField),

    /// A request value could not be turned into something usable.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The source file is not syntactically valid Rust.
    #[error("could not parse {path}: {source}")]
    Parse {
        path:   PathBuf,
        #[source]
        source: syn::Error
    },

    /// No top-level item carries the requested name.
    #[error("could not find type {name} in {path}")]
    NotFound { name: String, path: PathBuf },

    /// The named item exists but is not a struct.
    #[error("{name} is not a struct (found {found})")]
    TypeMismatch { name: String, found: &'static str },

    /// Filesystem failure while reading the source or writing an output.
    #[error("{action} {path}: {source}")]
    Io {
        action: &'static str,
        path:   PathBuf,
        #[source]
        source: io::Error
    },

    /// A target could not be rendered from the context.
    #[error("{target} template: {message}")]
    Template { target: Target, message: String },

    /// One or both render targets failed.
    #[error("generation failed: {}", join_failures(.0))]
    Targets(Vec<TargetError>)
}

/// Request fields that have no default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// Name of the type to generate for.
    TypeName,
    /// Path of the file declaring the type.
    SourcePath,
    /// Module path the type lives in.
    Package
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TypeName => "type name",
            Self::SourcePath => "source file (use -f to specify one)",
            Self::Package => "package (use -p to specify one)"
        })
    }
}

/// Failure of a single render target.
#[derive(Debug, thiserror::Error)]
#[error("{target}: {source}")]
pub struct TargetError {
    /// Which output failed.
    pub target: Target,
    /// What went wrong.
    #[source]
    pub source: Box<Error>
}

impl Error {
    /// Wrap an I/O failure with the action and path that caused it.
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source
        }
    }

    /// Build a template error for `target`.
    pub(crate) fn template(target: Target, message: impl fmt::Display) -> Self {
        Self::Template {
            target,
            message: message.to_string()
        }
    }
}

fn join_failures(failures: &[TargetError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
