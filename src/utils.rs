// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for code generation.
//!
//! # Submodules
//!
//! - [`marker`]: Generated code marker comments
//! - [`paths`]: Output file naming
//! - [`sql`]: SQL fragment building over extracted fields

pub mod marker;
pub mod paths;
pub mod sql;
