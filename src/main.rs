// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! entity-crudgen command line.

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use entity_crudgen::{GenerationRequest, generate, parse_exclusions};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "entity-crudgen")]
#[command(version)]
#[command(about = "Generate CRUD members and their tests for a tagged struct", long_about = None)]
struct Cli {
    /// Struct to generate for (e.g. `User`)
    #[arg(value_name = "TYPE")]
    type_name: Option<String>,

    /// File declaring the struct, relative to the working directory
    #[arg(short, long, env = "CRUDGEN_FILE")]
    file: Option<PathBuf>,

    /// Storage table (defaults to the type name in snake case)
    #[arg(short, long)]
    table: Option<String>,

    /// Module path the struct is reachable at (e.g. `models`)
    #[arg(short, long, env = "CRUDGEN_PACKAGE")]
    package: Option<String>,

    /// Comma separated members to skip (e.g. `save,delete`)
    #[arg(short, long, default_value = "")]
    exclude: String,

    /// Leave the type name out of generated function names
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    single: bool,

    /// Let generated code assign UUIDs on create
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    auto_id: bool,

    /// Raise the log level (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8
}

impl Cli {
    fn into_request(self) -> Result<GenerationRequest> {
        let source_path = match self.file {
            Some(file) if !file.as_os_str().is_empty() => std::env::current_dir()
                .context("could not resolve the working directory")?
                .join(file),
            _ => PathBuf::new()
        };

        let mut request = GenerationRequest::new(
            self.type_name.unwrap_or_default(),
            source_path,
            self.package.unwrap_or_default()
        )
        .with_excluded(parse_exclusions(&self.exclude))
        .single_name(self.single)
        .auto_id(self.auto_id);
        if let Some(table) = self.table {
            request = request.with_table(table);
        }
        Ok(request)
    }
}

fn init_tracing(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug"
        })
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let request = cli.into_request()?;
    let type_name = request.type_name.clone();
    let files = generate(request).with_context(|| format!("generating code for `{type_name}`"))?;

    info!(
        implementation = %files.implementation.display(),
        tests = %files.tests.display(),
        "done"
    );
    Ok(())
}
