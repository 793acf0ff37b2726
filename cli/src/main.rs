#![deny(missing_docs)]

//! # Crudkit CLI
//!
//! Command Line Interface for the layered CRUD module scaffolder.
//!
//! Supported Commands:
//! - `make`: emits interface, repository, service, request and controller
//!   for an entity, and wires the repository binding into the provider.

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::error::CliResult;

mod error;
mod make;

/// Conventional application source root all artifact paths are fixed
/// against, resolved from the working directory.
const SOURCE_ROOT: &str = "src";

#[derive(Parser, Debug)]
#[clap(author, version, about = "Layered CRUD module scaffolder")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scaffolds the five module artifacts for an entity and registers the
    /// repository binding.
    Make(make::MakeArgs),
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Make(args) => make::execute(Path::new(SOURCE_ROOT), args)?,
    }

    Ok(())
}
