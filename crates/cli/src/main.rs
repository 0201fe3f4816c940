// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `rsvc`: replay action files against fresh documents and verify saved
//! documents.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};
use resource_services::{ActionRecord, AnyDocument, DocumentKind};
use std::path::PathBuf;
use tracing::info;

use crate::commands::{Inspection, ReplaySummary};
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a JSON array of action records to a fresh document
    Replay {
        /// Document type (e.g. `powerhouse/facet`) or model name (e.g. `Facet`)
        #[arg(short, long)]
        kind: DocumentKind,

        /// File holding the action records
        #[arg(short, long)]
        actions: PathBuf,

        /// Where to write the resulting document. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify a saved document against its operation log
    Inspect {
        /// The saved document
        file: PathBuf,
    },

    /// List the actions a document model accepts
    Actions {
        /// Document type or model name
        #[arg(short, long)]
        kind: DocumentKind,
    },
}

impl Command {
    fn run(self) -> Result<(), CliError> {
        match self {
            Self::Replay {
                kind,
                actions,
                output,
            } => {
                let records: Vec<ActionRecord> = commands::read_records(&actions)?;
                let (document, summary): (AnyDocument, ReplaySummary) =
                    commands::replay(kind, records)?;
                info!(
                    document_id = %document.id(),
                    applied = summary.applied,
                    ignored = summary.ignored,
                    passed_through = summary.passed_through,
                    failed = summary.failed,
                    "Replay finished"
                );
                let rendered: String = serde_json::to_string_pretty(&document.to_json()?)?;
                match output {
                    Some(path) => commands::write_file(&path, &rendered)?,
                    None => println!("{rendered}"),
                }
                Ok(())
            }
            Self::Inspect { file } => {
                let inspection: Inspection = commands::inspect(&commands::read_json(&file)?)?;
                println!("{inspection}");
                Ok(())
            }
            Self::Actions { kind } => {
                for line in commands::list_actions(kind) {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    args.command.run()?;
    Ok(())
}
