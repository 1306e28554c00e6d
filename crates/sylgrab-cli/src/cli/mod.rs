//! CLI for the sylgrab syllabus PDF downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use sylgrab_core::config;

use commands::{run_archive, run_scrape, run_status};

/// Top-level CLI for sylgrab.
#[derive(Debug, Parser)]
#[command(name = "sylgrab")]
#[command(about = "sylgrab: scrape, download, and bundle CSE syllabus PDFs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Scrape the configured page and download every matching PDF.
    Run {
        /// Store directory for downloaded PDFs (overrides config).
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,

        /// Do not write the bundled zip after downloading.
        #[arg(long)]
        no_archive: bool,

        /// Where to write the bundled zip (default: cse_syllabus_pdfs.zip).
        #[arg(long, value_name = "PATH")]
        archive_out: Option<PathBuf>,
    },

    /// List the contents of the download store.
    Status {
        /// Store directory to inspect (overrides config).
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,
    },

    /// Bundle the existing store into a zip without fetching anything.
    Archive {
        /// Store directory to bundle (overrides config).
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,

        /// Where to write the bundled zip (default: cse_syllabus_pdfs.zip).
        #[arg(long, value_name = "PATH")]
        archive_out: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                download_dir,
                no_archive,
                archive_out,
            } => {
                if let Some(dir) = download_dir {
                    cfg.download_dir = dir;
                }
                run_scrape(&cfg, no_archive, archive_out.as_deref())
            }
            CliCommand::Status { download_dir } => {
                let dir = download_dir.unwrap_or_else(|| cfg.download_dir.clone());
                run_status(&dir)
            }
            CliCommand::Archive {
                download_dir,
                archive_out,
            } => {
                let dir = download_dir.unwrap_or_else(|| cfg.download_dir.clone());
                run_archive(&dir, archive_out.as_deref())
            }
        }
    }
}

#[cfg(test)]
mod tests;
