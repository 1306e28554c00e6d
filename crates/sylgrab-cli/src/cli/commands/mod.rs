//! CLI command handlers, one file per command.

mod archive;
mod run;
mod status;

pub use archive::run_archive;
pub use run::run_scrape;
pub use status::run_status;
