//! Logging init: file under the XDG state dir, falling back to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Writer that is either the log file or stderr (used when file clone fails).
enum FileOrStderr {
    File(fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sylgrab=debug"))
}

fn open_log_file() -> Result<(fs::File, std::path::PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sylgrab")?;
    let log_dir = xdg_dirs.get_state_home().join("sylgrab");
    fs::create_dir_all(&log_dir)?;
    let path = log_dir.join("sylgrab.log");
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Initialize structured logging to `~/.local/state/sylgrab/sylgrab.log`.
/// If the state dir is unwritable, logs go to stderr instead of crashing.
pub fn init() {
    match open_log_file() {
        Ok((file, path)) => {
            let writer: BoxMakeWriter = BoxMakeWriter::new(FileMakeWriter(file));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(writer)
                .with_ansi(false)
                .init();
            tracing::info!("sylgrab logging initialized at {}", path.display());
        }
        Err(err) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(io::stderr)
                .with_ansi(false)
                .init();
            tracing::warn!("log file unavailable ({err:#}); logging to stderr");
        }
    }
}
