use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Syllabus page the scraper points at. There is deliberately exactly one
/// source page; the tool does not crawl.
pub const DEFAULT_SOURCE_URL: &str = "https://ptu.ac.in/syllabus/#1610102986246-e6ac72c5-c6da";

/// Global configuration loaded from `~/.config/sylgrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SylgrabConfig {
    /// Page to scrape for PDF links.
    pub source_url: String,
    /// Directory the downloaded PDFs are stored in. Relative paths resolve
    /// against the working directory.
    pub download_dir: PathBuf,
    /// Case-insensitive substring an href must contain to be kept.
    #[serde(default = "default_keyword")]
    pub keyword: String,
    /// Per-request timeout in seconds (page fetch and each file GET).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Pause between sequential downloads in milliseconds. Keeps the progress
    /// line visibly updating; not a rate limit.
    #[serde(default = "default_pause_millis")]
    pub pause_millis: u64,
}

fn default_keyword() -> String {
    "cse".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_pause_millis() -> u64 {
    100
}

impl Default for SylgrabConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            download_dir: PathBuf::from("cse_syllabus_pdfs"),
            keyword: default_keyword(),
            timeout_secs: default_timeout_secs(),
            pause_millis: default_pause_millis(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sylgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SylgrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SylgrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SylgrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}
