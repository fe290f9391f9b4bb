//! Configuration loading and parsing.
//!
//! Parses `tilde.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [viewport]
//! fallback_height = 10   # rows assumed when the terminal height query fails
//! reserved_rows = 0      # rows subtracted from the terminal height
//! [render]
//! diff_rows = true       # repaint only changed rows
//! [log]
//! file = "tilde.log"
//! ```
//!
//! Every field is optional. A missing file or a parse error yields defaults;
//! parse errors are logged at warn. Unknown fields are ignored.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "tilde.toml";
pub const DEFAULT_FALLBACK_HEIGHT: u16 = 10;
pub const DEFAULT_LOG_FILE: &str = "tilde.log";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ViewportConfig {
    #[serde(default = "ViewportConfig::default_fallback_height")]
    pub fallback_height: u16,
    #[serde(default)]
    pub reserved_rows: u16,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            fallback_height: Self::default_fallback_height(),
            reserved_rows: 0,
        }
    }
}

impl ViewportConfig {
    const fn default_fallback_height() -> u16 {
        DEFAULT_FALLBACK_HEIGHT
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    #[serde(default = "RenderConfig::default_diff_rows")]
    pub diff_rows: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            diff_rows: Self::default_diff_rows(),
        }
    }
}

impl RenderConfig {
    const fn default_diff_rows() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LogConfig {
    #[serde(default = "LogConfig::default_file")]
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: Self::default_file(),
        }
    }
}

impl LogConfig {
    fn default_file() -> PathBuf {
        PathBuf::from(DEFAULT_LOG_FILE)
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>,     // original file string (optional)
    pub file: ConfigFile,        // parsed (or default) data
    pub source: Option<PathBuf>, // path the data came from, if any
}

/// Best-effort config path: `tilde.toml` in the working directory, then the
/// platform config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("tilde").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        debug!(target: "config", path = %path.display(), "config_absent_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            debug!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                raw: Some(content),
                file,
                source: Some(path),
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_error_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Rows available for buffer text given the terminal height (or `None`
    /// when the height query failed). Never less than one.
    pub fn text_rows(&self, terminal_rows: Option<u16>) -> usize {
        let v = &self.file.viewport;
        let rows = terminal_rows.unwrap_or(v.fallback_height);
        usize::from(rows.saturating_sub(v.reserved_rows)).max(1)
    }

    pub fn diff_rows(&self) -> bool {
        self.file.render.diff_rows
    }

    pub fn log_file(&self) -> &PathBuf {
        &self.file.log.file
    }
}
