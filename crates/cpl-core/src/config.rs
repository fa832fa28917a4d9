//! Configuration types for cpl.
//!
//! [`Config::load`] layers an optional TOML file over the built-in defaults.
//! [`Config::defaults`] returns the defaults without touching the filesystem
//! (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[paths]
data_dir = "data"
output   = "data/data.csv"

[parser]
max_depth = 64

[tamkart]
literal_marker = "let s="
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub tamkart: TamkartConfig,
}

/// `[paths]` section: where payloads live and where the CSV goes.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_output() -> PathBuf {
    PathBuf::from("data/data.csv")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            output: default_output(),
        }
    }
}

/// `[parser]` section: literal parser limits.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    64
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

/// `[tamkart]` section: the bundle-literal source.
#[derive(Debug, Clone, Deserialize)]
pub struct TamkartConfig {
    /// Assignment prefix that sits immediately before the partner array in
    /// the application bundle chunk.
    #[serde(default = "default_literal_marker")]
    pub literal_marker: String,
}

fn default_literal_marker() -> String {
    "let s=".to_string()
}

impl Default for TamkartConfig {
    fn default() -> Self {
        Self {
            literal_marker: default_literal_marker(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration, layering `file` (when given) over the built-in
    /// defaults. A missing explicit file is an error; passing `None` just
    /// yields the defaults.
    pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder.build()?.try_deserialize().map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
