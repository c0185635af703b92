use std::path::Path;

use clap::ValueEnum;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_CONFIG_FILE: &str = "card_title_parser";
pub const ENV_PREFIX: &str = "CARD_TITLE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Label / value rows, one block per title
    Table,
    /// Pretty JSON array
    Json,
    /// One JSON object per line
    Jsonl,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub format: OutputFormat,
    /// Emit localized display records. Unset: on for tables, off for JSON.
    pub display: Option<bool>,
    pub chunk_size: usize,
    pub progress: bool,
}

impl Settings {
    /// Defaults, then `card_title_parser.toml` (or `path`), then `CARD_TITLE_*` env vars.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("format", "table")?
            .set_default("chunk_size", 500_i64)?
            .set_default("progress", true)?;

        builder = match path {
            Some(p) => builder.add_source(File::from(p).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn display(&self) -> bool {
        self.display.unwrap_or(self.format == OutputFormat::Table)
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size.max(1)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            format: OutputFormat::Table,
            display: None,
            chunk_size: 500,
            progress: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_follows_format_unless_set() {
        let mut s = Settings::default();
        assert!(s.display());
        s.format = OutputFormat::Jsonl;
        assert!(!s.display());
        s.display = Some(true);
        assert!(s.display());
    }

    #[test]
    fn chunk_size_never_zero() {
        let s = Settings {
            chunk_size: 0,
            ..Settings::default()
        };
        assert_eq!(s.chunk_size(), 1);
    }

    #[test]
    fn loads_explicit_file() {
        let dir = std::env::temp_dir().join(format!("card_title_settings_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "format = \"jsonl\"\nchunk_size = 64\nprogress = false\n").unwrap();

        let s = Settings::load(Some(path.as_path())).unwrap();
        assert_eq!(s.format, OutputFormat::Jsonl);
        assert_eq!(s.chunk_size, 64);
        assert!(!s.progress);
        assert_eq!(s.display, None);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("card_title_settings_does_not_exist.toml");
        assert!(Settings::load(Some(path.as_path())).is_err());
    }
}
