use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::chunking::DEFAULT_CHUNK_SIZE;
use crate::filter::DEFAULT_IGNORED_PATTERNS;
use crate::reader::ReadOptions;

/// Global configuration loaded from `~/.config/fileops/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOpsConfig {
    /// Bytes per chunk for reads and splits.
    pub chunk_size: usize,
    /// Descend into subdirectories when reading a directory.
    pub recursive: bool,
    /// Skip dot-files and dot-directories when reading a directory.
    pub skip_hidden: bool,
    /// Path substrings that exclude a file from directory reads.
    pub ignored_patterns: Vec<String>,
    /// Where temporary link directories are created (None = system temp dir).
    #[serde(default)]
    pub link_root: Option<PathBuf>,
    /// Name prefix for temporary link directories.
    #[serde(default = "default_link_prefix")]
    pub link_prefix: String,
}

fn default_link_prefix() -> String {
    "fileops-links-".to_string()
}

impl Default for FileOpsConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            recursive: true,
            skip_hidden: true,
            ignored_patterns: DEFAULT_IGNORED_PATTERNS.iter().map(|s| s.to_string()).collect(),
            link_root: None,
            link_prefix: default_link_prefix(),
        }
    }
}

impl FileOpsConfig {
    /// Directory-read options derived from this config.
    pub fn read_options(&self) -> ReadOptions {
        ReadOptions {
            chunk_size: self.chunk_size,
            recursive: self.recursive,
            skip_hidden: self.skip_hidden,
            ignored_patterns: self.ignored_patterns.clone(),
        }
    }

    /// Root for temporary link directories.
    pub fn link_root(&self) -> PathBuf {
        self.link_root.clone().unwrap_or_else(std::env::temp_dir)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fileops")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FileOpsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FileOpsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FileOpsConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    if cfg.chunk_size == 0 {
        anyhow::bail!("{}: chunk_size must be greater than zero", path.display());
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = FileOpsConfig::default();
        assert_eq!(cfg.chunk_size, 500);
        assert!(cfg.recursive);
        assert!(cfg.skip_hidden);
        assert_eq!(cfg.ignored_patterns, vec!["db-journal", ".db"]);
        assert!(cfg.link_root.is_none());
        assert_eq!(cfg.link_prefix, "fileops-links-");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = FileOpsConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: FileOpsConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            chunk_size = 4096
            recursive = false
            skip_hidden = false
            ignored_patterns = ["~", ".swp"]
            link_root = "/var/tmp/links"
        "#;
        let cfg: FileOpsConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.chunk_size, 4096);
        assert!(!cfg.recursive);
        assert_eq!(cfg.link_root(), PathBuf::from("/var/tmp/links"));
        assert_eq!(cfg.link_prefix, "fileops-links-");

        let opts = cfg.read_options();
        assert_eq!(opts.chunk_size, 4096);
        assert!(!opts.recursive);
        assert!(!opts.skip_hidden);
        assert_eq!(opts.ignored_patterns, vec!["~", ".swp"]);
    }

    #[test]
    fn default_read_options_match_config_defaults() {
        assert_eq!(FileOpsConfig::default().read_options(), ReadOptions::default());
    }
}
