//! Engine configuration.
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`GOMOKU_<SECTION>_<KEY>`)
//! 2. A TOML file (`GOMOKU_CONFIG`, else `gomoku.toml` in the working directory)
//! 3. Built-in defaults
//!
//! ```text
//! [board]
//! height = 20
//! width = 30
//!
//! [search]
//! depth = 3
//! candidate_order = "ascending"
//! ```
//!
//! The configuration is validated once, when the engine is built.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::search::CandidateOrder;

pub const DEFAULT_BOARD_HEIGHT: usize = 20;
pub const DEFAULT_BOARD_WIDTH: usize = 30;
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "gomoku.toml";

/// Errors from loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {height}x{width}")]
    ZeroDimension { height: usize, width: usize },

    #[error("search depth must be at least 1")]
    ZeroDepth,

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

fn d_height() -> usize {
    DEFAULT_BOARD_HEIGHT
}
fn d_width() -> usize {
    DEFAULT_BOARD_WIDTH
}
fn d_depth() -> u32 {
    DEFAULT_SEARCH_DEPTH
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "d_height")]
    pub height: usize,
    #[serde(default = "d_width")]
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            height: d_height(),
            width: d_width(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// Plies searched, counting the move being chosen
    #[serde(default = "d_depth")]
    pub depth: u32,
    #[serde(default)]
    pub candidate_order: CandidateOrder,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: d_depth(),
            candidate_order: CandidateOrder::default(),
        }
    }
}

/// Process-wide engine settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl EngineConfig {
    /// Config with the given board size and depth, ascending candidate order.
    pub fn new(height: usize, width: usize, depth: u32) -> Self {
        Self {
            board: BoardConfig { height, width },
            search: SearchConfig {
                depth,
                candidate_order: CandidateOrder::default(),
            },
        }
    }

    #[must_use]
    pub fn with_candidate_order(mut self, order: CandidateOrder) -> Self {
        self.search.candidate_order = order;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.height == 0 || self.board.width == 0 {
            return Err(ConfigError::ZeroDimension {
                height: self.board.height,
                width: self.board.width,
            });
        }
        if self.search.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}

/// Load configuration from the environment and default file locations.
///
/// Unreadable or malformed files are reported and replaced by defaults.
pub fn load_config() -> EngineConfig {
    load_config_with(|key| std::env::var(key).ok())
}

fn load_config_with(lookup: impl Fn(&str) -> Option<String>) -> EngineConfig {
    let path = match lookup("GOMOKU_CONFIG") {
        Some(explicit) => {
            let path = PathBuf::from(explicit);
            if !path.exists() {
                warn!("GOMOKU_CONFIG={} not found, using built-in defaults", path.display());
                return apply_overrides(EngineConfig::default(), &lookup);
            }
            path
        }
        None => {
            let path = PathBuf::from(CONFIG_FILE);
            if !path.exists() {
                debug!("No {} found, using built-in defaults", CONFIG_FILE);
                return apply_overrides(EngineConfig::default(), &lookup);
            }
            path
        }
    };

    match read_config(&path) {
        Ok(config) => {
            info!("Loaded config from {}", path.display());
            apply_overrides(config, &lookup)
        }
        Err(e) => {
            warn!("{}, using defaults", e);
            apply_overrides(EngineConfig::default(), &lookup)
        }
    }
}

fn read_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Load configuration from a specific file, then apply environment overrides.
pub fn load_from_path(path: &Path) -> Result<EngineConfig, ConfigError> {
    Ok(apply_env_overrides(read_config(path)?))
}

/// Apply `GOMOKU_*` environment variable overrides.
pub fn apply_env_overrides(config: EngineConfig) -> EngineConfig {
    apply_overrides(config, |key| std::env::var(key).ok())
}

fn parse_override<T: std::str::FromStr>(key: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring {}={}: not a valid value", key, raw);
            None
        }
    }
}

/// Apply overrides from an arbitrary key lookup.
pub fn apply_overrides(
    mut config: EngineConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> EngineConfig {
    const HEIGHT: &str = "GOMOKU_BOARD_HEIGHT";
    const WIDTH: &str = "GOMOKU_BOARD_WIDTH";
    const DEPTH: &str = "GOMOKU_SEARCH_DEPTH";
    const ORDER: &str = "GOMOKU_SEARCH_CANDIDATE_ORDER";

    if let Some(v) = parse_override(HEIGHT, lookup(HEIGHT)) {
        config.board.height = v;
    }
    if let Some(v) = parse_override(WIDTH, lookup(WIDTH)) {
        config.board.width = v;
    }
    if let Some(v) = parse_override(DEPTH, lookup(DEPTH)) {
        config.search.depth = v;
    }
    if let Some(v) = parse_override(ORDER, lookup(ORDER)) {
        config.search.candidate_order = v;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.board.height, 20);
        assert_eq!(config.board.width, 30);
        assert_eq!(config.search.depth, 3);
        assert_eq!(config.search.candidate_order, CandidateOrder::Ascending);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(matches!(
            EngineConfig::new(0, 9, 2).validate(),
            Err(ConfigError::ZeroDimension { height: 0, width: 9 })
        ));
        assert!(matches!(
            EngineConfig::new(9, 0, 2).validate(),
            Err(ConfigError::ZeroDimension { .. })
        ));
        assert!(matches!(
            EngineConfig::new(9, 9, 0).validate(),
            Err(ConfigError::ZeroDepth)
        ));
        assert!(EngineConfig::new(1, 1, 1).validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: EngineConfig = toml::from_str(
            r#"
            [board]
            width = 15

            [search]
            candidate_order = "descending"
            "#,
        )
        .unwrap();
        assert_eq!(config.board.height, DEFAULT_BOARD_HEIGHT);
        assert_eq!(config.board.width, 15);
        assert_eq!(config.search.depth, DEFAULT_SEARCH_DEPTH);
        assert_eq!(config.search.candidate_order, CandidateOrder::Descending);
    }

    #[test]
    fn test_parse_empty_toml() {
        let config: EngineConfig = toml::from_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_parse_rejects_bad_order() {
        let result: Result<EngineConfig, _> = toml::from_str("[search]\ncandidate_order = \"random\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("GOMOKU_BOARD_HEIGHT", "15"),
            ("GOMOKU_SEARCH_DEPTH", "2"),
            ("GOMOKU_SEARCH_CANDIDATE_ORDER", "desc"),
            ("GOMOKU_BOARD_WIDTH", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let config = apply_overrides(EngineConfig::default(), |key| {
            env.get(key).map(|v| v.to_string())
        });
        assert_eq!(config.board.height, 15);
        assert_eq!(config.board.width, DEFAULT_BOARD_WIDTH);
        assert_eq!(config.search.depth, 2);
        assert_eq!(config.search.candidate_order, CandidateOrder::Descending);
    }

    /// Run `f` with a WARN-level subscriber and return what it printed.
    fn capture_warnings(f: impl FnOnce()) -> String {
        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl std::io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_missing_explicit_config_warns() {
        let logs = capture_warnings(|| {
            let config = load_config_with(|key| {
                (key == "GOMOKU_CONFIG").then(|| "/nonexistent/gomoku.toml".to_string())
            });
            assert_eq!(config, EngineConfig::default());
        });
        assert!(logs.contains("GOMOKU_CONFIG=/nonexistent/gomoku.toml not found"), "{logs}");
    }

    #[test]
    fn test_explicit_config_keeps_env_overrides() {
        let config = load_config_with(|key| match key {
            "GOMOKU_CONFIG" => Some("/nonexistent/gomoku.toml".to_string()),
            "GOMOKU_SEARCH_DEPTH" => Some("5".to_string()),
            _ => None,
        });
        assert_eq!(config.search.depth, 5);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_from_path(Path::new("/nonexistent/gomoku.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
