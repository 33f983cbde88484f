//! Configuration: JSON file, then environment, then command line.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use brawl_input::{Edge, KeyBinding};
use brawl_loop::SchedulerConfig;
use serde::{Deserialize, Serialize};

/// One scripted key event, fed through the keyboard adapter at `at_ms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedKey {
    pub at_ms: f64,
    /// Key name, e.g. `"D"` or `"SPACE"`.
    pub key: String,
    pub edge: Edge,
}

impl ScriptedKey {
    fn new(at_ms: f64, key: &str, edge: Edge) -> Self {
        Self {
            at_ms,
            key: key.to_string(),
            edge,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub fps: f64,
    pub panic_limit: u32,
    /// Seed for NPC behaviour and spawn points.
    pub seed: u64,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    pub width: f32,
    pub height: f32,
    pub npcs: usize,
    /// Stop after this many frames; run forever when unset.
    pub frames: Option<u64>,
    pub bindings: Vec<KeyBinding>,
    pub script: Vec<ScriptedKey>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let scheduler = SchedulerConfig::default();
        Self {
            fps: scheduler.fps,
            panic_limit: scheduler.panic_limit,
            seed: 0,
            log_level: "brawl_app=info".to_string(),
            width: 640.0,
            height: 360.0,
            npcs: 3,
            frames: Some(600),
            bindings: KeyBinding::defaults(),
            script: demo_script(),
        }
    }
}

/// Walk right, tap into a run, jump while running, then punch.
fn demo_script() -> Vec<ScriptedKey> {
    vec![
        ScriptedKey::new(500.0, "F1", Edge::Press),
        ScriptedKey::new(520.0, "F1", Edge::Release),
        ScriptedKey::new(1000.0, "D", Edge::Press),
        ScriptedKey::new(1500.0, "D", Edge::Release),
        ScriptedKey::new(1550.0, "D", Edge::Press),
        ScriptedKey::new(2500.0, "SPACE", Edge::Press),
        ScriptedKey::new(2600.0, "SPACE", Edge::Release),
        ScriptedKey::new(4000.0, "D", Edge::Release),
        ScriptedKey::new(4500.0, "J", Edge::Press),
        ScriptedKey::new(4700.0, "J", Edge::Release),
        ScriptedKey::new(5000.0, "W", Edge::Press),
        ScriptedKey::new(5000.0, "A", Edge::Press),
        ScriptedKey::new(6000.0, "W", Edge::Release),
        ScriptedKey::new(6000.0, "A", Edge::Release),
    ]
}

impl GameConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, or the given file when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply `BRAWL_*` environment overrides.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_vars(|name| env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable source.
    pub fn with_vars<F>(mut self, var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = var("BRAWL_FPS") {
            self.fps = parse_var("BRAWL_FPS", &value)?;
        }
        if let Some(value) = var("BRAWL_PANIC_LIMIT") {
            self.panic_limit = parse_var("BRAWL_PANIC_LIMIT", &value)?;
        }
        if let Some(value) = var("BRAWL_SEED") {
            self.seed = parse_var("BRAWL_SEED", &value)?;
        }
        if let Some(value) = var("BRAWL_LOG") {
            self.log_level = value;
        }
        Ok(self)
    }

    #[must_use]
    pub fn scheduler(&self) -> SchedulerConfig {
        SchedulerConfig::default()
            .with_fps(self.fps)
            .with_panic_limit(self.panic_limit)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidVar {
        name,
        value: value.to_string(),
    })
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_match_scheduler_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.scheduler(), SchedulerConfig::default());
        assert_eq!(config.bindings.len(), 10);
        assert!(config.script.windows(2).all(|w| w[0].at_ms <= w[1].at_ms));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"fps": 30, "npcs": 0, "script": []}"#).unwrap();
        assert_eq!(config.fps, 30.0);
        assert_eq!(config.npcs, 0);
        assert!(config.script.is_empty());
        assert_eq!(config.panic_limit, 240);
        assert_eq!(config.log_level, "brawl_app=info");
    }

    #[test]
    fn test_env_overrides() {
        let config = GameConfig::default()
            .with_vars(vars(&[
                ("BRAWL_FPS", "120"),
                ("BRAWL_PANIC_LIMIT", " 10 "),
                ("BRAWL_SEED", "99"),
                ("BRAWL_LOG", "debug"),
            ]))
            .unwrap();
        assert_eq!(config.fps, 120.0);
        assert_eq!(config.panic_limit, 10);
        assert_eq!(config.seed, 99);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_bad_env_value_is_an_error() {
        let err = GameConfig::default()
            .with_vars(vars(&[("BRAWL_PANIC_LIMIT", "lots")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "BRAWL_PANIC_LIMIT", .. }));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = GameConfig::load(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
