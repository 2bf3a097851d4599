//! Configuration management

use crate::domain::{AffirmationPool, Checklist, DEFAULT_AFFIRMATIONS, DEFAULT_CHECKLIST};
use crate::error::{Result, RoutineError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "MORNING_ROUTINE_CONFIG";

pub const DEFAULT_TITLE: &str = "🌅 Ranní rutina";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub title: String,
    pub checklist: Vec<String>,
    pub affirmations: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: DEFAULT_TITLE.to_string(),
            checklist: DEFAULT_CHECKLIST.iter().map(|s| s.to_string()).collect(),
            affirmations: DEFAULT_AFFIRMATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Pick the config source: explicit path, then `MORNING_ROUTINE_CONFIG`,
    /// then the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit.map(Path::to_path_buf).or_else(|| {
            std::env::var_os(CONFIG_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        });

        match path {
            Some(path) => Config::load(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RoutineError::ConfigNotFound(path.to_path_buf())
            } else {
                RoutineError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            RoutineError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;

        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.checklist.is_empty() {
            return Err(RoutineError::Config(
                "checklist must not be empty".to_string(),
            ));
        }
        if self.affirmations.is_empty() {
            return Err(RoutineError::EmptyAffirmationPool);
        }
        if let Some(pos) = self.checklist.iter().position(|s| s.trim().is_empty()) {
            return Err(RoutineError::Config(format!(
                "checklist entry {} is blank",
                pos + 1
            )));
        }
        if let Some(pos) = self.affirmations.iter().position(|s| s.trim().is_empty()) {
            return Err(RoutineError::Config(format!(
                "affirmation {} is blank",
                pos + 1
            )));
        }
        Ok(())
    }

    pub fn checklist(&self) -> Checklist {
        Checklist::new(self.checklist.iter().cloned())
    }

    pub fn affirmation_pool(&self) -> Result<AffirmationPool> {
        AffirmationPool::new(self.affirmations.iter().cloned())
    }
}
