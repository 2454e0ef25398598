use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration loaded from wordgen.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reference: ReferenceConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference: ReferenceConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

/// Reference file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceConfig {
    /// Path of the reference file used when -f is omitted
    #[serde(default = "default_reference_file")]
    pub file: PathBuf,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            file: default_reference_file(),
        }
    }
}

fn default_reference_file() -> PathBuf {
    PathBuf::from("spanish.txt")
}

/// Generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of words produced per generate run
    #[serde(default = "default_count")]
    pub count: i64,
    /// When the random number generator is reseeded
    #[serde(default)]
    pub reseed: ReseedPolicy,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            reseed: ReseedPolicy::default(),
        }
    }
}

fn default_count() -> i64 {
    1
}

/// Reseed cadence for the random number generator.
///
/// `PerDraw` matches the legacy generator, which reinitialized the RNG
/// before every single fragment draw. With a fixed seed that collapses
/// draws over equal-sized categories to the same choice; the other two
/// cadences reseed less often and keep draws distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReseedPolicy {
    /// Reseed before every fragment draw
    #[default]
    PerDraw,
    /// Reseed once at the start of each repetition
    PerRepetition,
    /// Seed once per run
    PerRun,
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(path.clone(), e))
    }

    /// Try to load config from wordgen.toml in the given directory
    pub fn load_from_dir(dir: &PathBuf) -> Result<Self, ConfigError> {
        let config_path = dir.join("wordgen.toml");
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(
        mut self,
        file: Option<PathBuf>,
        count: Option<i64>,
        reseed: Option<ReseedPolicy>,
    ) -> Self {
        if let Some(f) = file {
            self.reference.file = f;
        }
        if let Some(n) = count {
            self.generation.count = n;
        }
        if let Some(r) = reseed {
            self.generation.reseed = r;
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.reference.file, PathBuf::from("spanish.txt"));
        assert_eq!(config.generation.count, 1);
        assert_eq!(config.generation.reseed, ReseedPolicy::PerDraw);
    }

    #[test]
    fn test_config_with_overrides() {
        let config = Config::default().with_overrides(
            Some(PathBuf::from("klingon.txt")),
            Some(30),
            Some(ReseedPolicy::PerRun),
        );
        assert_eq!(config.reference.file, PathBuf::from("klingon.txt"));
        assert_eq!(config.generation.count, 30);
        assert_eq!(config.generation.reseed, ReseedPolicy::PerRun);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[reference]
file = "norse.txt"

[generation]
reseed = "per-repetition"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.reference.file, PathBuf::from("norse.txt"));
        assert_eq!(config.generation.count, 1); // default
        assert_eq!(config.generation.reseed, ReseedPolicy::PerRepetition);
    }
}
