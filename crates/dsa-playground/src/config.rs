use std::path::{Path, PathBuf};

use anyhow::Context;
use complexity::{DEFAULT_NAME_COUNT, QUADRATIC_NAME_COUNT};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "dsa-playground.yaml";

/// Seed used for shuffled inputs when none is configured.
pub const DEFAULT_SEED: u64 = 0x1234_5678;

/// Optional YAML overrides; every field falls back to the built-in default.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PlaygroundConfig {
    /// Names generated for the constant and linear demonstrations.
    pub names: usize,
    /// Names generated for the quadratic demonstration.
    pub quadratic_names: usize,
    /// Length of the `1..=n` sequence handed to the sorts.
    pub numbers: usize,
    pub shuffle: bool,
    pub seed: Option<u64>,
    /// `tracing` filter directive, e.g. `info` or `dsa=debug`.
    pub log: Option<String>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            names: DEFAULT_NAME_COUNT,
            quadratic_names: QUADRATIC_NAME_COUNT,
            numbers: 100,
            shuffle: false,
            seed: None,
            log: None,
        }
    }
}

impl PlaygroundConfig {
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        // An empty file deserialises to `null`.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}

/// Where the configuration came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Explicit(PathBuf),
    Discovered(PathBuf),
    Defaults,
}

/// Load `explicit` if given, otherwise the nearest [`CONFIG_FILE`] at or above
/// `start`, otherwise the defaults.
pub fn load(explicit: Option<&Path>, start: &Path) -> anyhow::Result<(PlaygroundConfig, Source)> {
    let (path, source) = match explicit {
        Some(path) => (path.to_path_buf(), Source::Explicit(path.to_path_buf())),
        None => match find_upwards(start, CONFIG_FILE) {
            Some(path) => (path.clone(), Source::Discovered(path)),
            None => return Ok((PlaygroundConfig::default(), Source::Defaults)),
        },
    };

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = PlaygroundConfig::from_yaml(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok((config, source))
}

fn find_upwards(start: &Path, filename: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_demo_screen() {
        let config = PlaygroundConfig::default();
        assert_eq!(config.names, 100);
        assert_eq!(config.quadratic_names, 2);
        assert_eq!(config.numbers, 100);
        assert!(!config.shuffle);
        assert_eq!(config.seed(), DEFAULT_SEED);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = PlaygroundConfig::from_yaml("numbers: 500\nshuffle: true\n").unwrap();
        assert_eq!(config.numbers, 500);
        assert!(config.shuffle);
        assert_eq!(config.names, 100);
        assert_eq!(config.log, None);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            PlaygroundConfig::from_yaml("  \n").unwrap(),
            PlaygroundConfig::default()
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(PlaygroundConfig::from_yaml("nmbers: 5\n").is_err());
    }

    #[test]
    fn test_discovers_config_in_parent_directory() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        let path = root.path().join(CONFIG_FILE);
        std::fs::write(&path, "names: 7\nlog: dsa=debug\n").unwrap();

        let (config, source) = load(None, &nested).unwrap();
        assert_eq!(config.names, 7);
        assert_eq!(config.log.as_deref(), Some("dsa=debug"));
        assert_eq!(source, Source::Discovered(path));
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("nope.yaml");
        let err = load(Some(missing.as_path()), root.path()).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join(CONFIG_FILE), "names: 1\n").unwrap();
        let explicit = root.path().join("other.yaml");
        std::fs::write(&explicit, "names: 2\n").unwrap();

        let (config, source) = load(Some(explicit.as_path()), root.path()).unwrap();
        assert_eq!(config.names, 2);
        assert_eq!(source, Source::Explicit(explicit));
    }
}
