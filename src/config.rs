//! Point-value table for the fixed-score categories.
//!
//! Standard play awards 25/30/40/50 for full house, small straight, large
//! straight, and Yahtzee. House-rule variants can load a different table
//! from YAML; omitted fields fall back to the standard values.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Rules loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Point values for the categories that do not score from the dice sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rules {
    #[serde(default = "default_full_house")]
    pub full_house: u32,
    #[serde(default = "default_small_straight")]
    pub small_straight: u32,
    #[serde(default = "default_large_straight")]
    pub large_straight: u32,
    #[serde(default = "default_yahtzee")]
    pub yahtzee: u32,
}

fn default_full_house() -> u32 {
    25
}

fn default_small_straight() -> u32 {
    30
}

fn default_large_straight() -> u32 {
    40
}

fn default_yahtzee() -> u32 {
    50
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            full_house: default_full_house(),
            small_straight: default_small_straight(),
            large_straight: default_large_straight(),
            yahtzee: default_yahtzee(),
        }
    }
}

impl Rules {
    /// Load a point table from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let rules: Rules = serde_yaml::from_str(&contents)?;
        Ok(rules)
    }

    /// Load a point table from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let rules: Rules = serde_yaml::from_str(yaml)?;
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard_play() {
        let rules = Rules::default();
        assert_eq!(rules.full_house, 25);
        assert_eq!(rules.small_straight, 30);
        assert_eq!(rules.large_straight, 40);
        assert_eq!(rules.yahtzee, 50);
    }

    #[test]
    fn partial_yaml_fills_in_standard_values() {
        let rules = Rules::from_yaml("yahtzee: 100\n").expect("parse");
        assert_eq!(rules.yahtzee, 100);
        assert_eq!(rules.full_house, 25);
        assert_eq!(rules.small_straight, 30);
        assert_eq!(rules.large_straight, 40);
    }

    #[test]
    fn full_yaml_overrides_everything() {
        let yaml = r#"
full_house: 30
small_straight: 25
large_straight: 35
yahtzee: 75
"#;
        let rules = Rules::from_yaml(yaml).expect("parse");
        assert_eq!(
            rules,
            Rules {
                full_house: 30,
                small_straight: 25,
                large_straight: 35,
                yahtzee: 75,
            }
        );
    }

    #[test]
    fn invalid_yaml_fails() {
        let result = Rules::from_yaml("this is not: valid: yaml: {{{}}}");
        assert!(result.is_err());
    }
}
