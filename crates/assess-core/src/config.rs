use crate::error::Result;
use crate::paths;
use crate::persist::{ExportPolicy, DEFAULT_FALLBACK_FILENAME};
use crate::types::Phase;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// PhaseConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseConfig {
    #[serde(default = "default_enabled_phases")]
    pub enabled: Vec<Phase>,
}

fn default_enabled_phases() -> Vec<Phase> {
    Phase::all().to_vec()
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled_phases(),
        }
    }
}

impl PhaseConfig {
    pub fn is_enabled(&self, phase: Phase) -> bool {
        self.enabled.contains(&phase)
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_fallback_filename")]
    pub fallback_filename: String,
    #[serde(default = "default_require_name")]
    pub require_name_for_export: bool,
    #[serde(default)]
    pub phases: PhaseConfig,
}

fn default_fallback_filename() -> String {
    DEFAULT_FALLBACK_FILENAME.to_string()
}

fn default_require_name() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_filename: default_fallback_filename(),
            require_name_for_export: default_require_name(),
            phases: PhaseConfig::default(),
        }
    }
}

impl Config {
    /// Load `.assess/config.yaml`, or the defaults when there is none.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn export_policy(&self) -> ExportPolicy {
        ExportPolicy {
            require_name: self.require_name_for_export,
            fallback_filename: self.fallback_filename.clone(),
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if !self.fallback_filename.ends_with(".json") {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "fallback_filename '{}' does not end in .json",
                    self.fallback_filename
                ),
            });
        }
        if self.fallback_filename.contains(['/', '\\']) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "fallback_filename must be a bare file name".to_string(),
            });
        }

        if !self.phases.is_enabled(Phase::Basics) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "phases.enabled must include 'basics'; every later phase depends on it"
                    .to_string(),
            });
        }

        let mut seen = Vec::new();
        for phase in &self.phases.enabled {
            if seen.contains(phase) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("phase '{phase}' listed more than once in phases.enabled"),
                });
            } else {
                seen.push(*phase);
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.fallback_filename, "snapshot.json");
        assert!(cfg.require_name_for_export);
        assert_eq!(cfg.phases.enabled, Phase::all().to_vec());
    }

    #[test]
    fn roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::default();
        cfg.require_name_for_export = false;
        cfg.phases.enabled = vec![Phase::Basics, Phase::CurrentState];
        cfg.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert!(!loaded.require_name_for_export);
        assert_eq!(loaded.phases.enabled, vec![Phase::Basics, Phase::CurrentState]);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".assess")).unwrap();
        std::fs::write(
            dir.path().join(".assess/config.yaml"),
            "require_name_for_export: false\n",
        )
        .unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert!(!cfg.require_name_for_export);
        assert_eq!(cfg.fallback_filename, "snapshot.json");
        assert_eq!(cfg.phases.enabled.len(), 5);
    }

    #[test]
    fn default_config_has_no_warnings() {
        assert!(Config::default().validate().is_empty());
    }

    #[test]
    fn validate_flags_missing_basics_and_duplicates() {
        let mut cfg = Config::default();
        cfg.phases.enabled = vec![Phase::Roadmap, Phase::Roadmap];
        let warnings = cfg.validate();
        assert!(warnings
            .iter()
            .any(|w| w.level == WarnLevel::Error && w.message.contains("basics")));
        assert!(warnings.iter().any(|w| w.message.contains("more than once")));
    }

    #[test]
    fn validate_flags_bad_fallback() {
        let mut cfg = Config::default();
        cfg.fallback_filename = "out/snapshot.txt".to_string();
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 2);
    }
}
