//! Event configuration.
//!
//! Loaded from a TOML file. Every field has a default, so an empty or
//! missing file describes the stock event: 11:00 AM to 2:00 PM, 15-minute
//! slots with 5-minute gaps, 40/30/30 preference weights, and a cap of 4
//! sessions per startup.
//!
//! ```toml
//! mentors = "mentors.json"
//! startups = "startups.json"
//! state = ".mentoring-state.json"
//!
//! [slots]
//! start = "11:00 AM"
//! end = "2:00 PM"
//! slot_minutes = 15
//! gap_minutes = 5
//!
//! [matching]
//! weights = [40, 30, 30]
//! session_cap = 4
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MentoringError, Result};
use crate::models::{SlotPlan, TimeSlot};
use crate::scheduler::{MentorScheduler, DEFAULT_SESSION_CAP};
use crate::selection::PreferenceWeights;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Mentor roster file (.csv, .json or .toml).
    #[serde(default = "default_mentors_path")]
    pub mentors: PathBuf,
    /// Startup roster file (.csv, .json or .toml).
    #[serde(default = "default_startups_path")]
    pub startups: PathBuf,
    /// Persisted exclusion sets.
    #[serde(default = "default_state_path")]
    pub state: PathBuf,
    #[serde(default)]
    pub slots: SlotConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
}

/// Time-slot layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    #[serde(default = "default_start")]
    pub start: String,
    #[serde(default = "default_end")]
    pub end: String,
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,
    #[serde(default = "default_gap_minutes")]
    pub gap_minutes: u32,
}

/// Matching policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Rank weights for the preference draw.
    #[serde(default)]
    pub weights: PreferenceWeights,
    /// Session cap per startup once all startups are covered.
    #[serde(default = "default_session_cap")]
    pub session_cap: usize,
}

fn default_mentors_path() -> PathBuf {
    PathBuf::from("mentors.json")
}
fn default_startups_path() -> PathBuf {
    PathBuf::from("startups.json")
}
fn default_state_path() -> PathBuf {
    PathBuf::from(".mentoring-state.json")
}
fn default_start() -> String {
    "11:00 AM".into()
}
fn default_end() -> String {
    "2:00 PM".into()
}
fn default_slot_minutes() -> u32 {
    15
}
fn default_gap_minutes() -> u32 {
    5
}
fn default_session_cap() -> usize {
    DEFAULT_SESSION_CAP
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mentors: default_mentors_path(),
            startups: default_startups_path(),
            state: default_state_path(),
            slots: SlotConfig::default(),
            matching: MatchingConfig::default(),
        }
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
            slot_minutes: default_slot_minutes(),
            gap_minutes: default_gap_minutes(),
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: PreferenceWeights::default(),
            session_cap: default_session_cap(),
        }
    }
}

impl SlotConfig {
    /// Parses the configured bounds into a slot plan.
    pub fn plan(&self) -> Result<SlotPlan> {
        Ok(SlotPlan::parse(&self.start, &self.end)?
            .with_slot_minutes(self.slot_minutes)
            .with_gap_minutes(self.gap_minutes))
    }
}

impl MatchingConfig {
    /// Builds a scheduler with this policy.
    pub fn scheduler(&self) -> MentorScheduler {
        MentorScheduler::new()
            .with_weights(self.weights)
            .with_session_cap(self.session_cap)
    }
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| MentoringError::parse(origin, e))
    }

    /// Loads configuration from `path`, resolving relative paths against
    /// its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| MentoringError::io(path, e))?;
        let config = Self::from_toml_str(&text, path)?;
        Ok(match path.parent() {
            Some(dir) => config.rebased(dir),
            None => config,
        })
    }

    /// Loads configuration, falling back to defaults if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            let config = Self::default();
            Ok(match path.parent() {
                Some(dir) => config.rebased(dir),
                None => config,
            })
        }
    }

    /// Resolves relative file paths against `dir`.
    pub fn rebased(mut self, dir: &Path) -> Self {
        for p in [&mut self.mentors, &mut self.startups, &mut self.state] {
            if p.is_relative() {
                *p = dir.join(&*p);
            }
        }
        self
    }

    /// Generates the configured time slots.
    pub fn time_slots(&self) -> Result<Vec<TimeSlot>> {
        self.slots.plan()?.generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = Config::from_toml_str("", Path::new("mentoring.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.matching.session_cap, 4);
        assert_eq!(cfg.matching.weights.as_array(), [40, 30, 30]);
        assert_eq!(cfg.time_slots().unwrap().len(), 9);
    }

    #[test]
    fn test_partial_sections() {
        let cfg = Config::from_toml_str(
            r#"
            mentors = "people/mentors.toml"

            [slots]
            end = "12:00 PM"

            [matching]
            weights = [50, 25, 25]
            "#,
            Path::new("mentoring.toml"),
        )
        .unwrap();

        assert_eq!(cfg.mentors, PathBuf::from("people/mentors.toml"));
        assert_eq!(cfg.startups, PathBuf::from("startups.json"));
        assert_eq!(cfg.slots.start, "11:00 AM");
        assert_eq!(cfg.slots.slot_minutes, 15);
        // 11:00, 11:20, 11:40 fit before noon.
        assert_eq!(cfg.time_slots().unwrap().len(), 3);
        assert_eq!(cfg.matching.weights.as_array(), [50, 25, 25]);
        assert_eq!(cfg.matching.session_cap, 4);
    }

    #[test]
    fn test_zero_weights_rejected() {
        let err = Config::from_toml_str(
            "[matching]\nweights = [0, 0, 0]\n",
            Path::new("mentoring.toml"),
        )
        .unwrap_err();
        assert!(matches!(err, MentoringError::Parse { .. }));
    }

    #[test]
    fn test_bad_time_reported() {
        let cfg = Config::from_toml_str("[slots]\nstart = \"noon\"\n", Path::new("m.toml")).unwrap();
        assert!(matches!(
            cfg.time_slots(),
            Err(MentoringError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_oversized_gap_reported() {
        let cfg = Config::from_toml_str(
            "[slots]\ngap_minutes = 4294967295\n",
            Path::new("m.toml"),
        )
        .unwrap();
        assert!(matches!(
            cfg.time_slots(),
            Err(MentoringError::InvalidSlotPlan(_))
        ));
    }

    #[test]
    fn test_scheduler_from_matching() {
        let matching = MatchingConfig {
            weights: PreferenceWeights::new([1, 1, 1]).unwrap(),
            session_cap: 2,
        };
        let scheduler = matching.scheduler();
        assert_eq!(scheduler.session_cap(), 2);
        assert_eq!(scheduler.weights().as_array(), [1, 1, 1]);
    }

    #[test]
    fn test_load_rebases_relative_paths() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mentoring.toml");
        std::fs::write(&path, "state = \"/var/tmp/state.json\"\n").unwrap();

        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.mentors, dir.path().join("mentors.json"));
        assert_eq!(cfg.state, PathBuf::from("/var/tmp/state.json"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.startups, dir.path().join("startups.json"));
        assert_eq!(cfg.slots, SlotConfig::default());
    }
}
