//! Roster loading.
//!
//! Reads mentor and startup tables from CSV, JSON or TOML files. The
//! format is chosen by file extension.
//!
//! # Layout
//!
//! CSV files are spreadsheet exports with a header row; columns that are
//! not recognised (such as an `Index` column) are ignored. JSON files hold
//! an array of rows. TOML files hold an array of tables
//! named `mentors` / `startups`:
//!
//! ```toml
//! [[mentors]]
//! name = "Ada"
//! sector_1 = "FinTech"
//! sector_2 = "HealthTech"
//!
//! [[startups]]
//! name = "Ledgerly"
//! sector = "FinTech"
//! contact = "ops@ledgerly.io"
//! ```
//!
//! Spreadsheet-style headers (`Name`, `Sector 1`, `Sector`, `Contacts`)
//! are accepted as aliases. Values are trimmed and blank preference
//! cells become empty preference slots.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::info;

use crate::error::{MentoringError, Result};
use crate::models::{Exclusions, Mentor, Startup, TimeSlot};
use crate::scheduler::ScheduleRequest;

/// Supported roster file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Csv,
    Json,
    Toml,
}

impl RosterFormat {
    /// Detects the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(MentoringError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MentorRecord {
    #[serde(alias = "Name")]
    name: String,
    #[serde(default, alias = "Sector 1", alias = "Sector1", alias = "sector1")]
    sector_1: Option<String>,
    #[serde(default, alias = "Sector 2", alias = "Sector2", alias = "sector2")]
    sector_2: Option<String>,
    #[serde(default, alias = "Sector 3", alias = "Sector3", alias = "sector3")]
    sector_3: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StartupRecord {
    #[serde(alias = "Name")]
    name: String,
    #[serde(alias = "Sector")]
    sector: String,
    #[serde(alias = "Contacts", alias = "Contact", alias = "contacts")]
    contact: String,
}

#[derive(Debug, Deserialize)]
struct MentorTable {
    #[serde(default)]
    mentors: Vec<MentorRecord>,
}

#[derive(Debug, Deserialize)]
struct StartupTable {
    #[serde(default)]
    startups: Vec<StartupRecord>,
}

impl From<MentorRecord> for Mentor {
    fn from(r: MentorRecord) -> Self {
        Mentor::new(r.name.trim()).with_sectors(
            r.sector_1.unwrap_or_default(),
            r.sector_2.unwrap_or_default(),
            r.sector_3.unwrap_or_default(),
        )
    }
}

impl From<StartupRecord> for Startup {
    fn from(r: StartupRecord) -> Self {
        Startup::new(r.name.trim(), r.sector.trim()).with_contact(r.contact.trim())
    }
}

/// Loads the mentor table from `path`.
pub fn load_mentors(path: &Path) -> Result<Vec<Mentor>> {
    let rows: Vec<MentorRecord> = match RosterFormat::from_path(path)? {
        RosterFormat::Csv => read_csv(path)?,
        RosterFormat::Json => read_json(path)?,
        RosterFormat::Toml => read_toml::<MentorTable>(path)?.mentors,
    };
    let mentors: Vec<Mentor> = rows.into_iter().map(Mentor::from).collect();
    info!(path = %path.display(), count = mentors.len(), "loaded mentors");
    Ok(mentors)
}

/// Loads the startup table from `path`.
pub fn load_startups(path: &Path) -> Result<Vec<Startup>> {
    let rows: Vec<StartupRecord> = match RosterFormat::from_path(path)? {
        RosterFormat::Csv => read_csv(path)?,
        RosterFormat::Json => read_json(path)?,
        RosterFormat::Toml => read_toml::<StartupTable>(path)?.startups,
    };
    let startups: Vec<Startup> = rows.into_iter().map(Startup::from).collect();
    info!(path = %path.display(), count = startups.len(), "loaded startups");
    Ok(startups)
}

/// Which roster a name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterKind {
    Mentor,
    Startup,
}

impl RosterKind {
    /// Lowercase label used in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mentor => "mentor",
            Self::Startup => "startup",
        }
    }
}

/// Both rosters for an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub mentors: Vec<Mentor>,
    pub startups: Vec<Startup>,
}

impl Roster {
    /// Creates a roster from in-memory tables.
    pub fn new(mentors: Vec<Mentor>, startups: Vec<Startup>) -> Self {
        Self { mentors, startups }
    }

    /// Loads both tables.
    pub fn load(mentors: &Path, startups: &Path) -> Result<Self> {
        Ok(Self {
            mentors: load_mentors(mentors)?,
            startups: load_startups(startups)?,
        })
    }

    /// Whether a mentor with this exact name is on the roster.
    pub fn has_mentor(&self, name: &str) -> bool {
        self.mentors.iter().any(|m| m.name == name)
    }

    /// Whether a startup with this exact name is on the roster.
    pub fn has_startup(&self, name: &str) -> bool {
        self.startups.iter().any(|s| s.name == name)
    }

    /// Flips the exclusion of a rostered mentor or startup.
    ///
    /// Returns `true` if the entry is now excluded. Names that are not on
    /// the roster are rejected with `UnknownName` and leave `exclusions`
    /// untouched.
    pub fn toggle(&self, exclusions: &mut Exclusions, kind: RosterKind, name: &str) -> Result<bool> {
        let known = match kind {
            RosterKind::Mentor => self.has_mentor(name),
            RosterKind::Startup => self.has_startup(name),
        };
        if !known {
            return Err(MentoringError::UnknownName {
                kind: kind.as_str(),
                name: name.to_string(),
            });
        }
        Ok(match kind {
            RosterKind::Mentor => exclusions.toggle_mentor(name),
            RosterKind::Startup => exclusions.toggle_startup(name),
        })
    }

    /// Builds a scheduling request over `time_slots` with an exclusion snapshot.
    pub fn to_request(&self, time_slots: Vec<TimeSlot>, exclusions: &Exclusions) -> ScheduleRequest {
        ScheduleRequest::new(self.mentors.clone(), self.startups.clone(), time_slots)
            .with_exclusions(exclusions.clone())
    }
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| MentoringError::io(PathBuf::from(path), e))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    serde_json::from_str(&read_text(path)?).map_err(|e| MentoringError::parse(path, e))
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = read_text(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()
        .map_err(|e| MentoringError::parse(path, e))
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    toml::from_str(&read_text(path)?).map_err(|e| MentoringError::parse(path, e))
}
