//! Mentor model.
//!
//! A mentor holds exactly three ranked sector-preference slots. A slot
//! may be blank; blank slots never match a startup sector but still
//! take part in the weighted rank draw.

use serde::{Deserialize, Serialize};

/// Number of ranked preference slots per mentor.
pub const PREFERENCE_SLOTS: usize = 3;

/// A mentor available for sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    /// Unique mentor name.
    pub name: String,
    /// Sector preferences by rank (index 0 = 1st choice).
    pub preferences: [Option<String>; PREFERENCE_SLOTS],
}

impl Mentor {
    /// Creates a mentor with no sector preferences.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferences: [None, None, None],
        }
    }

    /// Sets all three preference slots in rank order.
    ///
    /// Blank (or whitespace-only) sectors leave the slot empty.
    pub fn with_sectors(
        mut self,
        first: impl Into<String>,
        second: impl Into<String>,
        third: impl Into<String>,
    ) -> Self {
        self.preferences = [
            normalize(first.into()),
            normalize(second.into()),
            normalize(third.into()),
        ];
        self
    }

    /// Sets the preference at `rank` (1-based). Out-of-range ranks are ignored.
    pub fn with_preference(mut self, rank: usize, sector: impl Into<String>) -> Self {
        if let Some(slot) = rank
            .checked_sub(1)
            .and_then(|i| self.preferences.get_mut(i))
        {
            *slot = normalize(sector.into());
        }
        self
    }

    /// Sector at a 0-based rank index, if that slot is filled.
    pub fn preference(&self, index: usize) -> Option<&str> {
        self.preferences.get(index).and_then(|p| p.as_deref())
    }

    /// Whether any filled preference equals `sector`.
    pub fn prefers(&self, sector: &str) -> bool {
        self.preferences
            .iter()
            .flatten()
            .any(|p| p == sector)
    }

    /// 1-based rank of `sector` among the preferences, if present.
    pub fn rank_of(&self, sector: &str) -> Option<usize> {
        self.preferences
            .iter()
            .position(|p| p.as_deref() == Some(sector))
            .map(|i| i + 1)
    }

    /// Display label, e.g. `(FinTech, HealthTech, -)`.
    pub fn preference_label(&self) -> String {
        let parts: Vec<&str> = self
            .preferences
            .iter()
            .map(|p| p.as_deref().unwrap_or("-"))
            .collect();
        format!("({})", parts.join(", "))
    }
}

fn normalize(sector: String) -> Option<String> {
    let trimmed = sector.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
