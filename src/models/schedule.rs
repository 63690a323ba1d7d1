//! Schedule (solution) model.
//!
//! A schedule maps every eligible mentor to its chronological list of
//! sessions and every eligible startup to the number of sessions it
//! received. Both lists keep roster order.
//!
//! # Invariant
//! For every startup, `count_for(name)` equals the number of sessions
//! across all mentors whose `startup` field is `name`.

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// How a session's startup was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Drawn from the mentor's preference at this 1-based rank.
    Preference { rank: u8 },
    /// Uniform choice over the whole candidate pool.
    Uniform,
}

/// One mentor-startup meeting in a time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Startup name.
    pub startup: String,
    /// Startup sector (denormalized for display).
    pub sector: String,
    /// Slot token.
    pub time_slot: TimeSlot,
    /// Position of `time_slot` in the slot sequence.
    pub slot_index: usize,
    /// Startup contact (denormalized for display).
    pub contact: String,
    /// Selection path that produced this session.
    pub selection: Selection,
}

/// Sessions assigned to one mentor, in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorSchedule {
    pub mentor: String,
    pub sessions: Vec<Session>,
}

/// Session count for one startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupCount {
    pub startup: String,
    pub sessions: usize,
}

/// Result of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Per-mentor sessions (eligible mentors only, roster order).
    pub mentors: Vec<MentorSchedule>,
    /// Per-startup counts (eligible startups only, roster order).
    pub startup_counts: Vec<StartupCount>,
}

impl Session {
    /// Whether the session was drawn through a sector preference.
    #[inline]
    pub fn is_preference_match(&self) -> bool {
        matches!(self.selection, Selection::Preference { .. })
    }
}

impl ScheduleResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sessions for a mentor, or `None` if the mentor was not scheduled.
    pub fn sessions_for(&self, mentor: &str) -> Option<&[Session]> {
        self.mentors
            .iter()
            .find(|m| m.mentor == mentor)
            .map(|m| m.sessions.as_slice())
    }

    /// Session count for a startup, or `None` if it was not eligible.
    pub fn count_for(&self, startup: &str) -> Option<usize> {
        self.startup_counts
            .iter()
            .find(|c| c.startup == startup)
            .map(|c| c.sessions)
    }

    /// Iterates over every session of every mentor.
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.mentors.iter().flat_map(|m| m.sessions.iter())
    }

    /// Total number of sessions.
    pub fn session_count(&self) -> usize {
        self.mentors.iter().map(|m| m.sessions.len()).sum()
    }

    /// Whether every listed startup count matches the sessions referencing it.
    pub fn is_consistent(&self) -> bool {
        self.startup_counts.iter().all(|c| {
            self.sessions().filter(|s| s.startup == c.startup).count() == c.sessions
        }) && self
            .sessions()
            .all(|s| self.count_for(&s.startup).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(startup: &str, slot: &str, index: usize) -> Session {
        Session {
            startup: startup.into(),
            sector: "FinTech".into(),
            time_slot: TimeSlot::new(slot),
            slot_index: index,
            contact: String::new(),
            selection: Selection::Uniform,
        }
    }

    fn sample_result() -> ScheduleResult {
        ScheduleResult {
            mentors: vec![
                MentorSchedule {
                    mentor: "Ada".into(),
                    sessions: vec![session("S1", "11:00 AM", 0), session("S2", "11:20 AM", 1)],
                },
                MentorSchedule {
                    mentor: "Grace".into(),
                    sessions: vec![session("S1", "11:20 AM", 1)],
                },
            ],
            startup_counts: vec![
                StartupCount {
                    startup: "S1".into(),
                    sessions: 2,
                },
                StartupCount {
                    startup: "S2".into(),
                    sessions: 1,
                },
            ],
        }
    }

    #[test]
    fn test_lookups() {
        let r = sample_result();
        assert_eq!(r.sessions_for("Ada").map(<[Session]>::len), Some(2));
        assert!(r.sessions_for("Nobody").is_none());
        assert_eq!(r.count_for("S1"), Some(2));
        assert_eq!(r.count_for("S9"), None);
        assert_eq!(r.session_count(), 3);
    }

    #[test]
    fn test_consistency() {
        let mut r = sample_result();
        assert!(r.is_consistent());

        r.startup_counts[1].sessions = 5;
        assert!(!r.is_consistent());
    }

    #[test]
    fn test_session_for_unlisted_startup_is_inconsistent() {
        let mut r = sample_result();
        r.mentors[1].sessions.push(session("S3", "11:40 AM", 2));
        assert!(!r.is_consistent());
    }

    #[test]
    fn test_selection_serialization() {
        let json = serde_json::to_string(&Selection::Preference { rank: 2 }).unwrap();
        assert_eq!(json, r#"{"preference":{"rank":2}}"#);
        let json = serde_json::to_string(&Selection::Uniform).unwrap();
        assert_eq!(json, r#""uniform""#);
    }

    #[test]
    fn test_empty_result() {
        let r = ScheduleResult::new();
        assert_eq!(r.session_count(), 0);
        assert!(r.is_consistent());
    }
}
