//! Display model for the schedule board.
//!
//! Turns a `ScheduleResult` into rows for rendering: mentor rows filtered
//! by a name search, each session tagged with a highlight relative to the
//! current time slot, and startup rows with their session counts. Every
//! roster entry gets a row so that switched-off entries can be switched
//! back on.

use serde::Serialize;

use crate::models::{Exclusions, ScheduleResult, Session, TimeSlot};
use crate::roster::Roster;

/// Highlight for a session relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    /// The session running in the current slot.
    Current,
    /// The session right after the current one.
    Next,
    Normal,
}

/// A session with its highlight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRow {
    #[serde(flatten)]
    pub session: Session,
    pub highlight: Highlight,
}

/// One mentor on the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentorRow {
    pub name: String,
    /// Preference label, e.g. `(FinTech, HealthTech, -)`.
    pub preferences: String,
    pub enabled: bool,
    pub sessions: Vec<SessionRow>,
}

/// One startup on the stats panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartupRow {
    pub name: String,
    pub sector: String,
    pub contact: String,
    pub enabled: bool,
    /// Session count; `None` when the startup is switched off.
    pub sessions: Option<usize>,
}

/// Full board contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Board {
    pub mentors: Vec<MentorRow>,
    pub startups: Vec<StartupRow>,
}

/// Case-insensitive substring match; a blank query matches everything.
pub fn matches_search(name: &str, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || name.to_lowercase().contains(&query)
}

/// Tags each session of one mentor relative to `now`.
///
/// The session in the `now` slot is `Current`; the session listed right
/// after it is `Next`. Without `now`, everything is `Normal`.
pub fn highlight_sessions(sessions: &[Session], now: Option<&TimeSlot>) -> Vec<Highlight> {
    let is_now = |s: &Session| now.is_some_and(|t| s.time_slot == *t);

    sessions
        .iter()
        .enumerate()
        .map(|(i, s)| {
            if is_now(s) {
                Highlight::Current
            } else if i > 0 && is_now(&sessions[i - 1]) {
                Highlight::Next
            } else {
                Highlight::Normal
            }
        })
        .collect()
}

/// Builds the board for a roster, a schedule, and the exclusions it was
/// computed with.
pub fn build_board(
    roster: &Roster,
    result: &ScheduleResult,
    exclusions: &Exclusions,
    query: &str,
    now: Option<&TimeSlot>,
) -> Board {
    let mentors = roster
        .mentors
        .iter()
        .filter(|m| matches_search(&m.name, query))
        .map(|m| {
            let sessions = result.sessions_for(&m.name).unwrap_or_default();
            let highlights = highlight_sessions(sessions, now);
            MentorRow {
                name: m.name.clone(),
                preferences: m.preference_label(),
                enabled: !exclusions.is_mentor_excluded(&m.name),
                sessions: sessions
                    .iter()
                    .zip(highlights)
                    .map(|(s, highlight)| SessionRow {
                        session: s.clone(),
                        highlight,
                    })
                    .collect(),
            }
        })
        .collect();

    let startups = roster
        .startups
        .iter()
        .map(|s| StartupRow {
            name: s.name.clone(),
            sector: s.sector.clone(),
            contact: s.contact.clone(),
            enabled: !exclusions.is_startup_excluded(&s.name),
            sessions: result.count_for(&s.name),
        })
        .collect();

    Board { mentors, startups }
}
