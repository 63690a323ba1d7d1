//! Schedule statistics.
//!
//! Summarizes a completed run for the stats panel.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total sessions | Sessions across all mentors |
//! | Uncovered startups | Eligible startups with zero sessions |
//! | Min / max sessions | Extremes of the per-startup counts |
//! | Preference rate | Share of sessions drawn through a sector preference |
//! | Sessions by rank | Preference-drawn sessions per rank 1..3 |
//! | Idle pairs | (slot, mentor) pairs that produced no session |

use serde::Serialize;

use crate::models::{ScheduleResult, Selection, PREFERENCE_SLOTS};

/// Schedule summary metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleStats {
    /// Number of sessions.
    pub total_sessions: usize,
    /// Mentors that took part.
    pub mentors: usize,
    /// Startups that took part.
    pub startups: usize,
    /// Startups with no session, in roster order.
    pub uncovered_startups: Vec<String>,
    /// Smallest per-startup count (0 if no startups).
    pub min_sessions: usize,
    /// Largest per-startup count (0 if no startups).
    pub max_sessions: usize,
    /// Sessions drawn through a preference.
    pub preference_sessions: usize,
    /// `preference_sessions / total_sessions` (0.0 when empty).
    pub preference_rate: f64,
    /// Preference-drawn sessions per rank.
    pub sessions_by_rank: [usize; PREFERENCE_SLOTS],
    /// Skipped (slot, mentor) pairs.
    pub idle_pairs: usize,
}

impl ScheduleStats {
    /// Computes stats for a result produced over `slot_count` time slots.
    pub fn calculate(result: &ScheduleResult, slot_count: usize) -> Self {
        let total_sessions = result.session_count();

        let mut sessions_by_rank = [0usize; PREFERENCE_SLOTS];
        for session in result.sessions() {
            if let Selection::Preference { rank } = session.selection {
                if let Some(n) = sessions_by_rank.get_mut(usize::from(rank).saturating_sub(1)) {
                    *n += 1;
                }
            }
        }
        let preference_sessions: usize = sessions_by_rank.iter().sum();

        let preference_rate = if total_sessions == 0 {
            0.0
        } else {
            preference_sessions as f64 / total_sessions as f64
        };

        let counts = result.startup_counts.iter().map(|c| c.sessions);
        let capacity = slot_count * result.mentors.len();

        Self {
            total_sessions,
            mentors: result.mentors.len(),
            startups: result.startup_counts.len(),
            uncovered_startups: result
                .startup_counts
                .iter()
                .filter(|c| c.sessions == 0)
                .map(|c| c.startup.clone())
                .collect(),
            min_sessions: counts.clone().min().unwrap_or(0),
            max_sessions: counts.max().unwrap_or(0),
            preference_sessions,
            preference_rate,
            sessions_by_rank,
            idle_pairs: capacity.saturating_sub(total_sessions),
        }
    }

    /// Whether every startup received at least one session.
    pub fn is_fully_covered(&self) -> bool {
        self.uncovered_startups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MentorSchedule, Session, StartupCount, TimeSlot};

    fn session(startup: &str, index: usize, selection: Selection) -> Session {
        Session {
            startup: startup.into(),
            sector: "FinTech".into(),
            time_slot: TimeSlot::new(format!("slot-{index}")),
            slot_index: index,
            contact: String::new(),
            selection,
        }
    }

    fn count(startup: &str, sessions: usize) -> StartupCount {
        StartupCount {
            startup: startup.into(),
            sessions,
        }
    }

    #[test]
    fn test_stats() {
        let result = ScheduleResult {
            mentors: vec![
                MentorSchedule {
                    mentor: "Ada".into(),
                    sessions: vec![
                        session("S1", 0, Selection::Preference { rank: 1 }),
                        session("S2", 1, Selection::Uniform),
                    ],
                },
                MentorSchedule {
                    mentor: "Grace".into(),
                    sessions: vec![session("S1", 0, Selection::Preference { rank: 3 })],
                },
            ],
            startup_counts: vec![count("S1", 2), count("S2", 1), count("S3", 0)],
        };

        let stats = ScheduleStats::calculate(&result, 3);
        assert_eq!(stats.total_sessions, 3);
        assert_eq!(stats.mentors, 2);
        assert_eq!(stats.startups, 3);
        assert_eq!(stats.uncovered_startups, vec!["S3".to_string()]);
        assert!(!stats.is_fully_covered());
        assert_eq!(stats.min_sessions, 0);
        assert_eq!(stats.max_sessions, 2);
        assert_eq!(stats.preference_sessions, 2);
        assert_eq!(stats.sessions_by_rank, [1, 0, 1]);
        assert!((stats.preference_rate - 2.0 / 3.0).abs() < 1e-10);
        // 3 slots x 2 mentors = 6 pairs, 3 used.
        assert_eq!(stats.idle_pairs, 3);
    }

    #[test]
    fn test_empty_stats() {
        let stats = ScheduleStats::calculate(&ScheduleResult::new(), 5);
        assert_eq!(stats.total_sessions, 0);
        assert_eq!(stats.min_sessions, 0);
        assert_eq!(stats.max_sessions, 0);
        assert_eq!(stats.preference_rate, 0.0);
        assert_eq!(stats.idle_pairs, 0);
        assert!(stats.is_fully_covered());
    }
}
