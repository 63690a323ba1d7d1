//! Coverage-first mentor rotation scheduler.
//!
//! # Algorithm
//!
//! 1. Drop excluded mentors and startups.
//! 2. Walk time slots in order; within a slot, walk mentors in roster order.
//! 3. For each (slot, mentor) pair build the candidate pool:
//!    - startups with no session yet, while any such startup remains;
//!    - otherwise startups below the session cap.
//! 4. Skip the pair if the pool is empty. Otherwise pick a startup by
//!    weighted sector preference (see [`crate::selection`]) and record it.
//!
//! Every startup therefore receives one session before any receives a
//! second, and no startup exceeds the cap.
//!
//! # Complexity
//! O(s * m * n) where s=slots, m=mentors, n=startups.

use rand::Rng;
use tracing::debug;

use crate::error::{MentoringError, Result};
use crate::models::{
    Exclusions, Mentor, MentorSchedule, ScheduleResult, Session, Startup, StartupCount, TimeSlot,
};
use crate::selection::{select_startup, PreferenceWeights};
use crate::validation::validate_input;

/// Default maximum sessions per startup once every startup has one.
pub const DEFAULT_SESSION_CAP: usize = 4;

/// Input container for one scheduling run.
#[derive(Debug, Clone, Default)]
pub struct ScheduleRequest {
    /// Mentor roster, in display order.
    pub mentors: Vec<Mentor>,
    /// Startup roster.
    pub startups: Vec<Startup>,
    /// Ordered time slots.
    pub time_slots: Vec<TimeSlot>,
    /// Snapshot of the exclusion sets.
    pub exclusions: Exclusions,
}

impl ScheduleRequest {
    /// Creates a request with no exclusions.
    pub fn new(mentors: Vec<Mentor>, startups: Vec<Startup>, time_slots: Vec<TimeSlot>) -> Self {
        Self {
            mentors,
            startups,
            time_slots,
            exclusions: Exclusions::default(),
        }
    }

    /// Sets the exclusion snapshot.
    pub fn with_exclusions(mut self, exclusions: Exclusions) -> Self {
        self.exclusions = exclusions;
        self
    }
}

/// Assigns startups to mentors across time slots.
///
/// Randomized: two runs on the same request may differ. Inject a seeded
/// generator through [`MentorScheduler::schedule_with_rng`] for
/// reproducible output.
///
/// # Example
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use u_mentoring::models::{Mentor, Startup, TimeSlot};
/// use u_mentoring::scheduler::{MentorScheduler, ScheduleRequest};
///
/// let mentors = vec![Mentor::new("Ada").with_sectors("FinTech", "", "")];
/// let startups = vec![
///     Startup::new("Ledgerly", "FinTech"),
///     Startup::new("Pulse", "HealthTech"),
/// ];
/// let slots = vec![TimeSlot::new("11:00 AM"), TimeSlot::new("11:20 AM")];
/// let request = ScheduleRequest::new(mentors, startups, slots);
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let result = MentorScheduler::new()
///     .schedule_with_rng(&request, &mut rng)
///     .unwrap();
/// assert_eq!(result.session_count(), 2);
/// assert_eq!(result.count_for("Ledgerly"), Some(1));
/// assert_eq!(result.count_for("Pulse"), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct MentorScheduler {
    weights: PreferenceWeights,
    session_cap: usize,
}

impl MentorScheduler {
    /// Creates a scheduler with 40/30/30 weights and a cap of 4.
    pub fn new() -> Self {
        Self {
            weights: PreferenceWeights::default(),
            session_cap: DEFAULT_SESSION_CAP,
        }
    }

    /// Sets the preference rank weights.
    pub fn with_weights(mut self, weights: PreferenceWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the per-startup session cap. Must be at least 1.
    pub fn with_session_cap(mut self, cap: usize) -> Self {
        self.session_cap = cap;
        self
    }

    /// Returns the rank weights used for preference draws.
    pub fn weights(&self) -> &PreferenceWeights {
        &self.weights
    }

    /// Returns the per-startup session cap.
    pub fn session_cap(&self) -> usize {
        self.session_cap
    }

    /// Schedules using the calling thread's random generator.
    pub fn schedule(&self, request: &ScheduleRequest) -> Result<ScheduleResult> {
        let mut rng = rand::rng();
        self.schedule_with_rng(request, &mut rng)
    }

    /// Schedules using the given random generator.
    ///
    /// # Errors
    /// - `InvalidSessionCap` if the cap is zero.
    /// - `InvalidInput` if the rosters or slots fail validation. No
    ///   assignment work is done in that case.
    pub fn schedule_with_rng<R: Rng + ?Sized>(
        &self,
        request: &ScheduleRequest,
        rng: &mut R,
    ) -> Result<ScheduleResult> {
        if self.session_cap == 0 {
            return Err(MentoringError::InvalidSessionCap(self.session_cap));
        }
        validate_input(&request.mentors, &request.startups, &request.time_slots)
            .map_err(MentoringError::InvalidInput)?;

        let exclusions = &request.exclusions;
        let mentors: Vec<&Mentor> = request
            .mentors
            .iter()
            .filter(|m| !exclusions.is_mentor_excluded(&m.name))
            .collect();
        let startups: Vec<&Startup> = request
            .startups
            .iter()
            .filter(|s| !exclusions.is_startup_excluded(&s.name))
            .collect();

        let mut counts = vec![0usize; startups.len()];
        let mut sessions: Vec<Vec<Session>> = vec![Vec::new(); mentors.len()];
        let mut skipped = 0usize;

        for (slot_index, slot) in request.time_slots.iter().enumerate() {
            for (mentor_index, mentor) in mentors.iter().enumerate() {
                let pool_indices = candidate_pool(&counts, self.session_cap);
                let pool: Vec<&Startup> = pool_indices.iter().map(|&i| startups[i]).collect();

                let Some(pick) = select_startup(mentor, &pool, &self.weights, rng) else {
                    debug!(slot = %slot, mentor = %mentor.name, "no eligible startup; skipping");
                    skipped += 1;
                    continue;
                };

                let chosen = pool_indices[pick.index];
                let startup = startups[chosen];
                counts[chosen] += 1;
                sessions[mentor_index].push(Session {
                    startup: startup.name.clone(),
                    sector: startup.sector.clone(),
                    time_slot: slot.clone(),
                    slot_index,
                    contact: startup.contact.clone(),
                    selection: pick.selection,
                });
            }
        }

        let result = ScheduleResult {
            mentors: mentors
                .iter()
                .zip(sessions)
                .map(|(m, sessions)| MentorSchedule {
                    mentor: m.name.clone(),
                    sessions,
                })
                .collect(),
            startup_counts: startups
                .iter()
                .zip(counts)
                .map(|(s, sessions)| StartupCount {
                    startup: s.name.clone(),
                    sessions,
                })
                .collect(),
        };

        debug!(
            mentors = result.mentors.len(),
            startups = result.startup_counts.len(),
            slots = request.time_slots.len(),
            sessions = result.session_count(),
            skipped,
            "schedule computed"
        );

        Ok(result)
    }
}

impl Default for MentorScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Indices of startups eligible for the next assignment.
///
/// While any startup has zero sessions, only those startups qualify.
/// Afterwards, startups below `cap` qualify. Deterministic.
pub fn candidate_pool(counts: &[usize], cap: usize) -> Vec<usize> {
    let uncovered: Vec<usize> = counts
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == 0)
        .map(|(i, _)| i)
        .collect();
    if !uncovered.is_empty() {
        return uncovered;
    }

    counts
        .iter()
        .enumerate()
        .filter(|(_, c)| **c < cap)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Selection;
    use crate::validation::ValidationErrorKind;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn slots(n: usize) -> Vec<TimeSlot> {
        (0..n).map(|i| TimeSlot::new(format!("slot-{i}"))).collect()
    }

    fn five_startups() -> Vec<Startup> {
        vec![
            Startup::new("Ledgerly", "FinTech").with_contact("a@ledgerly.io"),
            Startup::new("Coinbox", "FinTech"),
            Startup::new("Pulse", "HealthTech"),
            Startup::new("Tutorly", "EdTech"),
            Startup::new("Quizzo", "EdTech"),
        ]
    }

    fn run(request: &ScheduleRequest, seed: u64) -> ScheduleResult {
        let mut rng = SmallRng::seed_from_u64(seed);
        MentorScheduler::new()
            .schedule_with_rng(request, &mut rng)
            .unwrap()
    }

    #[test]
    fn test_single_mentor_covers_every_startup_once() {
        let mentors = vec![Mentor::new("Ada").with_sectors("FinTech", "HealthTech", "")];
        let request = ScheduleRequest::new(mentors, five_startups(), slots(5));

        for seed in 0..20 {
            let result = run(&request, seed);
            let sessions = result.sessions_for("Ada").unwrap();
            assert_eq!(sessions.len(), 5);

            let names: HashSet<&str> = sessions.iter().map(|s| s.startup.as_str()).collect();
            assert_eq!(names.len(), 5);
            let indices: Vec<usize> = sessions.iter().map(|s| s.slot_index).collect();
            assert_eq!(indices, vec![0, 1, 2, 3, 4]);
            assert!(result.startup_counts.iter().all(|c| c.sessions == 1));
        }
    }

    #[test]
    fn test_single_startup_saturates_at_cap() {
        let mentors = vec![Mentor::new("Ada"), Mentor::new("Grace")];
        let startups = vec![Startup::new("Ledgerly", "FinTech")];
        let request = ScheduleRequest::new(mentors, startups, slots(3));

        let result = run(&request, 42);

        // Slot 0 goes to both mentors, slot 1 too, then the cap is reached.
        assert_eq!(result.count_for("Ledgerly"), Some(4));
        let slot_indices = |mentor: &str| -> Vec<usize> {
            result
                .sessions_for(mentor)
                .unwrap()
                .iter()
                .map(|s| s.slot_index)
                .collect()
        };
        assert_eq!(slot_indices("Ada"), vec![0, 1]);
        assert_eq!(slot_indices("Grace"), vec![0, 1]);
    }

    #[test]
    fn test_session_fields_copied_from_startup() {
        let mentors = vec![Mentor::new("Ada")];
        let startups = vec![Startup::new("Ledgerly", "FinTech").with_contact("+1 555 0100")];
        let request = ScheduleRequest::new(mentors, startups, vec![TimeSlot::new("11:00 AM")]);

        let result = run(&request, 1);
        let s = &result.sessions_for("Ada").unwrap()[0];
        assert_eq!(s.startup, "Ledgerly");
        assert_eq!(s.sector, "FinTech");
        assert_eq!(s.contact, "+1 555 0100");
        assert_eq!(s.time_slot.label(), "11:00 AM");
        assert_eq!(s.selection, Selection::Uniform);
    }

    #[test]
    fn test_custom_session_cap() {
        let mentors = vec![Mentor::new("Ada"), Mentor::new("Grace")];
        let startups = vec![
            Startup::new("Ledgerly", "FinTech"),
            Startup::new("Pulse", "HealthTech"),
        ];
        let request = ScheduleRequest::new(mentors, startups, slots(10));

        let mut rng = SmallRng::seed_from_u64(3);
        let result = MentorScheduler::new()
            .with_session_cap(2)
            .schedule_with_rng(&request, &mut rng)
            .unwrap();

        assert_eq!(result.count_for("Ledgerly"), Some(2));
        assert_eq!(result.count_for("Pulse"), Some(2));
        assert_eq!(result.session_count(), 4);
    }

    #[test]
    fn test_zero_cap_rejected() {
        let request = ScheduleRequest::new(vec![Mentor::new("Ada")], five_startups(), slots(1));
        let err = MentorScheduler::new()
            .with_session_cap(0)
            .schedule(&request)
            .unwrap_err();
        assert!(matches!(err, MentoringError::InvalidSessionCap(0)));
    }

    #[test]
    fn test_excluded_mentors_and_startups_are_omitted() {
        let mentors = vec![
            Mentor::new("Ada").with_sectors("FinTech", "", ""),
            Mentor::new("Grace").with_sectors("EdTech", "", ""),
        ];
        let exclusions = Exclusions::new()
            .with_mentors(["Grace", "Nobody"])
            .with_startups(["Pulse", "Ghost"]);
        let request =
            ScheduleRequest::new(mentors, five_startups(), slots(8)).with_exclusions(exclusions);

        for seed in 0..10 {
            let result = run(&request, seed);
            assert!(result.sessions_for("Grace").is_none());
            assert!(result.sessions_for("Ada").is_some());
            assert_eq!(result.count_for("Pulse"), None);
            assert!(result.sessions().all(|s| s.startup != "Pulse"));
            assert_eq!(result.startup_counts.len(), 4);
            assert!(result.is_consistent());
        }
    }

    #[test]
    fn test_all_startups_excluded_skips_every_pair() {
        let mentors = vec![Mentor::new("Ada"), Mentor::new("Grace")];
        let names: Vec<String> = five_startups().into_iter().map(|s| s.name).collect();
        let request = ScheduleRequest::new(mentors, five_startups(), slots(4))
            .with_exclusions(Exclusions::new().with_startups(names));

        let result = run(&request, 9);
        assert_eq!(result.mentors.len(), 2);
        assert_eq!(result.session_count(), 0);
        assert!(result.startup_counts.is_empty());
    }

    #[test]
    fn test_all_mentors_excluded() {
        let request = ScheduleRequest::new(vec![Mentor::new("Ada")], five_startups(), slots(4))
            .with_exclusions(Exclusions::new().with_mentors(["Ada"]));

        let result = run(&request, 9);
        assert!(result.mentors.is_empty());
        assert_eq!(result.startup_counts.len(), 5);
        assert!(result.startup_counts.iter().all(|c| c.sessions == 0));
    }

    #[test]
    fn test_no_time_slots() {
        let request = ScheduleRequest::new(vec![Mentor::new("Ada")], five_startups(), vec![]);
        let result = run(&request, 0);
        assert_eq!(result.sessions_for("Ada").map(<[Session]>::len), Some(0));
        assert_eq!(result.session_count(), 0);
    }

    #[test]
    fn test_invalid_input_fails_fast() {
        let mentors = vec![Mentor::new("Ada"), Mentor::new("Ada")];
        let request = ScheduleRequest::new(mentors, five_startups(), slots(3));

        let err = MentorScheduler::new().schedule(&request).unwrap_err();
        match err {
            MentoringError::InvalidInput(errors) => {
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::DuplicateName));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_preferences_are_favoured() {
        // Plenty of capacity beyond coverage: preference matches dominate.
        let mentors = vec![Mentor::new("Ada").with_sectors("EdTech", "EdTech", "EdTech")];
        let request = ScheduleRequest::new(mentors, five_startups(), slots(13));

        let result = run(&request, 5);
        let sessions = result.sessions_for("Ada").unwrap();
        // 5 coverage sessions, then 8 more limited by the EdTech cap of 4 each.
        assert_eq!(sessions.len(), 13);
        let edtech = sessions.iter().filter(|s| s.sector == "EdTech").count();
        assert_eq!(edtech, 8);
    }

    #[test]
    fn test_same_seed_same_schedule() {
        let mentors = vec![
            Mentor::new("Ada").with_sectors("FinTech", "EdTech", ""),
            Mentor::new("Grace").with_sectors("HealthTech", "", ""),
        ];
        let request = ScheduleRequest::new(mentors, five_startups(), slots(9));
        assert_eq!(run(&request, 77), run(&request, 77));
    }

    #[test]
    fn test_candidate_pool_coverage_first() {
        assert_eq!(candidate_pool(&[1, 0, 3, 0], 4), vec![1, 3]);
    }

    #[test]
    fn test_candidate_pool_after_coverage() {
        assert_eq!(candidate_pool(&[1, 4, 3, 5], 4), vec![0, 2]);
        assert!(candidate_pool(&[4, 4], 4).is_empty());
        assert!(candidate_pool(&[], 4).is_empty());
    }
}
