//! Mentor rotation scheduler and schedule statistics.
//!
//! # Algorithm
//!
//! `MentorScheduler` fills (slot, mentor) pairs in order, giving every
//! startup one session before any startup gets a second and capping
//! startups at four sessions afterwards. Within the candidate pool a
//! startup is drawn by weighted sector preference.
//!
//! # Stats
//!
//! `ScheduleStats` summarizes coverage, preference use, and idle pairs.

mod rotation;
mod stats;

pub use rotation::{candidate_pool, MentorScheduler, ScheduleRequest, DEFAULT_SESSION_CAP};
pub use stats::ScheduleStats;
