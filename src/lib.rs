//! Mentor-startup session scheduling.
//!
//! Assigns mentors to startups across a day of short time slots. Each
//! mentor meets one startup per slot; startups are drawn by weighted
//! sector preference, every startup is met once before any is met twice,
//! and no startup is met more than four times.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Mentor`, `Startup`, `TimeSlot`, `SlotPlan`,
//!   `Session`, `ScheduleResult`, `Exclusions`
//! - **`validation`**: Input integrity checks (blank or duplicate names, missing sectors)
//! - **`selection`**: Weighted sector-preference draw with uniform fallback
//! - **`scheduler`**: `MentorScheduler` and `ScheduleStats`
//! - **`roster`**: Loading mentor and startup tables from CSV, JSON or TOML
//! - **`config`**: Event configuration (slots, weights, cap, file paths)
//! - **`view`**: Search filtering and current/next session highlighting
//!
//! # Usage
//!
//! ```
//! use u_mentoring::models::{Exclusions, Mentor, SlotPlan, Startup};
//! use u_mentoring::scheduler::{MentorScheduler, ScheduleRequest};
//!
//! let mentors = vec![
//!     Mentor::new("Ada").with_sectors("FinTech", "HealthTech", ""),
//!     Mentor::new("Grace").with_sectors("EdTech", "", ""),
//! ];
//! let startups = vec![
//!     Startup::new("Ledgerly", "FinTech").with_contact("ops@ledgerly.io"),
//!     Startup::new("Tutorly", "EdTech"),
//! ];
//! let slots = SlotPlan::default().generate().unwrap();
//! let request = ScheduleRequest::new(mentors, startups, slots)
//!     .with_exclusions(Exclusions::new().with_startups(["Tutorly"]));
//!
//! let result = MentorScheduler::new().schedule(&request).unwrap();
//! assert_eq!(result.count_for("Tutorly"), None);
//! assert_eq!(result.count_for("Ledgerly"), Some(4));
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod roster;
pub mod scheduler;
pub mod selection;
pub mod validation;
pub mod view;

pub use error::{MentoringError, Result};
