//! Mentoring domain models.
//!
//! Provides the data types consumed and produced by the scheduler.
//!
//! # Domain Mappings
//!
//! | u-mentoring | Pitch day | Office hours |
//! |-------------|-----------|--------------|
//! | Mentor | Judge/Advisor | Staff member |
//! | Startup | Team | Student group |
//! | TimeSlot | Round | Booking slot |
//! | Session | Meeting | Appointment |

mod exclusion;
mod mentor;
mod schedule;
mod startup;
mod time_slot;

pub use exclusion::Exclusions;
pub use mentor::{Mentor, PREFERENCE_SLOTS};
pub use schedule::{MentorSchedule, ScheduleResult, Selection, Session, StartupCount};
pub use startup::Startup;
pub use time_slot::{parse_clock, SlotPlan, TimeSlot, SLOT_LABEL_FORMAT};
