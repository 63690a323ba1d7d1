//! Time slot tokens and slot plan generation.
//!
//! # Time Model
//! A `TimeSlot` is an opaque label. The scheduler only relies on the
//! position of a slot within the ordered sequence it is given; labels
//! are compared for equality (e.g. to find the "current" session) and
//! never parsed back.
//!
//! `SlotPlan` produces the sequence for a single event day: fixed-length
//! slots separated by a fixed gap, starting at `start` and fitting
//! entirely before `end`. Labels use the 12-hour clock (`"11:20 AM"`).

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{MentoringError, Result};

/// Label format shared by generated slots and the "now" marker.
pub const SLOT_LABEL_FORMAT: &str = "%I:%M %p";

const MINUTES_PER_DAY: u32 = 24 * 60;

const ACCEPTED_TIME_FORMATS: [&str; 4] = ["%I:%M %p", "%I:%M%p", "%H:%M", "%H:%M:%S"];

/// An opaque, ordered time-slot token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSlot {
    label: String,
}

impl TimeSlot {
    /// Creates a slot with an arbitrary label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Slot token for a wall-clock time, in the generated label format.
    pub fn at(time: NaiveTime) -> Self {
        Self::new(time.format(SLOT_LABEL_FORMAT).to_string())
    }

    /// The slot label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl From<&str> for TimeSlot {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Fixed-width slot layout for one event day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotPlan {
    /// Start of the first slot.
    pub start: NaiveTime,
    /// Bound that every slot must end at or before.
    pub end: NaiveTime,
    /// Slot length in minutes (must be positive).
    pub slot_minutes: u32,
    /// Gap between consecutive slots in minutes.
    pub gap_minutes: u32,
}

impl SlotPlan {
    /// Creates a plan with 15-minute slots and 5-minute gaps.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start,
            end,
            slot_minutes: 15,
            gap_minutes: 5,
        }
    }

    /// Parses a plan from clock strings such as `"11:00 AM"`.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_clock(start)?, parse_clock(end)?))
    }

    /// Sets the slot length.
    pub fn with_slot_minutes(mut self, minutes: u32) -> Self {
        self.slot_minutes = minutes;
        self
    }

    /// Sets the gap between slots.
    pub fn with_gap_minutes(mut self, minutes: u32) -> Self {
        self.gap_minutes = minutes;
        self
    }

    /// Generates the ordered slot sequence.
    ///
    /// Slots start at `start`, `start + slot + gap`, ... as long as the
    /// slot still ends at or before `end`. Seconds are ignored.
    ///
    /// # Errors
    /// `InvalidSlotPlan` if the slot length is zero, either length exceeds
    /// a day, or `end` precedes `start`.
    pub fn generate(&self) -> Result<Vec<TimeSlot>> {
        if self.slot_minutes == 0 {
            return Err(MentoringError::InvalidSlotPlan(
                "slot length must be at least one minute".into(),
            ));
        }
        if self.slot_minutes > MINUTES_PER_DAY || self.gap_minutes > MINUTES_PER_DAY {
            return Err(MentoringError::InvalidSlotPlan(format!(
                "slot length {} and gap {} must each be at most {MINUTES_PER_DAY} minutes",
                self.slot_minutes, self.gap_minutes
            )));
        }
        if self.end < self.start {
            return Err(MentoringError::InvalidSlotPlan(format!(
                "end {} is before start {}",
                self.end.format(SLOT_LABEL_FORMAT),
                self.start.format(SLOT_LABEL_FORMAT)
            )));
        }

        let end = minute_of_day(self.end);
        let step = self.slot_minutes + self.gap_minutes;
        let mut slots = Vec::new();
        let mut cursor = minute_of_day(self.start);

        while cursor + self.slot_minutes <= end {
            if let Some(time) = NaiveTime::from_hms_opt(cursor / 60, cursor % 60, 0) {
                slots.push(TimeSlot::at(time));
            }
            cursor += step;
        }

        Ok(slots)
    }
}

impl Default for SlotPlan {
    /// 11:00 AM to 2:00 PM, 15-minute slots, 5-minute gaps.
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(11, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(14, 0, 0).unwrap_or_default(),
            slot_minutes: 15,
            gap_minutes: 5,
        }
    }
}

/// Parses a wall-clock time in 12-hour (`"2:00 PM"`) or 24-hour (`"14:00"`) form.
pub fn parse_clock(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    ACCEPTED_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| MentoringError::InvalidTime(input.to_string()))
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight() / 60
}
