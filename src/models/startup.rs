//! Startup model.
//!
//! A startup belongs to exactly one sector and carries a free-form
//! contact string (phone, email) shown next to its session count.

use serde::{Deserialize, Serialize};

/// A startup receiving mentor sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Startup {
    /// Unique startup name.
    pub name: String,
    /// Industry sector, matched against mentor preferences.
    pub sector: String,
    /// Contact string.
    pub contact: String,
}

impl Startup {
    /// Creates a startup in the given sector with an empty contact.
    pub fn new(name: impl Into<String>, sector: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sector: sector.into(),
            contact: String::new(),
        }
    }

    /// Sets the contact string.
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }
}
