//! Sector-preference startup selection.
//!
//! Picks one startup from a candidate pool for a mentor.
//!
//! # Algorithm
//!
//! 1. If no candidate's sector matches any of the mentor's preferences,
//!    choose uniformly over the whole pool.
//! 2. Otherwise draw one preference rank with probability proportional to
//!    its weight (default 40/30/30). Blank ranks keep their weight.
//! 3. If the drawn rank is blank, or no candidate has its sector, fall
//!    back to a uniform choice over the whole pool. There is no re-draw,
//!    so a scarce 1st-choice sector is slightly under-weighted.
//! 4. Otherwise choose uniformly among the candidates in the drawn sector.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::MentoringError;
use crate::models::{Mentor, Selection, Startup, PREFERENCE_SLOTS};

/// Default rank weights: 1st choice 40, 2nd and 3rd choice 30 each.
pub const DEFAULT_WEIGHTS: [u32; PREFERENCE_SLOTS] = [40, 30, 30];

const RANK_INDICES: [usize; PREFERENCE_SLOTS] = [0, 1, 2];

/// Relative draw weights for the three preference ranks.
///
/// At least one weight must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u32; 3]", into = "[u32; 3]")]
pub struct PreferenceWeights([u32; PREFERENCE_SLOTS]);

impl PreferenceWeights {
    /// Creates weights for ranks 1..3.
    ///
    /// # Errors
    /// `InvalidWeights` if every weight is zero.
    pub fn new(weights: [u32; PREFERENCE_SLOTS]) -> Result<Self, MentoringError> {
        if weights.iter().all(|&w| w == 0) {
            return Err(MentoringError::InvalidWeights(
                "at least one rank weight must be positive".into(),
            ));
        }
        Ok(Self(weights))
    }

    /// Weights in rank order.
    pub fn as_array(&self) -> [u32; PREFERENCE_SLOTS] {
        self.0
    }
}

impl Default for PreferenceWeights {
    fn default() -> Self {
        Self(DEFAULT_WEIGHTS)
    }
}

impl TryFrom<[u32; PREFERENCE_SLOTS]> for PreferenceWeights {
    type Error = MentoringError;

    fn try_from(weights: [u32; PREFERENCE_SLOTS]) -> Result<Self, Self::Error> {
        Self::new(weights)
    }
}

impl From<PreferenceWeights> for [u32; PREFERENCE_SLOTS] {
    fn from(weights: PreferenceWeights) -> Self {
        weights.0
    }
}

/// A selected candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    /// Position of the chosen startup in the pool.
    pub index: usize,
    /// Selection path taken.
    pub selection: Selection,
}

/// Selects a startup from `pool` for `mentor`.
///
/// Returns `None` only when the pool is empty.
pub fn select_startup<R: Rng + ?Sized>(
    mentor: &Mentor,
    pool: &[&Startup],
    weights: &PreferenceWeights,
    rng: &mut R,
) -> Option<Pick> {
    if pool.is_empty() {
        return None;
    }

    if pool.iter().any(|s| mentor.prefers(&s.sector)) {
        if let Some(pick) = preferred_pick(mentor, pool, weights, rng) {
            return Some(pick);
        }
        trace!(mentor = %mentor.name, "drawn preference has no candidate; choosing uniformly");
    }

    Some(Pick {
        index: rng.random_range(0..pool.len()),
        selection: Selection::Uniform,
    })
}

fn preferred_pick<R: Rng + ?Sized>(
    mentor: &Mentor,
    pool: &[&Startup],
    weights: &PreferenceWeights,
    rng: &mut R,
) -> Option<Pick> {
    let rank = *RANK_INDICES
        .choose_weighted(rng, |&i| weights.0[i])
        .ok()?;
    let sector = mentor.preference(rank)?;

    let matching: Vec<usize> = pool
        .iter()
        .enumerate()
        .filter(|(_, s)| s.sector == sector)
        .map(|(i, _)| i)
        .collect();

    matching.choose(rng).map(|&index| Pick {
        index,
        selection: Selection::Preference {
            rank: (rank + 1) as u8,
        },
    })
}
