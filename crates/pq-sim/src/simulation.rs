//! Ordered award collection advanced one day at a time.

use std::cmp::Reverse;

use pq_core::constants::{MAX_QUALITY, MIN_QUALITY};
use pq_core::{Award, AwardKind, AwardSnapshot};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Awards ranked by quality, plus the number of days simulated so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    awards: Vec<Award>,
    day: u64,
}

/// Ranked state after a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub day: u64,
    pub awards: Vec<AwardSnapshot>,
}

/// Aggregate counters over the current awards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationStats {
    pub day: u64,
    pub total_quality: i64,
    /// Awards whose countdown has run out.
    pub expired: usize,
    /// Awards at `MAX_QUALITY`.
    pub at_cap: usize,
    /// Awards at `MIN_QUALITY`.
    pub exhausted: usize,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    /// One award of every kind, in catalog order.
    pub fn new() -> Self {
        Self::with_kinds(AwardKind::ALL)
    }

    /// One independent award per entry of `kinds`, ranked by starting
    /// quality. Equal qualities keep the order given.
    pub fn with_kinds(kinds: impl IntoIterator<Item = AwardKind>) -> Self {
        let mut sim = Self {
            awards: kinds.into_iter().map(Award::new).collect(),
            day: 0,
        };
        sim.rank();
        sim
    }

    pub fn awards(&self) -> &[Award] {
        &self.awards
    }

    /// Days simulated so far.
    pub fn day(&self) -> u64 {
        self.day
    }

    /// Advance every award once, then re-rank.
    ///
    /// All awards move before any reordering, so a snapshot never mixes
    /// two different days.
    pub fn tick(&mut self) {
        self.day += 1;
        for award in &mut self.awards {
            award.advance_one_day();
            debug!(
                day = self.day,
                award = award.name(),
                quality = award.quality(),
                expires_in = award.expires_in(),
                "award advanced"
            );
        }
        self.rank();
        info!(day = self.day, awards = self.awards.len(), "day simulated");
    }

    /// Run `days` ticks.
    pub fn run(&mut self, days: u64) {
        for _ in 0..days {
            self.tick();
        }
    }

    pub fn snapshot(&self) -> DaySnapshot {
        DaySnapshot {
            day: self.day,
            awards: self.awards.iter().map(Award::snapshot).collect(),
        }
    }

    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            day: self.day,
            total_quality: self.awards.iter().map(|a| i64::from(a.quality())).sum(),
            expired: self.awards.iter().filter(|a| a.is_expired()).count(),
            at_cap: self
                .awards
                .iter()
                .filter(|a| a.quality() == MAX_QUALITY)
                .count(),
            exhausted: self
                .awards
                .iter()
                .filter(|a| a.quality() == MIN_QUALITY)
                .count(),
        }
    }

    // Stable sort: equal qualities keep their previous relative order.
    fn rank(&mut self) {
        self.awards.sort_by_key(|a| Reverse(a.quality()));
    }
}
