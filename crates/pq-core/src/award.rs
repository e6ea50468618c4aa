//! A single award and its daily update rule.
//!
//! [`Award::advance_one_day`] applies, in order:
//! 1. BlueDistinctionPlus: nothing moves.
//! 2. The countdown drops by one while positive.
//! 3. The kind's quality rule, evaluated against the new countdown.
//! 4. Clamping: quality into `[MIN_QUALITY, MAX_QUALITY]` (no cap for the
//!    pinned kind), countdown floored at `MIN_EXPIRES_IN`.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::{
    BLUE_COMPARE_FIRST_THRESHOLD, BLUE_COMPARE_SECOND_THRESHOLD, MAX_QUALITY, MIN_EXPIRES_IN,
    MIN_QUALITY,
};
use crate::kind::AwardKind;

/// An award tracking quality and days until expiration.
///
/// Kind, name and factors are fixed at construction; quality and the
/// countdown change only through [`advance_one_day`](Self::advance_one_day).
///
/// # Examples
///
/// ```
/// use pq_core::{Award, AwardKind};
/// let mut award = Award::new(AwardKind::BlueFirst);
/// award.advance_one_day();
/// assert_eq!(award.quality(), 1);
/// assert_eq!(award.expires_in(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Award {
    kind: AwardKind,
    name: String,
    quality: i32,
    expires_in: i32,
    decrement_factor: i32,
    post_expiration_decrement_factor: i32,
}

/// Plain copy of an award's visible state, for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardSnapshot {
    pub kind: AwardKind,
    pub name: String,
    pub quality: i32,
    pub expires_in: i32,
}

impl Award {
    /// Create an award in its kind's starting state.
    pub fn new(kind: AwardKind) -> Self {
        let profile = kind.profile();
        Self {
            kind,
            name: kind.display_name(),
            quality: profile.quality,
            expires_in: profile.expires_in,
            decrement_factor: profile.decrement_factor,
            post_expiration_decrement_factor: profile.post_expiration_decrement_factor,
        }
    }

    pub fn kind(&self) -> AwardKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn expires_in(&self) -> i32 {
        self.expires_in
    }

    pub fn decrement_factor(&self) -> i32 {
        self.decrement_factor
    }

    pub fn post_expiration_decrement_factor(&self) -> i32 {
        self.post_expiration_decrement_factor
    }

    /// Whether the countdown has run out. BlueDistinctionPlus never expires
    /// even though its countdown is always zero.
    pub fn is_expired(&self) -> bool {
        self.kind != AwardKind::BlueDistinctionPlus && self.expires_in <= MIN_EXPIRES_IN
    }

    /// Advance one simulated day. Calling twice advances two days.
    pub fn advance_one_day(&mut self) {
        if self.kind == AwardKind::BlueDistinctionPlus {
            return;
        }

        if self.expires_in > 0 {
            self.expires_in -= 1;
        }

        match self.kind {
            AwardKind::GovQualityPlus
            | AwardKind::AcmePartnerFacility
            | AwardKind::TopConnectedProviders
            | AwardKind::BlueStar => self.apply_default_decay(),
            AwardKind::BlueCompare => self.apply_blue_compare(),
            AwardKind::BlueFirst => self.apply_blue_first(),
            AwardKind::BlueDistinctionPlus => {}
        }

        self.clamp();

        trace!(
            award = %self.name,
            quality = self.quality,
            expires_in = self.expires_in,
            "advanced award"
        );
    }

    /// Advance `days` simulated days.
    pub fn advance_days(&mut self, days: u64) {
        for _ in 0..days {
            self.advance_one_day();
        }
    }

    pub fn snapshot(&self) -> AwardSnapshot {
        AwardSnapshot {
            kind: self.kind,
            name: self.name.clone(),
            quality: self.quality,
            expires_in: self.expires_in,
        }
    }

    // The post-expiration check sees the quality already reduced this tick.
    fn apply_default_decay(&mut self) {
        if self.quality > 0 {
            self.quality += self.decrement_factor;
        }
        if self.expires_in <= 0 && self.quality > 0 {
            self.quality += self.post_expiration_decrement_factor;
        }
    }

    fn apply_blue_compare(&mut self) {
        if self.expires_in <= 0 {
            self.quality = MIN_QUALITY;
            return;
        }
        if self.quality >= MAX_QUALITY {
            return;
        }
        self.quality += self.decrement_factor;
        if self.expires_in < BLUE_COMPARE_FIRST_THRESHOLD && self.quality < MAX_QUALITY {
            self.quality += self.decrement_factor;
        }
        if self.expires_in < BLUE_COMPARE_SECOND_THRESHOLD && self.quality < MAX_QUALITY {
            self.quality += self.decrement_factor;
        }
    }

    fn apply_blue_first(&mut self) {
        if self.quality < MAX_QUALITY {
            self.quality += self.decrement_factor;
        }
    }

    fn clamp(&mut self) {
        if self.quality > MAX_QUALITY && self.kind != AwardKind::BlueDistinctionPlus {
            self.quality = MAX_QUALITY;
        }
        if self.quality < MIN_QUALITY {
            self.quality = MIN_QUALITY;
        }
        if self.expires_in < MIN_EXPIRES_IN {
            self.expires_in = MIN_EXPIRES_IN;
        }
    }
}

impl From<&Award> for AwardSnapshot {
    fn from(award: &Award) -> Self {
        award.snapshot()
    }
}
