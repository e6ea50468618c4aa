//! Award constants and the per-kind profile table.
//!
//! Every kind's starting state lives in [`AWARD_PROFILES`], one row per kind
//! in catalog order. Adding a kind means adding a variant to
//! [`AwardKind`] and a row here.

use crate::kind::AwardKind;

/// Lowest quality any award can hold.
pub const MIN_QUALITY: i32 = 0;

/// Quality cap for every kind except [`AwardKind::BlueDistinctionPlus`].
pub const MAX_QUALITY: i32 = 50;

/// Fixed quality of [`AwardKind::BlueDistinctionPlus`].
pub const PINNED_QUALITY: i32 = 80;

/// Floor of the expiration countdown.
pub const MIN_EXPIRES_IN: i32 = 0;

/// Amount added to quality per day unless a kind overrides it.
pub const DEFAULT_DECREMENT_FACTOR: i32 = -1;

/// Extra amount added per day once expired, unless a kind overrides it.
pub const DEFAULT_POST_EXPIRATION_DECREMENT_FACTOR: i32 = -1;

/// BlueCompare gains an extra step when fewer than this many days remain.
pub const BLUE_COMPARE_FIRST_THRESHOLD: i32 = 11;

/// BlueCompare gains a third step when fewer than this many days remain.
pub const BLUE_COMPARE_SECOND_THRESHOLD: i32 = 6;

/// Fixed starting state and daily factors for one award kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindProfile {
    pub kind: AwardKind,
    pub expires_in: i32,
    pub quality: i32,
    /// Added to quality each day the rule applies.
    pub decrement_factor: i32,
    /// Added on top of `decrement_factor` once the countdown reaches zero.
    pub post_expiration_decrement_factor: i32,
}

/// Profile table indexed by [`AwardKind`] discriminant.
pub static AWARD_PROFILES: [KindProfile; AwardKind::COUNT] = [
    KindProfile {
        kind: AwardKind::GovQualityPlus,
        expires_in: 10,
        quality: 20,
        decrement_factor: DEFAULT_DECREMENT_FACTOR,
        post_expiration_decrement_factor: DEFAULT_POST_EXPIRATION_DECREMENT_FACTOR,
    },
    KindProfile {
        kind: AwardKind::BlueFirst,
        expires_in: 2,
        quality: 0,
        decrement_factor: 1,
        post_expiration_decrement_factor: 0,
    },
    KindProfile {
        kind: AwardKind::AcmePartnerFacility,
        expires_in: 5,
        quality: 7,
        decrement_factor: DEFAULT_DECREMENT_FACTOR,
        post_expiration_decrement_factor: DEFAULT_POST_EXPIRATION_DECREMENT_FACTOR,
    },
    KindProfile {
        kind: AwardKind::BlueDistinctionPlus,
        expires_in: 0,
        quality: PINNED_QUALITY,
        decrement_factor: 0,
        post_expiration_decrement_factor: 0,
    },
    KindProfile {
        kind: AwardKind::BlueCompare,
        expires_in: 15,
        quality: 20,
        decrement_factor: 1,
        post_expiration_decrement_factor: 0,
    },
    KindProfile {
        kind: AwardKind::TopConnectedProviders,
        expires_in: 3,
        quality: 6,
        decrement_factor: DEFAULT_DECREMENT_FACTOR,
        post_expiration_decrement_factor: DEFAULT_POST_EXPIRATION_DECREMENT_FACTOR,
    },
    // Decays at twice the default rate, before and after expiry.
    KindProfile {
        kind: AwardKind::BlueStar,
        expires_in: 10,
        quality: 30,
        decrement_factor: DEFAULT_DECREMENT_FACTOR * 2,
        post_expiration_decrement_factor: DEFAULT_POST_EXPIRATION_DECREMENT_FACTOR * 2,
    },
];
