//! # pq-core — Award engine for the provider quality simulation.
//!
//! All arithmetic is integer-only and clamped, so every tick is total.
//!
//! - **Kinds**: a closed set of seven award kinds, each with a fixed profile
//!   of initial quality, expiration countdown and per-day factors.
//! - **Daily rules**: one tick moves the countdown toward zero and adjusts
//!   quality by the kind's rule, then clamps into range.
//! - **Names**: display names are derived from the kind identifier.

pub mod award;
pub mod constants;
pub mod error;
pub mod kind;

pub use award::{Award, AwardSnapshot};
pub use constants::KindProfile;
pub use error::AwardError;
pub use kind::AwardKind;
