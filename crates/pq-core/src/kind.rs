//! The closed set of award kinds and their names.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{KindProfile, AWARD_PROFILES};
use crate::error::AwardError;

/// Any run of characters that is not an ASCII letter or digit.
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("separator pattern is valid"));

/// Award kinds. The discriminant is the catalog ordinal and indexes
/// [`AWARD_PROFILES`].
///
/// # Examples
///
/// ```
/// use pq_core::AwardKind;
/// assert_eq!(AwardKind::BlueFirst.identifier(), "Blue_First");
/// assert_eq!(AwardKind::BlueFirst.display_name(), "Blue First");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AwardKind {
    #[serde(rename = "Gov_Quality_Plus")]
    GovQualityPlus = 0,
    #[serde(rename = "Blue_First")]
    BlueFirst = 1,
    #[serde(rename = "Acme_Partner_Facility")]
    AcmePartnerFacility = 2,
    #[serde(rename = "Blue_Distinction_Plus")]
    BlueDistinctionPlus = 3,
    #[serde(rename = "Blue_Compare")]
    BlueCompare = 4,
    #[serde(rename = "Top_Connected_Providers")]
    TopConnectedProviders = 5,
    #[serde(rename = "Blue_Star")]
    BlueStar = 6,
}

impl AwardKind {
    /// Number of kinds.
    pub const COUNT: usize = 7;

    /// Every kind in catalog order.
    pub const ALL: [AwardKind; Self::COUNT] = [
        AwardKind::GovQualityPlus,
        AwardKind::BlueFirst,
        AwardKind::AcmePartnerFacility,
        AwardKind::BlueDistinctionPlus,
        AwardKind::BlueCompare,
        AwardKind::TopConnectedProviders,
        AwardKind::BlueStar,
    ];

    /// Canonical identifier, words joined by underscores.
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::GovQualityPlus => "Gov_Quality_Plus",
            Self::BlueFirst => "Blue_First",
            Self::AcmePartnerFacility => "Acme_Partner_Facility",
            Self::BlueDistinctionPlus => "Blue_Distinction_Plus",
            Self::BlueCompare => "Blue_Compare",
            Self::TopConnectedProviders => "Top_Connected_Providers",
            Self::BlueStar => "Blue_Star",
        }
    }

    /// Human-readable name: the identifier with each run of
    /// non-alphanumeric characters collapsed to one space.
    pub fn display_name(&self) -> String {
        display_name_of(self.identifier())
    }

    /// Starting state and daily factors for this kind.
    pub fn profile(&self) -> &'static KindProfile {
        &AWARD_PROFILES[*self as usize]
    }
}

/// Collapse every run of non-alphanumeric characters in `identifier` into
/// a single space.
pub fn display_name_of(identifier: &str) -> String {
    SEPARATOR.replace_all(identifier, " ").into_owned()
}

/// Lowercased alphanumerics only, so "Blue_First", "blue first" and
/// "BlueFirst" compare equal.
fn normalize(text: &str) -> String {
    SEPARATOR.replace_all(text, "").to_ascii_lowercase()
}

impl fmt::Display for AwardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl FromStr for AwardKind {
    type Err = AwardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        if !wanted.is_empty() {
            if let Some(kind) = Self::ALL
                .iter()
                .find(|kind| normalize(kind.identifier()) == wanted)
            {
                return Ok(*kind);
            }
        }
        warn!(input = s, "rejected unknown award kind");
        Err(AwardError::InvalidKind(s.to_string()))
    }
}

impl TryFrom<u8> for AwardKind {
    type Error = AwardError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or_else(|| AwardError::InvalidKind(ordinal.to_string()))
    }
}
