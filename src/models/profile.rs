// Player profile models
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server region a player account lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    #[default]
    Bd,
    Ind,
    Sg,
    Br,
    Na,
    Us,
    Me,
    Th,
    Vn,
    Id,
    Tw,
    Ru,
    Pk,
    Eu,
    Sac,
}

impl Region {
    pub const ALL: [Region; 15] = [
        Region::Bd,
        Region::Ind,
        Region::Sg,
        Region::Br,
        Region::Na,
        Region::Us,
        Region::Me,
        Region::Th,
        Region::Vn,
        Region::Id,
        Region::Tw,
        Region::Ru,
        Region::Pk,
        Region::Eu,
        Region::Sac,
    ];

    /// Label used on the wire and in nicknames
    pub fn code(&self) -> &'static str {
        match self {
            Region::Bd => "BD",
            Region::Ind => "IND",
            Region::Sg => "SG",
            Region::Br => "BR",
            Region::Na => "NA",
            Region::Us => "US",
            Region::Me => "ME",
            Region::Th => "TH",
            Region::Vn => "VN",
            Region::Id => "ID",
            Region::Tw => "TW",
            Region::Ru => "RU",
            Region::Pk => "PK",
            Region::Eu => "EU",
            Region::Sac => "SAC",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Region::ALL
            .iter()
            .copied()
            .find(|r| r.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown region: {}", wanted))
    }
}

/// Ranked tier shown on the profile card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rank {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Heroic,
    Grandmaster,
    #[serde(other)]
    Unranked,
}

impl Rank {
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Bronze => "Bronze",
            Rank::Silver => "Silver",
            Rank::Gold => "Gold",
            Rank::Platinum => "Platinum",
            Rank::Diamond => "Diamond",
            Rank::Heroic => "Heroic",
            Rank::Grandmaster => "Grandmaster",
            Rank::Unranked => "Unranked",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of a player's public stats at lookup time.
///
/// Stats are owned by the upstream provider and change between lookups, so two
/// records for the same identifier are not expected to compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub nickname: String,
    /// Echoes the identifier that was looked up
    pub identifier: String,
    pub region: Region,
    pub level: u32,
    pub likes: u32,
    pub rank: Rank,
    pub rank_points: u32,
    /// Player-authored text, returned verbatim. Consumers must escape it before
    /// embedding it in markup.
    pub bio: String,
    pub avatar: String,
    pub has_premium_pass: bool,
    pub guild: String,
    /// False when the record was synthesized by the mock source
    pub is_real_data: bool,
}
