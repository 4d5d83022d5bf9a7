//! Player profiles and persistent statistics

pub mod store;

pub use store::ProfileStore;

use serde::{Deserialize, Serialize};

use crate::types::AgeTier;

/// Avatar colors cycled through as profiles are created.
pub const AVATAR_COLORS: &[&str] = &[
    "red", "blue", "green", "yellow", "magenta", "cyan",
];

/// Lifetime statistics folded in when a round completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlayerStats {
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub total_score: u32,
    /// Fastest round completion in seconds. `None` until the first finish.
    #[serde(default)]
    pub best_time: Option<u32>,
    #[serde(default)]
    pub verses_memorized: Vec<String>,
    #[serde(default)]
    pub favorite_mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: String,
    pub name: String,
    pub age: u8,
    /// Stored string form of the tier; unrecognized values fall back to
    /// Intermediate when parsed.
    pub age_group: String,
    pub avatar_color: String,
    #[serde(default)]
    pub stats: PlayerStats,
    /// Unix seconds at creation.
    #[serde(default)]
    pub created_at: u64,
}

impl PlayerProfile {
    /// Create a profile; the tier is derived from the age.
    pub fn new(name: impl Into<String>, age: u8, avatar_color: impl Into<String>) -> Self {
        let created_at = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            id: format!("{created_at}-{age}"),
            name: name.into(),
            age,
            age_group: AgeTier::from_age(age).as_str().to_string(),
            avatar_color: avatar_color.into(),
            stats: PlayerStats::default(),
            created_at,
        }
    }

    /// The profile's difficulty tier. Profiles written by older versions
    /// may carry an unknown group string; those play at Intermediate.
    pub fn tier(&self) -> AgeTier {
        AgeTier::from_str(&self.age_group).unwrap_or(AgeTier::Intermediate)
    }

    /// Average score per finished round, for the profile screen.
    pub fn average_score(&self) -> u32 {
        if self.stats.games_played == 0 {
            0
        } else {
            self.stats.total_score / self.stats.games_played
        }
    }
}
