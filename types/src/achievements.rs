use crate::PlayerStats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Unlockable achievements. Persisted as snake_case strings in the
/// statistics record.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstGame,
    FirstWin,
    Gambler,
    Referrer,
}

impl Achievement {
    pub fn title(&self) -> &'static str {
        match self {
            Achievement::FirstGame => "First Game",
            Achievement::FirstWin => "First Win",
            Achievement::Gambler => "Gambler",
            Achievement::Referrer => "Referrer",
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Achievements earned by the given counters.
///
/// Pure and idempotent: the result depends only on the counter values, so the
/// evaluation can run on every mutation and every display refresh. Counters
/// never decrease, which makes the earned set monotone.
pub fn earned_achievements(stats: &PlayerStats) -> BTreeSet<Achievement> {
    let mut earned = BTreeSet::new();
    if stats.games_played >= 1 {
        earned.insert(Achievement::FirstGame);
    }
    if stats.games_won >= 1 {
        earned.insert(Achievement::FirstWin);
    }
    if stats.games_played >= 10 {
        earned.insert(Achievement::Gambler);
    }
    if stats.referrals >= 1 {
        earned.insert(Achievement::Referrer);
    }
    earned
}
