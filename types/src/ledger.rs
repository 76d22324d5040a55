use crate::{Achievement, STARTING_BALANCE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Cumulative play statistics, persisted as the `user_stats` record.
///
/// Field names follow the persisted wire format (camelCase keys).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStats {
    pub games_played: u64,
    pub games_won: u64,
    pub total_won: u64,
    /// Total wagered across all plays; the stake is added win or lose.
    pub total_lost: u64,
    pub referrals: u32,
    pub achievements: BTreeSet<Achievement>,
}

impl PlayerStats {
    /// Fraction of plays won, 0 before the first play.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.games_played as f64
    }
}

/// Full durable ledger state: bankroll plus statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerState {
    pub balance: u64,
    pub stats: PlayerStats,
}

impl Default for LedgerState {
    fn default() -> Self {
        Self {
            balance: STARTING_BALANCE,
            stats: PlayerStats::default(),
        }
    }
}
