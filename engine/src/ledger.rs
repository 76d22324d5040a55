//! Bankroll ledger: star balance plus cumulative statistics.
//!
//! The ledger is purely in-memory; the session controller persists the state
//! after every mutation. All reads during a session come from here, never
//! from storage.

use starcade_types::{earned_achievements, LedgerState, PlayerStats, MIN_STAKE};
use thiserror::Error;

/// Ledger operation failures. A rejected operation mutates nothing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("stake below minimum: {0}")]
    InvalidStake(u64),
    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },
}

#[derive(Clone, Debug, Default)]
pub struct Ledger {
    state: LedgerState,
}

impl Ledger {
    pub fn new(state: LedgerState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    pub fn balance(&self) -> u64 {
        self.state.balance
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.state.stats
    }

    /// Deduct a stake, returning the new balance.
    ///
    /// The check and the mutation happen in the same call, with no suspension
    /// point in between: the balance that was checked is the balance that is
    /// debited.
    pub fn withdraw(&mut self, amount: u64) -> Result<u64, LedgerError> {
        if amount < MIN_STAKE {
            return Err(LedgerError::InvalidStake(amount));
        }
        if amount > self.state.balance {
            return Err(LedgerError::InsufficientFunds {
                needed: amount,
                available: self.state.balance,
            });
        }
        self.state.balance -= amount;
        Ok(self.state.balance)
    }

    /// Credit winnings or purchased stars, returning the new balance.
    pub fn deposit(&mut self, amount: u64) -> u64 {
        self.state.balance = self.state.balance.saturating_add(amount);
        self.state.balance
    }

    /// Fold a settled play into the statistics.
    ///
    /// `total_lost` accumulates the stake of every play, wins included: it
    /// tracks total wagered, not net loss.
    pub fn record_result(&mut self, stake: u64, payout: u64, won: bool) {
        let stats = &mut self.state.stats;
        stats.games_played = stats.games_played.saturating_add(1);
        if won {
            stats.games_won = stats.games_won.saturating_add(1);
            stats.total_won = stats.total_won.saturating_add(payout);
        }
        stats.total_lost = stats.total_lost.saturating_add(stake);
        self.refresh_achievements();
    }

    /// Count a successful referral.
    pub fn add_referral(&mut self) {
        self.state.stats.referrals = self.state.stats.referrals.saturating_add(1);
        self.refresh_achievements();
    }

    /// Re-evaluate achievements from the current counters. Safe to call on
    /// every display refresh: the unlocked set only grows.
    pub fn refresh_achievements(&mut self) {
        let earned = earned_achievements(&self.state.stats);
        self.state.stats.achievements.extend(earned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starcade_types::{Achievement, STARTING_BALANCE};

    #[test]
    fn test_withdraw_and_deposit() {
        let mut ledger = Ledger::default();
        assert_eq!(ledger.balance(), STARTING_BALANCE);

        assert_eq!(ledger.withdraw(30), Ok(70));
        assert_eq!(ledger.deposit(15), 85);
    }

    #[test]
    fn test_withdraw_rejects_zero_stake() {
        let mut ledger = Ledger::default();
        assert_eq!(ledger.withdraw(0), Err(LedgerError::InvalidStake(0)));
        assert_eq!(ledger.balance(), STARTING_BALANCE);
    }

    #[test]
    fn test_withdraw_rejects_overdraft() {
        let mut ledger = Ledger::default();
        assert_eq!(
            ledger.withdraw(STARTING_BALANCE + 1),
            Err(LedgerError::InsufficientFunds {
                needed: STARTING_BALANCE + 1,
                available: STARTING_BALANCE,
            })
        );
        // Rejection mutates nothing.
        assert_eq!(ledger.balance(), STARTING_BALANCE);
    }

    #[test]
    fn test_withdraw_to_exactly_zero() {
        let mut ledger = Ledger::default();
        assert_eq!(ledger.withdraw(STARTING_BALANCE), Ok(0));
        assert_eq!(ledger.withdraw(1), Err(LedgerError::InsufficientFunds {
            needed: 1,
            available: 0,
        }));
    }

    #[test]
    fn test_balance_survives_any_sequence() {
        // Balance is u64 and withdraw guards the subtraction, so no sequence
        // of operations can drive it below zero. Exercise a mixed run.
        let mut ledger = Ledger::default();
        for i in 0..1000u64 {
            let amount = (i * 7919) % 50 + 1;
            match ledger.withdraw(amount) {
                Ok(_) => {
                    if i % 3 == 0 {
                        ledger.deposit(amount * 2);
                    }
                }
                Err(LedgerError::InsufficientFunds { available, .. }) => {
                    assert!(available < amount);
                    ledger.deposit(10);
                }
                Err(err) => panic!("unexpected error: {err}"),
            }
        }
    }

    #[test]
    fn test_record_result_counts_wagered_on_wins() {
        let mut ledger = Ledger::default();
        ledger.record_result(10, 20, true);
        ledger.record_result(10, 0, false);

        let stats = ledger.stats();
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.total_won, 20);
        // The stake counts toward total_lost win or lose.
        assert_eq!(stats.total_lost, 20);
        assert_eq!(stats.win_rate(), 0.5);
    }

    #[test]
    fn test_record_result_unlocks_achievements() {
        let mut ledger = Ledger::default();
        ledger.record_result(5, 10, true);
        assert!(ledger.stats().achievements.contains(&Achievement::FirstGame));
        assert!(ledger.stats().achievements.contains(&Achievement::FirstWin));
        assert!(!ledger.stats().achievements.contains(&Achievement::Gambler));

        for _ in 0..9 {
            ledger.record_result(5, 0, false);
        }
        assert!(ledger.stats().achievements.contains(&Achievement::Gambler));
    }

    #[test]
    fn test_referral_unlocks_achievement() {
        let mut ledger = Ledger::default();
        ledger.add_referral();
        assert_eq!(ledger.stats().referrals, 1);
        assert!(ledger.stats().achievements.contains(&Achievement::Referrer));
    }

    #[test]
    fn test_refresh_achievements_idempotent() {
        let mut ledger = Ledger::default();
        ledger.record_result(5, 10, true);
        let unlocked = ledger.stats().achievements.clone();

        ledger.refresh_achievements();
        ledger.refresh_achievements();
        assert_eq!(ledger.stats().achievements, unlocked);
    }
}
