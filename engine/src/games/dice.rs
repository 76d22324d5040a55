//! Two-dice total bet.
//!
//! Two faces draw uniformly from 1-6, giving a total in [2, 12]. Bet ranges:
//!
//! low    total in [2, 6]
//! high   total in [8, 12]
//! seven  total == 7
//!
//! A total of 7 sits outside both ranges, so `low` and `high` lose on it.
//! The payout on a win is `floor(stake * multiplier)`.

use super::{scaled_payout, Entropy};
use starcade_types::{DiceBet, OutcomeDetail, OutcomeResult};

/// Draw one die face.
fn roll_die(rng: &mut impl Entropy) -> u8 {
    (rng.unit() * 6.0) as u8 + 1
}

/// Whether a total wins the given bet.
pub fn bet_wins(target: DiceBet, total: u8) -> bool {
    match target {
        DiceBet::Low => (2..=6).contains(&total),
        DiceBet::High => (8..=12).contains(&total),
        DiceBet::Seven => total == 7,
    }
}

/// Roll the pair and settle.
pub fn play(
    target: DiceBet,
    multiplier: f64,
    stake: u64,
    rng: &mut impl Entropy,
) -> OutcomeResult {
    let dice = (roll_die(rng), roll_die(rng));
    let total = dice.0 + dice.1;
    let won = bet_wins(target, total);
    let payout = if won { scaled_payout(stake, multiplier) } else { 0 };
    OutcomeResult {
        won,
        payout,
        detail: OutcomeDetail::Dice {
            dice,
            total,
            target,
        },
    }
}
