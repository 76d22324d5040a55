//! Roulette color draw.
//!
//! The unit draw partitions into three bands:
//!
//! red   [0, 0.47)
//! black [0.47, 0.94)
//! green [0.94, 1.0)
//!
//! A play wins when the chosen color matches the drawn band; the payout is
//! `floor(stake * multiplier)`, zero on a loss.

use super::{scaled_payout, Entropy};
use starcade_types::{
    OutcomeDetail, OutcomeResult, RouletteColor, ROULETTE_BLACK_BAND, ROULETTE_RED_BAND,
};

/// Map a unit draw to the wheel color.
pub fn color_for(r: f64) -> RouletteColor {
    if r < ROULETTE_RED_BAND {
        RouletteColor::Red
    } else if r < ROULETTE_BLACK_BAND {
        RouletteColor::Black
    } else {
        RouletteColor::Green
    }
}

/// Spin the wheel and settle a color bet.
pub fn play(
    color: RouletteColor,
    multiplier: f64,
    stake: u64,
    rng: &mut impl Entropy,
) -> OutcomeResult {
    let drawn = color_for(rng.unit());
    let won = drawn == color;
    let payout = if won { scaled_payout(stake, multiplier) } else { 0 };
    OutcomeResult {
        won,
        payout,
        detail: OutcomeDetail::Roulette { drawn },
    }
}
