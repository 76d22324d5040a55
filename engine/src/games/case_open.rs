//! Case opening draw.
//!
//! The first unit draw `r` picks the payout tier; a second, independent draw
//! `r'` scales the prize inside the tier:
//!
//! r < 0.05          profit      floor(price * (1 + 2r'))      1x-3x
//! 0.05 <= r < 0.20  refund      floor(price * (0.3 + 0.2r'))  0.3x-0.5x
//! 0.20 <= r < 0.95  scrap       floor(price * 0.1r')          0x-0.1x
//! r >= 0.95         break-even  price exactly
//!
//! The tier draw dominates: a break-even `r` pays the price whatever the
//! sub-draw says. A case counts as won when the prize is non-zero.

use super::{scaled_payout, Entropy};
use starcade_types::{
    CaseKind, CaseTier, OutcomeDetail, OutcomeResult, CASE_BREAK_EVEN_BAND, CASE_PROFIT_BAND,
    CASE_REFUND_BAND,
};

/// Map a unit draw to the payout tier.
pub fn tier_for(r: f64) -> CaseTier {
    if r < CASE_PROFIT_BAND {
        CaseTier::Profit
    } else if r < CASE_REFUND_BAND {
        CaseTier::Refund
    } else if r < CASE_BREAK_EVEN_BAND {
        CaseTier::Scrap
    } else {
        CaseTier::BreakEven
    }
}

/// Prize for a tier, scaled by the fresh sub-draw.
fn tier_prize(tier: CaseTier, price: u64, sub: f64) -> u64 {
    match tier {
        CaseTier::Profit => scaled_payout(price, 1.0 + sub * 2.0),
        CaseTier::Refund => scaled_payout(price, 0.3 + sub * 0.2),
        CaseTier::Scrap => scaled_payout(price, sub * 0.1),
        CaseTier::BreakEven => price,
    }
}

/// Open a case bought at `price` and settle.
pub fn play(kind: CaseKind, price: u64, rng: &mut impl Entropy) -> OutcomeResult {
    let tier = tier_for(rng.unit());
    // The sub-draw is consumed in every tier; tier selection and prize
    // scaling stay independent draws.
    let payout = tier_prize(tier, price, rng.unit());
    OutcomeResult {
        won: payout > 0,
        payout,
        detail: OutcomeDetail::Case { kind, tier },
    }
}
