//! Three-reel slot machine.
//!
//! Each reel draws one symbol uniformly from the 7-symbol alphabet. Pay table
//! in multiples of the stake:
//!
//! 💎💎💎  50
//! 7️⃣7️⃣7️⃣  20
//! other triple  5
//! any pair  2
//! no match  0
//!
//! The triple check takes precedence over the pair check.

use super::Entropy;
use starcade_types::{
    OutcomeDetail, OutcomeResult, SlotSymbol, SLOTS_PAIR, SLOTS_TRIPLE_DIAMOND,
    SLOTS_TRIPLE_OTHER, SLOTS_TRIPLE_SEVEN, SLOT_SYMBOLS,
};

/// Draw one reel symbol.
fn draw_symbol(rng: &mut impl Entropy) -> SlotSymbol {
    let index = (rng.unit() * SLOT_SYMBOLS.len() as f64) as usize;
    SLOT_SYMBOLS[index]
}

/// Pay-table multiplier for a reel line.
pub fn line_multiplier(reels: &[SlotSymbol; 3]) -> u64 {
    if reels[0] == reels[1] && reels[1] == reels[2] {
        return match reels[0] {
            SlotSymbol::Diamond => SLOTS_TRIPLE_DIAMOND,
            SlotSymbol::Seven => SLOTS_TRIPLE_SEVEN,
            _ => SLOTS_TRIPLE_OTHER,
        };
    }
    if reels[0] == reels[1] || reels[1] == reels[2] || reels[0] == reels[2] {
        return SLOTS_PAIR;
    }
    0
}

/// Spin the reels and settle.
pub fn play(stake: u64, rng: &mut impl Entropy) -> OutcomeResult {
    let reels = [draw_symbol(rng), draw_symbol(rng), draw_symbol(rng)];
    let payout = stake.saturating_mul(line_multiplier(&reels));
    OutcomeResult {
        won: payout > 0,
        payout,
        detail: OutcomeDetail::Slots { reels },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::ScriptedEntropy;

    // Unit draws landing on each symbol: index = floor(r * 7).
    const CHERRY: f64 = 0.0;
    const LEMON: f64 = 0.15;
    const ORANGE: f64 = 0.3;
    const BELL: f64 = 0.6;
    const DIAMOND: f64 = 0.72;
    const SEVEN: f64 = 0.9;

    #[test]
    fn test_symbol_draw_covers_alphabet() {
        let mut rng = ScriptedEntropy::new([CHERRY, LEMON, ORANGE, BELL, DIAMOND, SEVEN]);
        assert_eq!(draw_symbol(&mut rng), SlotSymbol::Cherry);
        assert_eq!(draw_symbol(&mut rng), SlotSymbol::Lemon);
        assert_eq!(draw_symbol(&mut rng), SlotSymbol::Orange);
        assert_eq!(draw_symbol(&mut rng), SlotSymbol::Bell);
        assert_eq!(draw_symbol(&mut rng), SlotSymbol::Diamond);
        assert_eq!(draw_symbol(&mut rng), SlotSymbol::Seven);
    }

    #[test]
    fn test_diamond_jackpot() {
        let mut rng = ScriptedEntropy::new([DIAMOND, DIAMOND, DIAMOND]);
        let outcome = play(10, &mut rng);
        assert!(outcome.won);
        assert_eq!(outcome.payout, 500);
    }

    #[test]
    fn test_lucky_seven_triple() {
        let mut rng = ScriptedEntropy::new([SEVEN, SEVEN, SEVEN]);
        let outcome = play(10, &mut rng);
        assert_eq!(outcome.payout, 200);
    }

    #[test]
    fn test_plain_triple() {
        let mut rng = ScriptedEntropy::new([BELL, BELL, BELL]);
        let outcome = play(10, &mut rng);
        assert_eq!(outcome.payout, 50);
    }

    #[test]
    fn test_any_pair_pays_double() {
        // Pair in each position.
        for draws in [
            [CHERRY, CHERRY, LEMON],
            [LEMON, CHERRY, CHERRY],
            [CHERRY, LEMON, CHERRY],
        ] {
            let mut rng = ScriptedEntropy::new(draws);
            let outcome = play(10, &mut rng);
            assert!(outcome.won);
            assert_eq!(outcome.payout, 20);
        }
    }

    #[test]
    fn test_no_match_loses() {
        let mut rng = ScriptedEntropy::new([CHERRY, LEMON, ORANGE]);
        let outcome = play(10, &mut rng);
        assert!(!outcome.won);
        assert_eq!(outcome.payout, 0);
    }

    #[test]
    fn test_triple_takes_precedence_over_pair() {
        // A diamond triple also contains pairs; it must pay the jackpot rate.
        assert_eq!(
            line_multiplier(&[SlotSymbol::Diamond, SlotSymbol::Diamond, SlotSymbol::Diamond]),
            SLOTS_TRIPLE_DIAMOND
        );
    }
}
