use crate::{CaseKind, DiceBet, RouletteColor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot reel symbols, the 7-symbol alphabet every reel draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotSymbol {
    Cherry,
    Lemon,
    Orange,
    Grape,
    Bell,
    Diamond,
    Seven,
}

/// Reel alphabet in draw order.
pub const SLOT_SYMBOLS: [SlotSymbol; 7] = [
    SlotSymbol::Cherry,
    SlotSymbol::Lemon,
    SlotSymbol::Orange,
    SlotSymbol::Grape,
    SlotSymbol::Bell,
    SlotSymbol::Diamond,
    SlotSymbol::Seven,
];

impl SlotSymbol {
    pub fn glyph(&self) -> &'static str {
        match self {
            SlotSymbol::Cherry => "🍒",
            SlotSymbol::Lemon => "🍋",
            SlotSymbol::Orange => "🍊",
            SlotSymbol::Grape => "🍇",
            SlotSymbol::Bell => "🔔",
            SlotSymbol::Diamond => "💎",
            SlotSymbol::Seven => "7️⃣",
        }
    }
}

impl fmt::Display for SlotSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Payout tier a case draw landed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseTier {
    /// 1x-3x the price.
    Profit,
    /// 0.3x-0.5x the price.
    Refund,
    /// 0x-0.1x the price.
    Scrap,
    /// Exactly the price back.
    BreakEven,
}

/// Game-specific description of a settled play, handed to the presentation
/// layer for display. Not persisted.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeDetail {
    Roulette {
        drawn: RouletteColor,
    },
    Slots {
        reels: [SlotSymbol; 3],
    },
    Dice {
        dice: (u8, u8),
        total: u8,
        target: DiceBet,
    },
    Case {
        kind: CaseKind,
        tier: CaseTier,
    },
}

impl fmt::Display for OutcomeDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeDetail::Roulette { drawn } => write!(f, "wheel landed on {drawn}"),
            OutcomeDetail::Slots { reels } => {
                write!(f, "{} {} {}", reels[0], reels[1], reels[2])
            }
            OutcomeDetail::Dice {
                dice,
                total,
                target,
            } => write!(f, "rolled {} + {} = {total} against {target}", dice.0, dice.1),
            OutcomeDetail::Case { kind, tier } => {
                let tier = match tier {
                    CaseTier::Profit => "profit",
                    CaseTier::Refund => "partial refund",
                    CaseTier::Scrap => "scrap",
                    CaseTier::BreakEven => "break-even",
                };
                write!(f, "{} {kind} case: {tier}", kind.icon())
            }
        }
    }
}

/// Result of a single settled play.
#[derive(Clone, Debug, PartialEq)]
pub struct OutcomeResult {
    pub won: bool,
    /// Stars credited back, zero on a loss.
    pub payout: u64,
    pub detail: OutcomeDetail,
}
