use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Games offered by the mini-app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    Roulette,
    Slots,
    Dice,
    Case,
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameId::Roulette => write!(f, "roulette"),
            GameId::Slots => write!(f, "slots"),
            GameId::Dice => write!(f, "dice"),
            GameId::Case => write!(f, "case"),
        }
    }
}

/// A bet name the presentation layer handed over that no game recognizes.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown bet: {0}")]
pub struct UnknownBet(pub String);

/// Roulette wheel colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouletteColor {
    Red,
    Black,
    Green,
}

impl fmt::Display for RouletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouletteColor::Red => write!(f, "red"),
            RouletteColor::Black => write!(f, "black"),
            RouletteColor::Green => write!(f, "green"),
        }
    }
}

impl FromStr for RouletteColor {
    type Err = UnknownBet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(RouletteColor::Red),
            "black" => Ok(RouletteColor::Black),
            "green" => Ok(RouletteColor::Green),
            other => Err(UnknownBet(other.to_string())),
        }
    }
}

/// Bets over the two-die total: low is [2, 6], high is [8, 12], seven wins
/// only on exactly 7. A total of 7 sits outside both ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiceBet {
    Low,
    High,
    Seven,
}

impl fmt::Display for DiceBet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiceBet::Low => write!(f, "low"),
            DiceBet::High => write!(f, "high"),
            DiceBet::Seven => write!(f, "seven"),
        }
    }
}

impl FromStr for DiceBet {
    type Err = UnknownBet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(DiceBet::Low),
            "high" => Ok(DiceBet::High),
            "seven" => Ok(DiceBet::Seven),
            other => Err(UnknownBet(other.to_string())),
        }
    }
}

/// Prize cases available for purchase. The kind fixes the opening price; the
/// payout distribution is the same tiered rule for all kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseKind {
    Bronze,
    Silver,
    Gold,
    Diamond,
}

impl CaseKind {
    /// Opening price in stars.
    pub fn price(&self) -> u64 {
        match self {
            CaseKind::Bronze => 50,
            CaseKind::Silver => 100,
            CaseKind::Gold => 250,
            CaseKind::Diamond => 500,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CaseKind::Bronze => "🥉",
            CaseKind::Silver => "🥈",
            CaseKind::Gold => "🥇",
            CaseKind::Diamond => "💎",
        }
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseKind::Bronze => write!(f, "bronze"),
            CaseKind::Silver => write!(f, "silver"),
            CaseKind::Gold => write!(f, "gold"),
            CaseKind::Diamond => write!(f, "diamond"),
        }
    }
}

impl FromStr for CaseKind {
    type Err = UnknownBet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bronze" => Ok(CaseKind::Bronze),
            "silver" => Ok(CaseKind::Silver),
            "gold" => Ok(CaseKind::Gold),
            "diamond" => Ok(CaseKind::Diamond),
            other => Err(UnknownBet(other.to_string())),
        }
    }
}

/// A selected bet together with its presentation-supplied payout multiplier
/// where the game pays by multiplier.
#[derive(Clone, Debug, PartialEq)]
pub enum GameBet {
    Roulette { color: RouletteColor, multiplier: f64 },
    Slots,
    Dice { target: DiceBet, multiplier: f64 },
    Case { kind: CaseKind },
}

impl GameBet {
    pub fn game(&self) -> GameId {
        match self {
            GameBet::Roulette { .. } => GameId::Roulette,
            GameBet::Slots => GameId::Slots,
            GameBet::Dice { .. } => GameId::Dice,
            GameBet::Case { .. } => GameId::Case,
        }
    }
}

/// A complete play request. Immutable once handed to the session controller.
#[derive(Clone, Debug, PartialEq)]
pub struct BetSpec {
    pub bet: GameBet,
    pub stake: u64,
}

impl BetSpec {
    pub fn new(bet: GameBet, stake: u64) -> Self {
        Self { bet, stake }
    }

    /// A case opening: the stake is the case price.
    pub fn case(kind: CaseKind) -> Self {
        Self {
            bet: GameBet::Case { kind },
            stake: kind.price(),
        }
    }
}
