/// Balance granted to a fresh ledger (also the fallback after a corrupt or
/// missing load).
pub const STARTING_BALANCE: u64 = 100;

/// Minimum stake accepted for any play.
pub const MIN_STAKE: u64 = 1;

/// Roulette band boundaries over the unit draw: red below `RED_BAND`, black
/// up to `BLACK_BAND`, green above.
pub const ROULETTE_RED_BAND: f64 = 0.47;
pub const ROULETTE_BLACK_BAND: f64 = 0.94;

/// Slots pay table, in multiples of the stake.
pub const SLOTS_TRIPLE_DIAMOND: u64 = 50;
pub const SLOTS_TRIPLE_SEVEN: u64 = 20;
pub const SLOTS_TRIPLE_OTHER: u64 = 5;
pub const SLOTS_PAIR: u64 = 2;

/// Case tier boundaries over the unit draw.
pub const CASE_PROFIT_BAND: f64 = 0.05;
pub const CASE_REFUND_BAND: f64 = 0.20;
pub const CASE_BREAK_EVEN_BAND: f64 = 0.95;

/// Default payout multipliers offered by the presentation layer.
pub const ROULETTE_COLOR_MULTIPLIER: f64 = 2.0;
pub const ROULETTE_GREEN_MULTIPLIER: f64 = 14.0;
pub const DICE_RANGE_MULTIPLIER: f64 = 2.0;
pub const DICE_SEVEN_MULTIPLIER: f64 = 5.0;

/// Synthetic identity used when the host supplies no user data.
pub const GUEST_ID: u64 = 12_345;
pub const GUEST_NAME: &str = "Guest";

/// Key-value store keys. The balance is a decimal string, the statistics a
/// JSON record.
pub const BALANCE_KEY: &str = "user_stars";
pub const STATS_KEY: &str = "user_stats";
