//! Outcome generators for the mini-app games.
//!
//! Each game module exposes a pure `play` function over the bet parameters,
//! the stake, and an injected entropy source. Generators never touch the
//! ledger; settlement belongs to the session controller.

pub mod case_open;
pub mod dice;
pub mod roulette;
pub mod slots;

use rand::Rng;
use starcade_types::{BetSpec, GameBet, OutcomeResult};

/// Source of uniform randomness in `[0, 1)`.
///
/// The unit draw is the only entropy the generators consume, so swapping in a
/// scripted source makes every outcome reproducible.
pub trait Entropy {
    fn unit(&mut self) -> f64;
}

/// Entropy backed by any `rand` generator.
pub struct GameRng<R>(R);

impl<R: Rng> GameRng<R> {
    pub fn new(inner: R) -> Self {
        Self(inner)
    }
}

impl<R: Rng> Entropy for GameRng<R> {
    fn unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Entropy from the thread-local generator.
pub fn thread_entropy() -> GameRng<rand::rngs::ThreadRng> {
    GameRng::new(rand::thread_rng())
}

/// `floor(stake * multiplier)`, truncated toward zero.
///
/// The single place the payout rounding rule lives.
pub(crate) fn scaled_payout(stake: u64, multiplier: f64) -> u64 {
    (stake as f64 * multiplier).floor() as u64
}

/// Draw the outcome for a play, dispatching to the matching game module.
pub fn draw_outcome(spec: &BetSpec, rng: &mut impl Entropy) -> OutcomeResult {
    match &spec.bet {
        GameBet::Roulette { color, multiplier } => {
            roulette::play(*color, *multiplier, spec.stake, rng)
        }
        GameBet::Slots => slots::play(spec.stake, rng),
        GameBet::Dice { target, multiplier } => dice::play(*target, *multiplier, spec.stake, rng),
        GameBet::Case { kind } => case_open::play(*kind, spec.stake, rng),
    }
}
