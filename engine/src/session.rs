//! Session controller: one settled play per call.
//!
//! A play is a single uninterruptible transaction: validate, withdraw, draw,
//! settle, persist, emit. Everything runs synchronously on the caller's
//! thread; presentation pacing (reveal animations) happens after the result
//! is already settled.

use crate::games::{draw_outcome, Entropy};
use crate::ledger::{Ledger, LedgerError};
use crate::store::{load_ledger, save_ledger, Store};
use starcade_types::{BetSpec, BridgeMessage, OutcomeResult, StarsOffer, UserIdentity};
use thiserror::Error;
use tracing::debug;

/// Reasons a play is rejected. All abort before any state mutation and are
/// surfaced as a transient user-facing notice.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayError {
    #[error("select a bet first")]
    NoBetSelected,
    #[error("minimum stake is 1 star")]
    InvalidStake,
    #[error("not enough stars")]
    InsufficientFunds,
}

impl From<LedgerError> for PlayError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidStake(_) => PlayError::InvalidStake,
            LedgerError::InsufficientFunds { .. } => PlayError::InsufficientFunds,
        }
    }
}

/// Outbound host-platform channel. Fire-and-forget: implementations must not
/// fail the play.
pub trait Bridge {
    fn send(&mut self, message: &BridgeMessage);
}

/// Bridge that drops every message (headless runs).
#[derive(Default)]
pub struct NullBridge;

impl Bridge for NullBridge {
    fn send(&mut self, _message: &BridgeMessage) {}
}

pub struct Session<S: Store, B: Bridge> {
    identity: UserIdentity,
    ledger: Ledger,
    store: S,
    bridge: B,
}

impl<S: Store, B: Bridge> Session<S, B> {
    /// Open a session, restoring ledger state from the store.
    pub fn open(store: S, bridge: B, identity: UserIdentity) -> Self {
        let ledger = Ledger::new(load_ledger(&store));
        Self {
            identity,
            ledger,
            store,
            bridge,
        }
    }

    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    pub fn balance(&self) -> u64 {
        self.ledger.balance()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Run one play to settlement.
    ///
    /// The stake check and the withdraw are a single ledger call, so the
    /// balance that was validated is the balance that is debited. Once the
    /// withdraw lands the play runs to settlement; there is no cancellation.
    pub fn play(
        &mut self,
        spec: &BetSpec,
        rng: &mut impl Entropy,
    ) -> Result<OutcomeResult, PlayError> {
        self.ledger.withdraw(spec.stake)?;
        self.persist();

        let outcome = draw_outcome(spec, rng);
        if outcome.payout > 0 {
            self.ledger.deposit(outcome.payout);
        }
        self.ledger.record_result(spec.stake, outcome.payout, outcome.won);
        self.persist();

        debug!(
            game = %spec.bet.game(),
            stake = spec.stake,
            payout = outcome.payout,
            won = outcome.won,
            balance = self.ledger.balance(),
            "play settled"
        );
        self.bridge.send(&BridgeMessage::GameResult {
            bet_amount: spec.stake,
            stars_change: outcome.payout as i64 - spec.stake as i64,
            won: outcome.won,
        });
        Ok(outcome)
    }

    /// Credit a purchased star package, returning the new balance. There is
    /// no withdraw step: the payment happens out of band.
    pub fn purchase(&mut self, offer: StarsOffer) -> u64 {
        let balance = self.ledger.deposit(offer.stars);
        self.persist();
        self.bridge.send(&BridgeMessage::Purchase {
            stars: offer.stars,
            amount: offer.amount,
        });
        balance
    }

    /// Count a successful referral.
    pub fn add_referral(&mut self) {
        self.ledger.add_referral();
        self.persist();
    }

    /// Tear the session down, handing back the store and bridge.
    pub fn into_parts(self) -> (S, B) {
        (self.store, self.bridge)
    }

    fn persist(&mut self) {
        save_ledger(&mut self.store, self.ledger.state());
    }
}
