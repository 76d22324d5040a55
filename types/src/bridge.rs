use serde::{Deserialize, Serialize};

/// Outbound messages to the host platform, serialized as JSON with a `type`
/// tag. Fire-and-forget: there is no acknowledgement contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BridgeMessage {
    /// Sent after every settled play. `stars_change` is the net balance
    /// movement (payout minus stake).
    GameResult {
        bet_amount: u64,
        stars_change: i64,
        won: bool,
    },
    /// Sent after every confirmed star purchase.
    Purchase { stars: u64, amount: u64 },
}
