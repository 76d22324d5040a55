//! Test doubles for the engine.

use crate::games::Entropy;
use crate::session::Bridge;
use starcade_types::BridgeMessage;
use std::collections::VecDeque;

/// Entropy that replays a fixed script of unit draws.
///
/// Panics when the script runs dry: a test drawing more than it scripted is
/// a bug in the test.
pub struct ScriptedEntropy {
    draws: VecDeque<f64>,
}

impl ScriptedEntropy {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }
}

impl Entropy for ScriptedEntropy {
    fn unit(&mut self) -> f64 {
        self.draws.pop_front().expect("entropy script exhausted")
    }
}

/// Bridge that records every message for assertions.
#[derive(Default)]
pub struct RecordingBridge {
    pub sent: Vec<BridgeMessage>,
}

impl Bridge for RecordingBridge {
    fn send(&mut self, message: &BridgeMessage) {
        self.sent.push(message.clone());
    }
}
