mod achievements;
mod bet;
mod bridge;
mod constants;
mod identity;
mod ledger;
mod offers;
mod outcome;

pub use achievements::*;
pub use bet::*;
pub use bridge::*;
pub use constants::*;
pub use identity::*;
pub use ledger::*;
pub use offers::*;
pub use outcome::*;
