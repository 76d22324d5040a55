pub mod games;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;


mod ledger;
mod session;
mod store;

pub use ledger::{Ledger, LedgerError};
pub use session::{Bridge, NullBridge, PlayError, Session};
pub use store::{load_ledger, save_ledger, FileStore, Memory, Store, StoreError};
