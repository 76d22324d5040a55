use serde::{Deserialize, Serialize};

/// A star top-up package: pay `amount` in the host currency, receive `stars`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarsOffer {
    pub amount: u64,
    pub stars: u64,
}

/// Fixed purchase menu presented by the host UI. Larger packages carry a
/// bonus over the 1:1 base rate.
pub const STAR_OFFERS: [StarsOffer; 3] = [
    StarsOffer {
        amount: 100,
        stars: 100,
    },
    StarsOffer {
        amount: 500,
        stars: 550,
    },
    StarsOffer {
        amount: 1000,
        stars: 1200,
    },
];
