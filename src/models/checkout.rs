//! Checkout record model

use serde::{Deserialize, Serialize};

/// One active loan: which user holds which book.
///
/// References are plain keys; neither side is validated against the other
/// registries. A record exists exactly while the book is out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRecord {
    pub user_id: String,
    pub isbn: String,
}
