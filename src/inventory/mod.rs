//! Per-player card inventories.
//!
//! ## Key Types
//!
//! - `CardInventory`: hands keyed by player, id allocation, grants,
//!   random awards, and validated removal.
//!
//! Removal is deliberately crate-private: the only way to take cards
//! out of a hand is through a validated trade.

pub mod hands;

pub use hands::CardInventory;
