//! Triplet trading: validation, bonus progression, and orchestration.
//!
//! ## Key Types
//!
//! - `TradeError`: the three recoverable failure classes
//! - `validator`: pure legality rules for a 3-card selection
//! - `BonusProgression`: the escalating bonus state machine
//! - `coordinator`: validate/execute over borrowed components
//!
//! The coordinator owns no durable state; it orchestrates an inventory
//! and a progression owned by the caller (typically the
//! `CardExchangeEngine`).

pub mod coordinator;
pub mod error;
pub mod progression;
pub mod validator;

pub use error::TradeError;
pub use progression::{BonusProgression, CANONICAL_SEEDS};
