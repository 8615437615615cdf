//! # conquest-cards
//!
//! Card-exchange engine for a territory-conquest board game: players
//! accumulate cards of a fixed set of kinds, redeem qualifying
//! three-card combinations ("triplets") for an escalating troop bonus,
//! and the bonus follows a deterministic, globally shared progression
//! that advances only on a successful redemption.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: the engine owns no random source; random card
//!    awards consume a caller-supplied seeded generator.
//!
//! 2. **Validate-then-mutate**: trade execution re-runs the full
//!    validation first, so every failure path leaves all state
//!    untouched and exactly one success path exists.
//!
//! 3. **No hidden globals**: card id allocation and the trade counter
//!    are instance fields; each game gets its own engine.
//!
//! ## Modules
//!
//! - `core`: card kinds, card ids, player ids, deterministic RNG
//! - `inventory`: per-player hands with snapshot reads
//! - `trade`: triplet legality, bonus progression, trade orchestration
//! - `engine`: the facade a turn/phase controller consumes

pub mod core;
pub mod engine;
pub mod inventory;
pub mod trade;

// Re-export commonly used types
pub use crate::core::{Card, CardId, CardKind, GameRng, PlayerId};
pub use crate::engine::CardExchangeEngine;
pub use crate::inventory::CardInventory;
pub use crate::trade::{BonusProgression, TradeError, CANONICAL_SEEDS};
