//! Core value types: players, cards, and the deterministic RNG.
//!
//! Everything here is a plain value. The stateful components
//! (`CardInventory`, `BonusProgression`) live in their own modules and
//! are built on top of these.

pub mod card;
pub mod player;
pub mod rng;

pub use card::{Card, CardId, CardKind};
pub use player::PlayerId;
pub use rng::GameRng;
