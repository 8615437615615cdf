//! Card values: kinds and uniquely identified card entities.
//!
//! A `Card` is an immutable value. Its identity is the `CardId`; two
//! cards of the same kind are still distinct entities. Ids are
//! allocated by the `CardInventory` and are never reused while that
//! inventory lives.

use serde::{Deserialize, Serialize};

/// The kind printed on a card.
///
/// Three basic kinds plus `Wild`, which substitutes for any basic kind
/// when forming a legal triplet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Infantry,
    Cavalry,
    Artillery,
    Wild,
}

impl CardKind {
    /// The three basic (non-wild) kinds, in canonical order.
    pub const BASIC: [CardKind; 3] = [CardKind::Infantry, CardKind::Cavalry, CardKind::Artillery];

    /// Check if this kind is the wildcard.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, CardKind::Wild)
    }

    /// Check if this kind is one of the three basic kinds.
    #[must_use]
    pub const fn is_basic(self) -> bool {
        !self.is_wild()
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardKind::Infantry => "Infantry",
            CardKind::Cavalry => "Cavalry",
            CardKind::Artillery => "Artillery",
            CardKind::Wild => "Wild",
        };
        write!(f, "{name}")
    }
}

/// Unique identifier for a card entity.
///
/// Monotonically allocated by the inventory; never reused until a full
/// reset via `clear_all`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card held in a player's hand.
///
/// Immutable once created; consumed (discarded) when traded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identity of this card entity.
    pub id: CardId,
    /// The kind printed on the card.
    pub kind: CardKind,
}

impl Card {
    /// Create a card value.
    #[must_use]
    pub const fn new(id: CardId, kind: CardKind) -> Self {
        Self { id, kind }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.kind, self.id.raw())
    }
}
