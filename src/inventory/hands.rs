//! Card inventory: who holds which cards.
//!
//! The inventory owns every live card. A card id appears in at most
//! one hand at any time, and once removed by a trade it never
//! reappears. Hand order is insertion order; it is exposed for reads
//! but carries no game meaning.
//!
//! ## Snapshot Reads
//!
//! `hand` returns a defensive copy, never a reference into live
//! storage, so callers cannot corrupt invariants by mutating a
//! returned sequence.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::core::card::{Card, CardId, CardKind};
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;

/// Per-player hands plus the card id allocator.
///
/// One instance per running game. All mutation happens through the
/// inventory so id uniqueness is enforced in a single place.
///
/// ## Usage
///
/// ```
/// use conquest_cards::core::{CardKind, PlayerId};
/// use conquest_cards::inventory::CardInventory;
///
/// let mut inventory = CardInventory::new();
/// let player = PlayerId::new(0);
///
/// let card = inventory.add_card(player, CardKind::Infantry);
/// assert_eq!(inventory.hand(player), vec![card]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CardInventory {
    /// Hands keyed by player. Absent key = player never received a card.
    hands: FxHashMap<PlayerId, Vec<Card>>,

    /// Next card id to allocate. Never reused until `clear_all`.
    next_id: u32,
}

impl CardInventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a snapshot copy of a player's hand.
    ///
    /// Returns an empty vec for players that have never received a
    /// card. The returned vec does not alias internal storage.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Vec<Card> {
        self.hands.get(&player).cloned().unwrap_or_default()
    }

    /// Get the number of cards a player holds.
    #[must_use]
    pub fn hand_size(&self, player: PlayerId) -> usize {
        self.hands.get(&player).map_or(0, Vec::len)
    }

    /// Get the total number of live cards across all hands.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hands.values().map(Vec::len).sum()
    }

    /// Grant a card of the given kind to a player.
    ///
    /// Allocates a fresh id and appends to the player's hand, creating
    /// the hand if the player is unknown. Infallible.
    pub fn add_card(&mut self, player: PlayerId, kind: CardKind) -> Card {
        let card = Card::new(CardId::new(self.next_id), kind);
        self.next_id += 1;
        self.hands.entry(player).or_default().push(card);
        tracing::trace!(%player, %card, "card granted");
        card
    }

    /// Award a random card to a player.
    ///
    /// The kind is drawn uniformly from the three basic kinds, except
    /// with probability `wild_chance` the card is Wild instead. The
    /// wild check is only consulted when `wild_chance > 0`, so zero or
    /// negative values disable Wild entirely; values above 1 behave as
    /// certainty.
    pub fn award_random_card(
        &mut self,
        player: PlayerId,
        rng: &mut GameRng,
        wild_chance: f64,
    ) -> Card {
        let kind = if wild_chance > 0.0 && rng.gen_bool(wild_chance.min(1.0)) {
            CardKind::Wild
        } else {
            CardKind::BASIC[rng.gen_range_usize(0..CardKind::BASIC.len())]
        };
        self.add_card(player, kind)
    }

    /// Remove the cards with the given ids from a player's hand.
    ///
    /// At most one removal per matching id; ids not held by the player
    /// are ignored. Returns the number of cards removed. Crate-private:
    /// the trade coordinator calls this after validation, and no public
    /// mutation bypasses that validation.
    pub(crate) fn remove_by_ids(&mut self, player: PlayerId, ids: &[CardId]) -> usize {
        let ids: FxHashSet<CardId> = ids.iter().copied().collect();
        let Some(hand) = self.hands.get_mut(&player) else {
            return 0;
        };
        let before = hand.len();
        hand.retain(|card| !ids.contains(&card.id));
        before - hand.len()
    }

    /// Empty every hand and restart id allocation.
    ///
    /// Used on a full game reset.
    pub fn clear_all(&mut self) {
        self.hands.clear();
        self.next_id = 0;
    }
}
