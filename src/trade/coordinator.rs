//! Trade orchestration: validate a proposed trade, and on success
//! atomically consume the cards and advance the progression.
//!
//! The coordinator owns no durable state; it borrows the inventory and
//! the progression from the caller. `execute` re-runs the full
//! validation before touching anything, so every failure path leaves
//! both components exactly as they were.

use smallvec::SmallVec;

use crate::core::card::{Card, CardId};
use crate::core::player::PlayerId;
use crate::inventory::CardInventory;
use crate::trade::error::TradeError;
use crate::trade::progression::BonusProgression;
use crate::trade::validator::validate_triplet;

/// Resolve a selection of card ids against a player's hand.
///
/// Duplicate ids resolve to the same card and therefore count once.
/// Fails unless exactly 3 distinct owned cards resolve.
fn resolve_selection(
    inventory: &CardInventory,
    player: PlayerId,
    card_ids: &[CardId],
) -> Result<[Card; 3], TradeError> {
    if card_ids.len() != 3 {
        return Err(TradeError::NotExactlyThree);
    }

    let hand = inventory.hand(player);
    let mut resolved: SmallVec<[Card; 3]> = SmallVec::new();
    for &id in card_ids {
        let Some(&card) = hand.iter().find(|c| c.id == id) else {
            return Err(TradeError::NotOwned);
        };
        if !resolved.iter().any(|c| c.id == id) {
            resolved.push(card);
        }
    }

    resolved
        .into_inner()
        .map_err(|_| TradeError::NotOwned)
}

/// Check whether a proposed trade would succeed.
///
/// Verifies the exactly-3 selection, ownership of every id, and
/// triplet legality, in that order. Mutates nothing.
pub fn validate(
    inventory: &CardInventory,
    player: PlayerId,
    card_ids: &[CardId],
) -> Result<(), TradeError> {
    let cards = resolve_selection(inventory, player, card_ids)?;
    validate_triplet(&cards)
}

/// Execute a trade, returning the bonus awarded.
///
/// Re-runs the full validation; on success removes exactly the three
/// selected cards from the player's hand, takes the bonus from
/// `preview`, then advances the progression. All-or-nothing: a failed
/// trade leaves the hand and the progression untouched.
pub fn execute(
    inventory: &mut CardInventory,
    progression: &mut BonusProgression,
    player: PlayerId,
    card_ids: &[CardId],
) -> Result<u32, TradeError> {
    let cards = resolve_selection(inventory, player, card_ids)?;
    validate_triplet(&cards)?;

    let ids: SmallVec<[CardId; 3]> = cards.iter().map(|c| c.id).collect();
    let removed = inventory.remove_by_ids(player, &ids);
    debug_assert_eq!(removed, 3);

    let bonus = progression.preview();
    progression.advance();

    tracing::debug!(
        %player,
        bonus,
        trade_count = progression.trade_count(),
        "triplet traded"
    );
    Ok(bonus)
}
