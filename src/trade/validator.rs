//! Triplet legality rules.
//!
//! Pure and stateless. Input is a resolved selection of exactly 3
//! cards already confirmed to belong to the requesting player;
//! ownership resolution happens in the coordinator, not here.
//!
//! A selection is legal if either rule holds:
//!
//! - **Three of a kind**: some basic kind is present and its count
//!   plus the wildcard count reaches 3 (wildcards substitute for the
//!   majority kind).
//! - **Three distinct**: the wildcards cover the deficit of missing
//!   basic kinds (each missing kind costs one wildcard).
//!
//! Pure wildcards are legal: with no basic present the first rule has
//! no target kind to infer, but the deficit is 3 and three wildcards
//! cover it.

use crate::core::card::{Card, CardKind};
use crate::trade::error::TradeError;

/// Check the three-of-a-kind rule.
///
/// Legal if some basic kind present in the selection reaches a count
/// of 3 once wildcards substitute for it. Rejects a selection with no
/// basic card because no target kind can be inferred.
#[must_use]
pub fn three_of_a_kind(cards: &[Card; 3]) -> bool {
    let wild_count = cards.iter().filter(|c| c.kind.is_wild()).count();

    CardKind::BASIC.iter().any(|&kind| {
        let count = cards.iter().filter(|c| c.kind == kind).count();
        count > 0 && count + wild_count >= 3
    })
}

/// Check the three-distinct rule.
///
/// Legal if the wildcards cover the deficit of missing basic kinds.
/// Duplicates of the same basic kind count once.
#[must_use]
pub fn three_distinct(cards: &[Card; 3]) -> bool {
    let wild_count = cards.iter().filter(|c| c.kind.is_wild()).count();
    let distinct_basics = CardKind::BASIC
        .iter()
        .filter(|&&kind| cards.iter().any(|c| c.kind == kind))
        .count();

    let deficit = 3 - distinct_basics;
    wild_count >= deficit
}

/// Decide whether a resolved 3-card selection forms a legal triplet.
///
/// ```
/// use conquest_cards::core::{Card, CardId, CardKind};
/// use conquest_cards::trade::validator::validate_triplet;
///
/// let card = |id, kind| Card::new(CardId::new(id), kind);
///
/// let two_plus_wild = [
///     card(0, CardKind::Infantry),
///     card(1, CardKind::Infantry),
///     card(2, CardKind::Wild),
/// ];
/// assert!(validate_triplet(&two_plus_wild).is_ok());
/// ```
pub fn validate_triplet(cards: &[Card; 3]) -> Result<(), TradeError> {
    if three_of_a_kind(cards) || three_distinct(cards) {
        Ok(())
    } else {
        Err(TradeError::IllegalCombination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::CardId;

    fn triplet(kinds: [CardKind; 3]) -> [Card; 3] {
        [
            Card::new(CardId::new(0), kinds[0]),
            Card::new(CardId::new(1), kinds[1]),
            Card::new(CardId::new(2), kinds[2]),
        ]
    }

    use CardKind::{Artillery, Cavalry, Infantry, Wild};

    #[test]
    fn test_three_of_a_kind_pure() {
        assert!(validate_triplet(&triplet([Infantry, Infantry, Infantry])).is_ok());
        assert!(validate_triplet(&triplet([Cavalry, Cavalry, Cavalry])).is_ok());
        assert!(validate_triplet(&triplet([Artillery, Artillery, Artillery])).is_ok());
    }

    #[test]
    fn test_three_distinct_pure() {
        assert!(validate_triplet(&triplet([Infantry, Cavalry, Artillery])).is_ok());
        // Order does not matter.
        assert!(validate_triplet(&triplet([Artillery, Infantry, Cavalry])).is_ok());
    }

    #[test]
    fn test_wild_completes_three_of_a_kind() {
        let cards = triplet([Infantry, Infantry, Wild]);
        assert!(three_of_a_kind(&cards));
        assert!(validate_triplet(&cards).is_ok());
    }

    #[test]
    fn test_wild_completes_three_distinct() {
        let cards = triplet([Infantry, Cavalry, Wild]);
        assert!(three_distinct(&cards));
        assert!(validate_triplet(&cards).is_ok());
    }

    #[test]
    fn test_one_basic_two_wild() {
        // Legal under both rules: 1 + 2 wilds reaches 3 of a kind, and
        // 2 wilds cover a deficit of 2.
        let cards = triplet([Artillery, Wild, Wild]);
        assert!(three_of_a_kind(&cards));
        assert!(three_distinct(&cards));
    }

    #[test]
    fn test_pure_wildcards() {
        let cards = triplet([Wild, Wild, Wild]);
        // No target kind to infer for three-of-a-kind.
        assert!(!three_of_a_kind(&cards));
        // Deficit 3, covered by 3 wildcards.
        assert!(three_distinct(&cards));
        assert!(validate_triplet(&cards).is_ok());
    }

    #[test]
    fn test_two_and_one_is_illegal() {
        assert_eq!(
            validate_triplet(&triplet([Infantry, Infantry, Cavalry])),
            Err(TradeError::IllegalCombination)
        );
        assert_eq!(
            validate_triplet(&triplet([Cavalry, Artillery, Artillery])),
            Err(TradeError::IllegalCombination)
        );
    }

    #[test]
    fn test_deficit_without_enough_wilds_is_illegal() {
        // Two distinct basics, no wild: deficit 1 uncovered, and no
        // kind reaches three.
        let cards = triplet([Infantry, Cavalry, Cavalry]);
        assert!(!three_of_a_kind(&cards));
        assert!(!three_distinct(&cards));
        assert!(validate_triplet(&cards).is_err());
    }
}
