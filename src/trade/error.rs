//! Trade failure taxonomy.
//!
//! All three failures are expected, frequent outcomes of normal play
//! (a player attempting a trade prematurely). None of them panic, and
//! the engine leaves all state unchanged on every failure path. The
//! `Display` text is the user-facing reason; hosts may present it
//! verbatim or localize it.

use thiserror::Error;

/// Why a proposed trade was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TradeError {
    /// The selection does not contain exactly 3 card ids.
    #[error("not exactly 3 selected")]
    NotExactlyThree,

    /// One or more selected ids do not resolve to cards currently held
    /// by the requesting player. Duplicate ids count once.
    #[error("cards do not belong to player")]
    NotOwned,

    /// The resolved 3 cards satisfy neither the three-of-a-kind nor
    /// the three-distinct rule under wildcard substitution.
    #[error("cards form neither three of a kind nor three distinct kinds")]
    IllegalCombination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_strings() {
        assert_eq!(TradeError::NotExactlyThree.to_string(), "not exactly 3 selected");
        assert_eq!(TradeError::NotOwned.to_string(), "cards do not belong to player");
        assert_eq!(
            TradeError::IllegalCombination.to_string(),
            "cards form neither three of a kind nor three distinct kinds"
        );
    }
}
