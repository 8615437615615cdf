//! Bonus progression: the escalating troop reward for trades.
//!
//! State machine over `(trade_count, term_a, term_b)`. The seed pair
//! names the first two bonuses literally; from the third trade on each
//! bonus is the sum of the previous two (Fibonacci-style). With the
//! canonical seeds the sequence is 4, 6, 10, 16, 26, 42, …
//!
//! `preview` replays the recurrence from the stored seed pair instead
//! of mutating terms, so the next bonus is reconstructible at any
//! time: the whole progression is a pure function of the seeds and
//! `trade_count`, and `advance` moves the count forward by exactly one
//! step per successful trade.

use serde::{Deserialize, Serialize};

/// The canonical seed pair. Yields 4, 6, 10, 16, 26, 42, …
pub const CANONICAL_SEEDS: (u32, u32) = (4, 6);

/// Escalating bonus sequence shared by all players of one game.
///
/// Advances exactly once per successful trade; never decrements.
///
/// ## Usage
///
/// ```
/// use conquest_cards::trade::BonusProgression;
///
/// let mut progression = BonusProgression::new();
/// assert_eq!(progression.preview(), 4);
///
/// progression.advance();
/// assert_eq!(progression.preview(), 6);
/// // Preview is idempotent until the next advance.
/// assert_eq!(progression.preview(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusProgression {
    /// Successful trades since the last reset.
    trade_count: u32,
    /// First seed term: the bonus of the first trade.
    term_a: u32,
    /// Second seed term: the bonus of the second trade.
    term_b: u32,
}

impl Default for BonusProgression {
    fn default() -> Self {
        Self::new()
    }
}

impl BonusProgression {
    /// Create a progression with the canonical seed pair.
    ///
    /// A freshly constructed progression awards 4 on the first trade,
    /// identically to one that has been `reset_default`.
    #[must_use]
    pub fn new() -> Self {
        let (a, b) = CANONICAL_SEEDS;
        Self::with_seeds(a, b)
    }

    /// Create a progression with an explicit seed pair.
    #[must_use]
    pub fn with_seeds(seed_a: u32, seed_b: u32) -> Self {
        Self {
            trade_count: 0,
            term_a: seed_a,
            term_b: seed_b,
        }
    }

    /// Number of successful trades since the last reset.
    #[must_use]
    pub fn trade_count(&self) -> u32 {
        self.trade_count
    }

    /// The bonus the next successful trade would award.
    ///
    /// Side-effect free; repeated calls return the same value until
    /// `advance` is called. O(trade_count).
    #[must_use]
    pub fn preview(&self) -> u32 {
        match self.trade_count {
            0 => self.term_a,
            1 => self.term_b,
            n => {
                let (mut a, mut b) = (self.term_a, self.term_b);
                for _ in 1..n {
                    let next = a + b;
                    a = b;
                    b = next;
                }
                b
            }
        }
    }

    /// Step forward by exactly one successful trade.
    ///
    /// The first two steps consume the literal seed terms; after that
    /// each step moves to the next term of the additive recurrence,
    /// which `preview` replays from the seeds on demand.
    pub fn advance(&mut self) {
        self.trade_count += 1;
    }

    /// Restart the escalation with the given seed pair.
    pub fn reset(&mut self, seed_a: u32, seed_b: u32) {
        self.trade_count = 0;
        self.term_a = seed_a;
        self.term_b = seed_b;
    }

    /// Restart the escalation with the canonical seed pair.
    pub fn reset_default(&mut self) {
        let (a, b) = CANONICAL_SEEDS;
        self.reset(a, b);
    }
}
