//! Tickets: the resource consumed by every move.
//!
//! ## Ticket
//!
//! One kind per transport mode, plus two fugitive-only kinds: `Secret`
//! (usable on any edge regardless of mode) and `Double` (enables a two-leg
//! move). Detectives never hold `Secret` or `Double`.
//!
//! ## Tickets
//!
//! A per-player ticket book: kind -> non-negative count. Backed by an `im`
//! persistent map so that deriving a successor book is cheap and never
//! disturbs the predecessor.

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};

/// A ticket kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    /// Usable on any edge, whatever its transport modes. Fugitive-only.
    Secret,
    /// Enables a two-leg move in a single turn. Fugitive-only.
    Double,
}

impl Ticket {
    /// All ticket kinds, in a fixed order.
    pub const ALL: [Ticket; 5] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Secret,
        Ticket::Double,
    ];

    /// Check if a detective may ever hold this kind.
    #[must_use]
    pub const fn detective_may_hold(self) -> bool {
        !matches!(self, Ticket::Secret | Ticket::Double)
    }
}

/// A ticket book: count per ticket kind.
///
/// Absent kinds count as zero; lookups never fail. The book is a value:
/// `spend` and `gain` return new books and leave `self` untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tickets {
    counts: ImHashMap<Ticket, u32>,
}

impl Tickets {
    /// An empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion of a count for one kind.
    #[must_use]
    pub fn with(mut self, ticket: Ticket, count: u32) -> Self {
        self.counts.insert(ticket, count);
        self
    }

    /// Get the count for a kind. Zero for kinds never held.
    #[must_use]
    pub fn count(&self, ticket: Ticket) -> u32 {
        self.counts.get(&ticket).copied().unwrap_or(0)
    }

    /// Check for at least one ticket of a kind.
    #[must_use]
    pub fn has(&self, ticket: Ticket) -> bool {
        self.count(ticket) > 0
    }

    /// Check for at least `n` tickets of a kind.
    #[must_use]
    pub fn has_at_least(&self, ticket: Ticket, n: u32) -> bool {
        self.count(ticket) >= n
    }

    /// Total number of tickets across all kinds.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Derive a book with one ticket of `kind` removed.
    ///
    /// Callers must have established sufficiency (move legality does); a
    /// count can never go negative.
    #[must_use]
    pub fn spend(&self, ticket: Ticket) -> Self {
        let count = self.count(ticket);
        assert!(count > 0, "spending a {ticket:?} ticket that is not held");
        Self {
            counts: self.counts.update(ticket, count - 1),
        }
    }

    /// Derive a book with one ticket of `kind` added.
    #[must_use]
    pub fn gain(&self, ticket: Ticket) -> Self {
        Self {
            counts: self.counts.update(ticket, self.count(ticket) + 1),
        }
    }

    /// Iterate over (kind, count) pairs with non-zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (Ticket, u32)> + '_ {
        self.counts
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(&ticket, &count)| (ticket, count))
    }
}

impl FromIterator<(Ticket, u32)> for Tickets {
    fn from_iter<I: IntoIterator<Item = (Ticket, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
