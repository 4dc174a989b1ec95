//! A player: one piece, one location, one ticket book.
//!
//! `Player` is an immutable-per-turn value. The three transforms — `at`
//! (relocate), `using` (consume tickets), `given` (receive tickets) — all
//! derive new values, so any number of speculative successors can share a
//! predecessor. Players are never destroyed mid-game; every transition
//! replaces the mover's value inside the next state.

use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::ticket::{Ticket, Tickets};
use crate::network::NodeId;

/// An immutable player value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    piece: Piece,
    location: NodeId,
    tickets: Tickets,
}

impl Player {
    /// Create a player at a starting location with a starting ticket book.
    #[must_use]
    pub fn new(piece: Piece, location: NodeId, tickets: Tickets) -> Self {
        Self {
            piece,
            location,
            tickets,
        }
    }

    /// The piece this player controls.
    #[must_use]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The player's current location.
    #[must_use]
    pub fn location(&self) -> NodeId {
        self.location
    }

    /// The player's ticket book.
    #[must_use]
    pub fn tickets(&self) -> &Tickets {
        &self.tickets
    }

    /// Check if this player is the fugitive.
    #[must_use]
    pub fn is_mr_x(&self) -> bool {
        self.piece.is_mr_x()
    }

    /// Check if this player is a pursuer.
    #[must_use]
    pub fn is_detective(&self) -> bool {
        self.piece.is_detective()
    }

    /// Check for at least one ticket of a kind.
    #[must_use]
    pub fn has(&self, ticket: Ticket) -> bool {
        self.tickets.has(ticket)
    }

    /// Check for at least `n` tickets of a kind.
    #[must_use]
    pub fn has_at_least(&self, ticket: Ticket, n: u32) -> bool {
        self.tickets.has_at_least(ticket, n)
    }

    /// Derive a player relocated to `location`.
    #[must_use]
    pub fn at(&self, location: NodeId) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    /// Derive a player with the given tickets consumed.
    #[must_use]
    pub fn using<I: IntoIterator<Item = Ticket>>(&self, tickets: I) -> Self {
        let tickets = tickets
            .into_iter()
            .fold(self.tickets.clone(), |book, ticket| book.spend(ticket));
        Self {
            tickets,
            ..self.clone()
        }
    }

    /// Derive a player with the given tickets received.
    #[must_use]
    pub fn given<I: IntoIterator<Item = Ticket>>(&self, tickets: I) -> Self {
        let tickets = tickets
            .into_iter()
            .fold(self.tickets.clone(), |book, ticket| book.gain(ticket));
        Self {
            tickets,
            ..self.clone()
        }
    }
}
