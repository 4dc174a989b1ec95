//! Move values: single-leg and double-leg relocations.
//!
//! `Move` is a closed sum type; the generator, the log policy and the
//! transition logic all match exhaustively on the same two variants, so a
//! new variant cannot be silently mishandled anywhere.
//!
//! Moves are plain `Copy` values compared structurally, which gives the
//! set semantics move generation relies on: two paths that produce the
//! same (piece, source, tickets, destinations) collapse to one move.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::piece::Piece;
use super::ticket::Ticket;
use crate::network::NodeId;

/// A one-leg relocation: spend one ticket, move along one edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SingleMove {
    pub piece: Piece,
    pub source: NodeId,
    pub ticket: Ticket,
    pub destination: NodeId,
}

/// A two-leg relocation in one turn. Only the fugitive produces these,
/// and only while holding a Double ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoubleMove {
    pub piece: Piece,
    pub source: NodeId,
    pub ticket1: Ticket,
    pub destination1: NodeId,
    pub ticket2: Ticket,
    pub destination2: NodeId,
}

/// A proposed transition for one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Single(SingleMove),
    Double(DoubleMove),
}

impl Move {
    /// The piece making this move.
    #[must_use]
    pub fn piece(&self) -> Piece {
        match self {
            Move::Single(m) => m.piece,
            Move::Double(m) => m.piece,
        }
    }

    /// The origin of the move.
    #[must_use]
    pub fn source(&self) -> NodeId {
        match self {
            Move::Single(m) => m.source,
            Move::Double(m) => m.source,
        }
    }

    /// The final destination (the second leg's for a double move).
    #[must_use]
    pub fn destination(&self) -> NodeId {
        match self {
            Move::Single(m) => m.destination,
            Move::Double(m) => m.destination2,
        }
    }

    /// The legs of this move as ordered (ticket, destination) pairs.
    #[must_use]
    pub fn legs(&self) -> SmallVec<[(Ticket, NodeId); 2]> {
        match self {
            Move::Single(m) => SmallVec::from_slice(&[(m.ticket, m.destination)]),
            Move::Double(m) => {
                SmallVec::from_slice(&[(m.ticket1, m.destination1), (m.ticket2, m.destination2)])
            }
        }
    }

    /// Every ticket this move consumes, in spending order.
    ///
    /// A double move includes the Double ticket itself ahead of its two
    /// leg tickets.
    #[must_use]
    pub fn tickets(&self) -> SmallVec<[Ticket; 3]> {
        match self {
            Move::Single(m) => SmallVec::from_slice(&[m.ticket]),
            Move::Double(m) => SmallVec::from_slice(&[Ticket::Double, m.ticket1, m.ticket2]),
        }
    }

    /// Check if this is a two-leg move.
    #[must_use]
    pub fn is_double(&self) -> bool {
        matches!(self, Move::Double(_))
    }
}

impl From<SingleMove> for Move {
    fn from(m: SingleMove) -> Self {
        Move::Single(m)
    }
}

impl From<DoubleMove> for Move {
    fn from(m: DoubleMove) -> Self {
        Move::Double(m)
    }
}
