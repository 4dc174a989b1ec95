//! Engine errors.
//!
//! Two families: construction errors (a `build` call rejected its inputs)
//! and transition errors (an `advance` call was illegal). All are surfaced
//! synchronously; a failed call commits nothing, and the prior state stays
//! fully usable. Lookup misses are `None`, never errors.

use thiserror::Error;

use super::moves::Move;
use super::piece::Colour;
use super::ticket::Ticket;
use crate::network::NodeId;

/// Errors raised by game construction and state transitions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The reveal schedule has no rounds.
    #[error("the reveal schedule is empty")]
    EmptySchedule,

    /// The transport network has no nodes.
    #[error("the transport network has no nodes")]
    EmptyNetwork,

    /// The fugitive player does not carry the MrX piece.
    #[error("the fugitive player must carry the MrX piece")]
    MrXRequired,

    /// A player in the detective list carries the MrX piece.
    #[error("a detective player must carry a detective piece")]
    DetectiveRequired,

    /// A detective holds a ticket kind reserved for the fugitive.
    #[error("the {0} detective holds a {1:?} ticket")]
    ForbiddenTicket(Colour, Ticket),

    /// Two detectives share a starting location.
    #[error("two detectives share {0}")]
    DuplicateLocation(NodeId),

    /// Two detectives share a colour.
    #[error("two detectives share the colour {0}")]
    DuplicateColour(Colour),

    /// The submitted move is not in the current set of available moves.
    #[error("move is not currently available: {0:?}")]
    IllegalMove(Move),

    /// A move was submitted after the game already ended.
    #[error("the game already has a winner")]
    GameOver,
}
