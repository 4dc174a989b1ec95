//! Core value types: pieces, tickets, players, moves, log entries, errors.
//!
//! Everything here is an immutable value. Transforms derive new values and
//! never touch their inputs, which is what lets whole game states be shared
//! and forked freely.

pub mod error;
pub mod log;
pub mod moves;
pub mod piece;
pub mod player;
pub mod ticket;

pub use error::GameError;
pub use log::LogEntry;
pub use moves::{DoubleMove, Move, SingleMove};
pub use piece::{Colour, Piece};
pub use player::Player;
pub use ticket::{Ticket, Tickets};
