//! # foxhunt
//!
//! A rules engine for turn-based hidden-movement pursuit games on
//! transport networks: one fugitive (MrX) evades a team of detectives
//! across a graph of locations, every move spending a typed ticket, with
//! the fugitive's position revealed only on scheduled rounds.
//!
//! ## Design Principles
//!
//! 1. **States are values**: a [`GameState`] is immutable once built.
//!    [`GameState::advance`] derives a new snapshot and never touches its
//!    predecessor, so search code can hold thousands of states that share
//!    a common prefix.
//!
//! 2. **Persistent Data Structures**: all state collections use `im`, so
//!    deriving a successor is cheap and structural sharing is free.
//!
//! 3. **Rules are pure functions**: move generation and win evaluation
//!    take their inputs explicitly and perform no I/O; the engine is
//!    fully deterministic.
//!
//! 4. **The engine decides nothing**: choosing which legal move to play —
//!    UI, AI, replay — is the caller's job, as is loading the network.
//!
//! ## Modules
//!
//! - `core`: pieces, tickets, players, moves, log entries, errors
//! - `network`: the read-only transport graph
//! - `rules`: legal-move generation and win evaluation
//! - `state`: game setup and the immutable state aggregate
//! - `model`: observer layer dispatching move-made / game-over events

pub mod core;
pub mod model;
pub mod network;
pub mod rules;
pub mod state;

// Re-export commonly used types
pub use crate::core::{
    Colour, DoubleMove, GameError, LogEntry, Move, Piece, Player, SingleMove, Ticket, Tickets,
};

pub use crate::network::{Network, NodeId, Transport};

pub use crate::rules::MoveContext;

pub use crate::state::{GameSetup, GameState};

pub use crate::model::{Event, Model, ModelError, Observer};
