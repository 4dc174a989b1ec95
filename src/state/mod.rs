//! The game state aggregate: setup, snapshots, and the transition function.

pub mod game;
pub mod setup;

pub use game::GameState;
pub use setup::GameSetup;
