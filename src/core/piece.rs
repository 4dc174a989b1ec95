//! Piece identity: the fugitive and the detectives.
//!
//! A `Piece` names *who* a player is, independent of where they stand or
//! what tickets they hold. Pieces are small `Copy` values compared by
//! identity; the per-game data lives in [`crate::core::Player`].

use serde::{Deserialize, Serialize};

/// Detective colours. Each detective in a game carries a distinct colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Colour {
    Red,
    Green,
    Blue,
    White,
    Yellow,
}

impl Colour {
    /// All detective colours, in a fixed order.
    pub const ALL: [Colour; 5] = [
        Colour::Red,
        Colour::Green,
        Colour::Blue,
        Colour::White,
        Colour::Yellow,
    ];
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Colour::Red => "Red",
            Colour::Green => "Green",
            Colour::Blue => "Blue",
            Colour::White => "White",
            Colour::Yellow => "Yellow",
        };
        write!(f, "{name}")
    }
}

/// Identity of a player: the fugitive or one of the pursuers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    /// The sole evading piece.
    MrX,
    /// A pursuing piece, identified by colour.
    Detective(Colour),
}

impl Piece {
    /// Check if this piece is the fugitive.
    #[must_use]
    pub const fn is_mr_x(self) -> bool {
        matches!(self, Piece::MrX)
    }

    /// Check if this piece is a pursuer.
    #[must_use]
    pub const fn is_detective(self) -> bool {
        matches!(self, Piece::Detective(_))
    }

    /// Get the detective colour, if this piece is a detective.
    #[must_use]
    pub const fn colour(self) -> Option<Colour> {
        match self {
            Piece::MrX => None,
            Piece::Detective(colour) => Some(colour),
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::MrX => write!(f, "MrX"),
            Piece::Detective(colour) => write!(f, "{colour} detective"),
        }
    }
}
