//! The game state aggregate and its transition function.
//!
//! A `GameState` is one immutable snapshot: setup, the pieces still to act
//! this round, the fugitive's travel log, every player's value, and cached
//! available-move and winner sets computed once at construction.
//!
//! `advance` derives a brand-new snapshot from the current one plus one
//! move. The predecessor is never touched, so callers can keep any number
//! of states alive at once and explore alternative lines from a shared
//! prefix. All collections are `im` persistent structures; deriving a
//! successor shares almost all of its storage with its parent.

use im::{HashSet as ImHashSet, Vector as ImVector};
use rustc_hash::FxHashSet;

use super::setup::GameSetup;
use crate::core::{Colour, GameError, LogEntry, Move, Piece, Player, Tickets};
use crate::network::NodeId;
use crate::rules::{winner, MoveContext};

/// One immutable snapshot of a game in progress (or finished).
#[derive(Clone, Debug)]
pub struct GameState {
    setup: GameSetup,
    remaining: ImHashSet<Piece>,
    log: ImVector<LogEntry>,
    mr_x: Player,
    detectives: ImVector<Player>,
    moves: ImHashSet<Move>,
    winner: ImHashSet<Piece>,
}

impl GameState {
    /// Build the initial state of a game.
    ///
    /// Performs every construction-time invariant check: non-empty
    /// schedule and network, correct piece kinds, no fugitive-only tickets
    /// in detective hands, pairwise-distinct detective locations and
    /// colours. The fugitive moves first.
    pub fn build(
        setup: GameSetup,
        mr_x: Player,
        detectives: Vec<Player>,
    ) -> Result<Self, GameError> {
        if setup.rounds() == 0 {
            return Err(GameError::EmptySchedule);
        }
        if setup.network().node_count() == 0 {
            return Err(GameError::EmptyNetwork);
        }
        if !mr_x.is_mr_x() {
            return Err(GameError::MrXRequired);
        }
        Self::inspect_detectives(&detectives)?;

        Ok(Self::with_caches(
            setup,
            ImHashSet::unit(Piece::MrX),
            ImVector::new(),
            mr_x,
            detectives.into_iter().collect(),
        ))
    }

    fn inspect_detectives(detectives: &[Player]) -> Result<(), GameError> {
        let mut locations: FxHashSet<NodeId> = FxHashSet::default();
        let mut colours: FxHashSet<Colour> = FxHashSet::default();

        for detective in detectives {
            let colour = match detective.piece() {
                Piece::MrX => return Err(GameError::DetectiveRequired),
                Piece::Detective(colour) => colour,
            };
            for ticket in [crate::core::Ticket::Secret, crate::core::Ticket::Double] {
                if detective.has(ticket) {
                    return Err(GameError::ForbiddenTicket(colour, ticket));
                }
            }
            if !locations.insert(detective.location()) {
                return Err(GameError::DuplicateLocation(detective.location()));
            }
            if !colours.insert(colour) {
                return Err(GameError::DuplicateColour(colour));
            }
        }
        Ok(())
    }

    /// Construct a snapshot and fill its winner and move caches.
    ///
    /// Once a winner exists, `remaining` and the move set are cleared;
    /// otherwise the move set is the union of the legal moves of every
    /// piece still to act.
    fn with_caches(
        setup: GameSetup,
        remaining: ImHashSet<Piece>,
        log: ImVector<LogEntry>,
        mr_x: Player,
        detectives: ImVector<Player>,
    ) -> Self {
        let winner = winner::evaluate(
            setup.network(),
            setup.rounds(),
            log.len(),
            &remaining,
            &mr_x,
            &detectives,
        );

        let mut state = Self {
            setup,
            remaining,
            log,
            mr_x,
            detectives,
            moves: ImHashSet::new(),
            winner,
        };

        if state.winner.is_empty() {
            state.moves = state.compute_moves();
        } else {
            state.remaining = ImHashSet::new();
        }
        state
    }

    fn compute_moves(&self) -> ImHashSet<Move> {
        let context = self.context();
        let mut moves = ImHashSet::new();
        for piece in &self.remaining {
            if let Some(player) = self.player(*piece) {
                moves.extend(context.moves(player));
            }
        }
        moves
    }

    fn context(&self) -> MoveContext<'_> {
        MoveContext::new(
            self.setup.network(),
            self.detectives.iter().map(Player::location),
            self.setup.rounds().saturating_sub(self.log.len()),
        )
    }

    /// Pure lookup of a player's current value by piece.
    fn player(&self, piece: Piece) -> Option<&Player> {
        if piece.is_mr_x() {
            Some(&self.mr_x)
        } else {
            self.detectives.iter().find(|d| d.piece() == piece)
        }
    }

    // === Public contract ===

    /// The game's fixed configuration.
    #[must_use]
    pub fn setup(&self) -> &GameSetup {
        &self.setup
    }

    /// All pieces in the game.
    #[must_use]
    pub fn players(&self) -> ImHashSet<Piece> {
        let mut pieces = ImHashSet::unit(Piece::MrX);
        pieces.extend(self.detectives.iter().map(Player::piece));
        pieces
    }

    /// A detective's current location, or `None` for a colour not in the
    /// game. The fugitive's location is deliberately not exposed here.
    #[must_use]
    pub fn detective_location(&self, colour: Colour) -> Option<NodeId> {
        self.detectives
            .iter()
            .find(|d| d.piece() == Piece::Detective(colour))
            .map(Player::location)
    }

    /// A player's ticket book, or `None` for a piece not in the game.
    /// The book itself answers zero for any kind never held.
    #[must_use]
    pub fn player_tickets(&self, piece: Piece) -> Option<&Tickets> {
        self.player(piece).map(Player::tickets)
    }

    /// The fugitive's travel log, redacted per the reveal schedule.
    #[must_use]
    pub fn travel_log(&self) -> &ImVector<LogEntry> {
        &self.log
    }

    /// The winner set: empty while the game continues, otherwise `{MrX}`
    /// or the full detective piece set.
    #[must_use]
    pub fn winner(&self) -> &ImHashSet<Piece> {
        &self.winner
    }

    /// Every move some piece in the remaining set may legally play now.
    /// Always empty once a winner exists.
    #[must_use]
    pub fn available_moves(&self) -> &ImHashSet<Move> {
        &self.moves
    }

    /// Apply one chosen move, deriving the next snapshot.
    ///
    /// Fails if the game already has a winner or the move is not in
    /// [`GameState::available_moves`]; on failure nothing is committed and
    /// `self` stays valid.
    pub fn advance(&self, mv: Move) -> Result<Self, GameError> {
        if !self.winner.is_empty() {
            return Err(GameError::GameOver);
        }
        if !self.moves.contains(&mv) {
            return Err(GameError::IllegalMove(mv));
        }

        Ok(match mv.piece() {
            Piece::MrX => self.advance_mr_x(mv),
            Piece::Detective(_) => self.advance_detective(mv),
        })
    }

    /// The fugitive moves: spend tickets, relocate, extend the log one
    /// entry per leg, then hand the round to every detective that can act.
    fn advance_mr_x(&self, mv: Move) -> Self {
        let mr_x = self.mr_x.using(mv.tickets()).at(mv.destination());

        let mut log = self.log.clone();
        for (ticket, destination) in mv.legs() {
            let entry = if self.setup.reveals(log.len()) {
                LogEntry::Revealed(ticket, destination)
            } else {
                LogEntry::Hidden(ticket)
            };
            log.push_back(entry);
        }

        // Detectives with no legal move are skipped for the whole round.
        let context = MoveContext::new(
            self.setup.network(),
            self.detectives.iter().map(Player::location),
            self.setup.rounds().saturating_sub(log.len()),
        );
        let remaining: ImHashSet<Piece> = self
            .detectives
            .iter()
            .filter(|d| context.can_move(d))
            .map(Player::piece)
            .collect();

        Self::with_caches(
            self.setup.clone(),
            remaining,
            log,
            mr_x,
            self.detectives.clone(),
        )
    }

    /// A detective moves: spend the ticket, relocate, hand the spent
    /// ticket to the fugitive, and drop the mover from the round.
    ///
    /// Pending detectives are re-checked against the updated board, so a
    /// square vacated earlier in the round is a legal destination and a
    /// newly blocked detective is skipped. When no pending detective can
    /// act, the round passes back to the fugitive.
    fn advance_detective(&self, mv: Move) -> Self {
        let index = self
            .detectives
            .iter()
            .position(|d| d.piece() == mv.piece())
            .expect("an available move belongs to a player in the game");
        let moved = self.detectives[index].using(mv.tickets()).at(mv.destination());
        let mr_x = self.mr_x.given(mv.tickets());
        let detectives = self.detectives.update(index, moved);

        let context = MoveContext::new(
            self.setup.network(),
            detectives.iter().map(Player::location),
            self.setup.rounds().saturating_sub(self.log.len()),
        );
        let mut remaining: ImHashSet<Piece> = self
            .remaining
            .iter()
            .filter(|&&piece| piece != mv.piece())
            .filter(|&&piece| {
                detectives
                    .iter()
                    .find(|d| d.piece() == piece)
                    .is_some_and(|d| context.can_move(d))
            })
            .copied()
            .collect();
        if remaining.is_empty() {
            remaining = ImHashSet::unit(Piece::MrX);
        }

        Self::with_caches(self.setup.clone(), remaining, self.log.clone(), mr_x, detectives)
    }
}
