//! Legal-move generation.
//!
//! A [`MoveContext`] captures everything a player's legality depends on
//! besides the player itself: the network, which squares detectives occupy
//! right now, and how many schedule rounds remain. Generation is a pure
//! function of (context, player); it never inspects or mutates game state.
//!
//! Occupancy is destination-based: a square a detective stands on is never
//! a legal destination for any piece, so capture can only ever happen by a
//! detective moving onto the fugitive, never the reverse.

use im::HashSet as ImHashSet;
use rustc_hash::FxHashSet;

use crate::core::{DoubleMove, Move, Player, SingleMove, Ticket};
use crate::network::{Network, NodeId};

/// The game context a player's legal moves are computed against.
pub struct MoveContext<'a> {
    network: &'a Network,
    occupied: FxHashSet<NodeId>,
    rounds_left: usize,
}

impl<'a> MoveContext<'a> {
    /// Create a context from the current detective locations and the number
    /// of unplayed rounds in the reveal schedule.
    #[must_use]
    pub fn new(
        network: &'a Network,
        occupied: impl IntoIterator<Item = NodeId>,
        rounds_left: usize,
    ) -> Self {
        Self {
            network,
            occupied: occupied.into_iter().collect(),
            rounds_left,
        }
    }

    /// Every legal move for `player` in this context.
    ///
    /// Detectives get single moves only. The fugitive additionally gets
    /// double moves while he holds a Double ticket and at least two rounds
    /// remain (a double move can never finish the schedule's last round).
    /// Duplicate candidates from multi-mode edges collapse under set
    /// semantics.
    #[must_use]
    pub fn moves(&self, player: &Player) -> ImHashSet<Move> {
        let mut moves: ImHashSet<Move> =
            self.singles(player).into_iter().map(Move::Single).collect();

        if player.is_mr_x() && player.has(Ticket::Double) && self.rounds_left >= 2 {
            moves.extend(self.doubles(player).into_iter().map(Move::Double));
        }

        moves
    }

    /// Every legal single move for `player`.
    ///
    /// For each unoccupied neighbour: one move per transport mode whose
    /// required ticket the player holds, plus — for the fugitive with a
    /// Secret ticket — one Secret move per destination (not per mode).
    #[must_use]
    pub fn singles(&self, player: &Player) -> Vec<SingleMove> {
        let mut out = Vec::new();
        let source = player.location();

        for (destination, modes) in self.network.neighbours(source) {
            if self.occupied.contains(&destination) {
                continue;
            }
            for mode in modes {
                let ticket = mode.required_ticket();
                if player.has(ticket) {
                    out.push(SingleMove {
                        piece: player.piece(),
                        source,
                        ticket,
                        destination,
                    });
                }
            }
            if player.is_mr_x() && player.has(Ticket::Secret) {
                out.push(SingleMove {
                    piece: player.piece(),
                    source,
                    ticket: Ticket::Secret,
                    destination,
                });
            }
        }

        out
    }

    /// Every legal double move for `player`.
    ///
    /// Empty for detectives. Composes each legal first leg with the second
    /// legs reachable from its destination, accounting for ticket reuse:
    /// the same kind on both legs needs a count of at least two.
    ///
    /// Eligibility (Double ticket held, two rounds remaining) is the
    /// caller's concern; see [`MoveContext::moves`].
    #[must_use]
    pub fn doubles(&self, player: &Player) -> Vec<DoubleMove> {
        if !player.is_mr_x() {
            return Vec::new();
        }

        let mut out = Vec::new();
        for first in self.singles(player) {
            self.second_legs(player, first, &mut out);
        }
        out
    }

    fn second_legs(&self, player: &Player, first: SingleMove, out: &mut Vec<DoubleMove>) {
        for (destination2, modes) in self.network.neighbours(first.destination) {
            if self.occupied.contains(&destination2) {
                continue;
            }
            for mode in modes {
                let ticket2 = mode.required_ticket();
                if !player.has(ticket2) {
                    continue;
                }
                if ticket2 == first.ticket && !player.has_at_least(ticket2, 2) {
                    continue;
                }
                out.push(Self::compose(first, ticket2, destination2));
            }
            let secret_usable = player.has_at_least(Ticket::Secret, 2)
                || (player.has(Ticket::Secret) && first.ticket != Ticket::Secret);
            if secret_usable {
                out.push(Self::compose(first, Ticket::Secret, destination2));
            }
        }
    }

    fn compose(first: SingleMove, ticket2: Ticket, destination2: NodeId) -> DoubleMove {
        DoubleMove {
            piece: first.piece,
            source: first.source,
            ticket1: first.ticket,
            destination1: first.destination,
            ticket2,
            destination2,
        }
    }

    /// Check whether `player` has at least one legal single move.
    ///
    /// Equivalent to `!self.singles(player).is_empty()` with early exit;
    /// a player with no single move has no double move either.
    #[must_use]
    pub fn can_move(&self, player: &Player) -> bool {
        for (destination, modes) in self.network.neighbours(player.location()) {
            if self.occupied.contains(&destination) {
                continue;
            }
            if player.is_mr_x() && player.has(Ticket::Secret) {
                return true;
            }
            if modes.iter().any(|mode| player.has(mode.required_ticket())) {
                return true;
            }
        }
        false
    }
}
