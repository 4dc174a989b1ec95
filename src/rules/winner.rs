//! The win-condition evaluator.
//!
//! Runs against every constructed state, initial and successor alike. The
//! outcome set is always one of: empty (play on), `{MrX}`, or the full
//! detective piece set — never a mixed or partial set.
//!
//! Evaluation order matters: capture is checked before anything else, so a
//! detective landing on the fugitive wins even when the travel log is full
//! or the detectives are otherwise out of options.

use im::{HashSet as ImHashSet, Vector as ImVector};

use super::generator::MoveContext;
use crate::core::{Piece, Player};
use crate::network::Network;

/// Evaluate the winner set for a state's new player values and new
/// remaining set.
///
/// The three outcomes:
/// 1. Detectives win on capture, or when the fugitive is due to move and
///    has no legal move.
/// 2. The fugitive wins when the travel log has filled the whole schedule
///    and play has come back round to him, or when no detective in the
///    round could move at all (`remaining` came out empty).
/// 3. Otherwise the game continues and the set is empty.
#[must_use]
pub fn evaluate(
    network: &Network,
    rounds: usize,
    log_len: usize,
    remaining: &ImHashSet<Piece>,
    mr_x: &Player,
    detectives: &ImVector<Player>,
) -> ImHashSet<Piece> {
    if detectives.iter().any(|d| d.location() == mr_x.location()) {
        return detective_pieces(detectives);
    }

    if remaining.contains(&Piece::MrX) {
        if log_len >= rounds {
            return ImHashSet::unit(Piece::MrX);
        }
        let context = MoveContext::new(
            network,
            detectives.iter().map(Player::location),
            rounds - log_len,
        );
        if !context.can_move(mr_x) {
            return detective_pieces(detectives);
        }
    } else if remaining.is_empty() {
        // No detective in the round had a legal move.
        return ImHashSet::unit(Piece::MrX);
    }

    ImHashSet::new()
}

/// The full detective piece set — a detective win always names everyone.
fn detective_pieces(detectives: &ImVector<Player>) -> ImHashSet<Piece> {
    detectives.iter().map(Player::piece).collect()
}
