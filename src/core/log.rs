//! Travel-log entries for the fugitive's moves.
//!
//! One entry per leg. A hidden entry carries only the ticket kind; the
//! destination is structurally absent, so redaction cannot leak through
//! any accessor.

use serde::{Deserialize, Serialize};

use super::ticket::Ticket;
use crate::network::NodeId;

/// A redacted or revealed record of one fugitive leg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogEntry {
    /// The ticket kind used, destination withheld.
    Hidden(Ticket),
    /// The ticket kind used and the destination reached.
    Revealed(Ticket, NodeId),
}

impl LogEntry {
    /// The ticket kind used on this leg (always public).
    #[must_use]
    pub fn ticket(&self) -> Ticket {
        match self {
            LogEntry::Hidden(ticket) | LogEntry::Revealed(ticket, _) => *ticket,
        }
    }

    /// The destination, if this leg was revealed.
    #[must_use]
    pub fn destination(&self) -> Option<NodeId> {
        match self {
            LogEntry::Hidden(_) => None,
            LogEntry::Revealed(_, destination) => Some(*destination),
        }
    }

    /// Check if this leg's destination is public.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        matches!(self, LogEntry::Revealed(..))
    }
}
