//! The transport network: locations joined by typed transport edges.
//!
//! A pure read-only lookup structure. The engine never loads map data
//! itself; callers assemble a [`Network`] (from whatever source) and hand
//! it to [`crate::GameSetup`], after which it is shared by reference across
//! every state of the game.
//!
//! Edges are undirected and carry a non-empty set of transport modes; each
//! mode maps to exactly one required ticket kind.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Ticket;

/// A location identifier on the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u16);

impl NodeId {
    /// Create a node identifier.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node {}", self.0)
    }
}

/// A transport mode carried by an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    /// River crossings: traversable only with a Secret ticket.
    Ferry,
}

impl Transport {
    /// The ticket kind a player must spend to traverse an edge by this mode.
    #[must_use]
    pub const fn required_ticket(self) -> Ticket {
        match self {
            Transport::Taxi => Ticket::Taxi,
            Transport::Bus => Ticket::Bus,
            Transport::Underground => Ticket::Underground,
            Transport::Ferry => Ticket::Secret,
        }
    }
}

/// One directed half of an undirected edge.
#[derive(Clone, Debug)]
struct Link {
    to: NodeId,
    modes: SmallVec<[Transport; 2]>,
}

/// An undirected transport graph.
///
/// ## Usage
///
/// ```
/// use foxhunt::network::{Network, NodeId, Transport};
///
/// let mut network = Network::new();
/// network.link(NodeId::new(1), NodeId::new(2), &[Transport::Taxi, Transport::Bus]);
/// network.link(NodeId::new(2), NodeId::new(3), &[Transport::Underground]);
///
/// assert_eq!(network.node_count(), 3);
/// assert_eq!(network.neighbours(NodeId::new(2)).count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Network {
    adjacency: FxHashMap<NodeId, Vec<Link>>,
}

impl Network {
    /// Create an empty network.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an isolated node. A no-op if the node already exists.
    pub fn add_node(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    /// Join two nodes with an undirected edge carrying the given modes.
    ///
    /// The mode set must be non-empty. Both endpoints are added to the
    /// network if not already present.
    pub fn link(&mut self, a: NodeId, b: NodeId, modes: &[Transport]) {
        assert!(!modes.is_empty(), "an edge must carry at least one transport mode");
        let modes: SmallVec<[Transport; 2]> = SmallVec::from_slice(modes);
        self.adjacency.entry(a).or_default().push(Link { to: b, modes: modes.clone() });
        self.adjacency.entry(b).or_default().push(Link { to: a, modes });
    }

    /// Number of nodes in the network.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Check whether a node exists.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Iterate over the neighbours of a node as (destination, modes) pairs.
    ///
    /// A node not in the network has no neighbours.
    pub fn neighbours(&self, node: NodeId) -> impl Iterator<Item = (NodeId, &[Transport])> {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|link| (link.to, link.modes.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_network() {
        let network = Network::new();
        assert_eq!(network.node_count(), 0);
        assert!(!network.contains(NodeId::new(1)));
        assert_eq!(network.neighbours(NodeId::new(1)).count(), 0);
    }

    #[test]
    fn test_link_is_undirected() {
        let mut network = Network::new();
        network.link(NodeId::new(1), NodeId::new(2), &[Transport::Taxi]);

        let forward: Vec<_> = network.neighbours(NodeId::new(1)).collect();
        let backward: Vec<_> = network.neighbours(NodeId::new(2)).collect();

        assert_eq!(forward, vec![(NodeId::new(2), &[Transport::Taxi][..])]);
        assert_eq!(backward, vec![(NodeId::new(1), &[Transport::Taxi][..])]);
    }

    #[test]
    fn test_multi_mode_edge() {
        let mut network = Network::new();
        network.link(
            NodeId::new(1),
            NodeId::new(2),
            &[Transport::Taxi, Transport::Bus, Transport::Underground],
        );

        let (_, modes) = network.neighbours(NodeId::new(1)).next().unwrap();
        assert_eq!(modes.len(), 3);
    }

    #[test]
    fn test_isolated_node_counts() {
        let mut network = Network::new();
        network.add_node(NodeId::new(7));
        network.link(NodeId::new(1), NodeId::new(2), &[Transport::Taxi]);

        assert_eq!(network.node_count(), 3);
        assert!(network.contains(NodeId::new(7)));
        assert_eq!(network.neighbours(NodeId::new(7)).count(), 0);
    }

    #[test]
    fn test_ferry_requires_secret() {
        assert_eq!(Transport::Ferry.required_ticket(), Ticket::Secret);
        assert_eq!(Transport::Taxi.required_ticket(), Ticket::Taxi);
        assert_eq!(Transport::Bus.required_ticket(), Ticket::Bus);
        assert_eq!(Transport::Underground.required_ticket(), Ticket::Underground);
    }

    #[test]
    #[should_panic(expected = "at least one transport mode")]
    fn test_link_rejects_empty_modes() {
        let mut network = Network::new();
        network.link(NodeId::new(1), NodeId::new(2), &[]);
    }
}
