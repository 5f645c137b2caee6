//! Caller-facing analysis facade.
//!
//! [`Network`] wraps a [`NetworkSource`] and answers the analytical queries:
//! the longest friendly chain and the community partition. Each query
//! captures a fresh snapshot, runs to completion single-threaded, and shares
//! no state with other calls, so the facade is reentrant.

use serde::Serialize;

use crate::chain::{longest_chain, FriendlyChain};
use crate::communities::communities;
use crate::domain::User;
use crate::error::FriendnetResult;
use crate::snapshot::{build_graph, Snapshot};
use crate::source::NetworkSource;

/// Combined result of one analysis query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkReport {
    pub chain: FriendlyChain,
    pub communities: Vec<Vec<User>>,
    pub community_count: usize,
}

/// Analysis facade over a network source.
pub struct Network<'a, S: NetworkSource> {
    source: &'a S,
}

impl<'a, S: NetworkSource> Network<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// The longest simple path of approved friendships.
    pub fn longest_friendly_chain(&self) -> FriendnetResult<FriendlyChain> {
        let snapshot = Snapshot::capture(self.source)?;
        let graph = build_graph(&snapshot);
        Ok(longest_chain(&snapshot, &graph))
    }

    /// All communities (maximal connected components), as member lists.
    pub fn communities(&self) -> FriendnetResult<Vec<Vec<User>>> {
        let snapshot = Snapshot::capture(self.source)?;
        let graph = build_graph(&snapshot);
        Ok(communities(&snapshot, &graph))
    }

    /// Number of communities.
    pub fn community_count(&self) -> FriendnetResult<usize> {
        Ok(self.communities()?.len())
    }

    /// Runs both analyses over one shared snapshot and adjacency view.
    pub fn analyze(&self) -> FriendnetResult<NetworkReport> {
        let snapshot = Snapshot::capture(self.source)?;
        let graph = build_graph(&snapshot);
        let communities = communities(&snapshot, &graph);
        Ok(NetworkReport {
            chain: longest_chain(&snapshot, &graph),
            community_count: communities.len(),
            communities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryNetwork;

    fn seeded() -> InMemoryNetwork {
        let mut net = InMemoryNetwork::new();
        for email in ["a@net.io", "b@net.io", "c@net.io", "d@net.io"] {
            net.add_user(User::new("test", "user", email)).unwrap();
        }
        for (a, b) in [
            ("a@net.io", "b@net.io"),
            ("b@net.io", "c@net.io"),
            ("c@net.io", "d@net.io"),
        ] {
            net.add_friendship(a, b).unwrap();
            net.accept_friendship(a, b).unwrap();
        }
        net
    }

    #[test]
    fn test_analyze_combines_both_queries() {
        let net = seeded();
        let network = Network::new(&net);
        let report = network.analyze().unwrap();

        assert_eq!(report.chain.len, 4);
        assert_eq!(report.community_count, 1);
        assert_eq!(report.communities.len(), 1);
        assert_eq!(report.chain, network.longest_friendly_chain().unwrap());
        assert_eq!(report.communities, network.communities().unwrap());
    }

    #[test]
    fn test_report_serializes() {
        let net = seeded();
        let report = Network::new(&net).analyze().unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["community_count"], 1);
        assert_eq!(json["chain"]["len"], 4);
        assert_eq!(json["chain"]["users"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_queries_see_store_changes() {
        let mut net = seeded();
        {
            let network = Network::new(&net);
            assert_eq!(network.community_count().unwrap(), 1);
        }
        net.remove_friendship("b@net.io", "c@net.io").unwrap();
        let network = Network::new(&net);
        assert_eq!(network.community_count().unwrap(), 2);
        assert_eq!(network.longest_friendly_chain().unwrap().len, 2);
    }
}
