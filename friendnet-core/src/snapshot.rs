//! Point-in-time snapshot of the network and adjacency view construction.
//!
//! A query never reads the collaborator twice: [`Snapshot::capture`] copies
//! the full user set and every approved edge up front, so a friendship added
//! or removed mid-search cannot corrupt traversal state. The analyses then
//! run over [`build_graph`]'s read-only adjacency view.
//!
//! Iteration order is part of the contract: users and edges are kept sorted,
//! which makes the tie-breaks of the downstream analyses deterministic.

use std::collections::{BTreeMap, BTreeSet};

use petgraph::graphmap::UnGraphMap;
use tracing::info;

use crate::domain::{Friendship, User};
use crate::error::FriendnetResult;
use crate::source::NetworkSource;

/// A consistent copy of one moment of the social network: all users plus all
/// approved friendship edges, keyed and sorted by email.
#[derive(Debug, Clone)]
pub struct Snapshot {
    users: BTreeMap<String, User>,
    edges: BTreeSet<(String, String)>,
}

impl Snapshot {
    /// Read the full collaborator state once into a private copy.
    ///
    /// Every user appears in the snapshot even with no approved friends.
    /// Friend emails that do not resolve to a known user are dropped, as is
    /// a self-reference: malformed collaborator data reduces a friend set,
    /// it never fails the capture. A failed *read* does fail it, as a
    /// [`FriendnetError::DataSource`](crate::error::FriendnetError).
    pub fn capture<S: NetworkSource>(source: &S) -> FriendnetResult<Self> {
        let mut users = BTreeMap::new();
        for user in source.users()? {
            users.insert(user.email.clone(), user);
        }

        let mut edges = BTreeSet::new();
        for email in users.keys() {
            for friend in source.approved_friends_of(email)? {
                if friend != *email && users.contains_key(&friend) {
                    edges.insert(Friendship::ordered(email, &friend));
                }
            }
        }

        info!(
            users = users.len(),
            edges = edges.len(),
            "captured network snapshot"
        );
        Ok(Self { users, edges })
    }

    /// Users in sorted email order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Emails in sorted order — the traversal-root order of the analyses.
    pub fn emails(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    pub fn user(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    /// Approved edges as canonical `(first, second)` pairs, sorted.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges.iter().map(|(a, b)| (a.as_str(), b.as_str()))
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Builds the adjacency view (undirected `UnGraphMap`) from a snapshot.
///
/// Uses `UnGraphMap<&str, ()>` for memory efficiency:
/// - String slices borrowed from the snapshot avoid cloning
/// - Unit type `()` for edges minimizes memory footprint
///
/// Every snapshot user becomes a node, so isolated users still take part in
/// the analyses. Nodes and edges are inserted in sorted order.
pub fn build_graph(snapshot: &Snapshot) -> UnGraphMap<&str, ()> {
    let mut g = UnGraphMap::new();

    for email in snapshot.emails() {
        g.add_node(email);
    }
    for (a, b) in snapshot.edges() {
        g.add_edge(a, b, ());
    }

    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FriendnetError;

    /// Source stub with hand-rolled friend lists, including malformed ones.
    struct StubSource {
        users: Vec<User>,
        friends: Vec<(&'static str, Vec<&'static str>)>,
    }

    impl NetworkSource for StubSource {
        fn users(&self) -> FriendnetResult<Vec<User>> {
            Ok(self.users.clone())
        }

        fn approved_friends_of(&self, email: &str) -> FriendnetResult<Vec<String>> {
            Ok(self
                .friends
                .iter()
                .find(|(e, _)| *e == email)
                .map(|(_, fs)| fs.iter().map(|s| s.to_string()).collect())
                .unwrap_or_default())
        }
    }

    struct FailingSource;

    impl NetworkSource for FailingSource {
        fn users(&self) -> FriendnetResult<Vec<User>> {
            Err(FriendnetError::data_source("users table unreachable"))
        }

        fn approved_friends_of(&self, _email: &str) -> FriendnetResult<Vec<String>> {
            Err(FriendnetError::data_source("friendships table unreachable"))
        }
    }

    fn user(email: &str) -> User {
        User::new("test", "user", email)
    }

    #[test]
    fn test_every_user_becomes_a_node() {
        let source = StubSource {
            users: vec![user("a@net.io"), user("b@net.io"), user("loner@net.io")],
            friends: vec![("a@net.io", vec!["b@net.io"])],
        };
        let snap = Snapshot::capture(&source).unwrap();
        let g = build_graph(&snap);

        assert!(g.contains_node("loner@net.io"));
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_unknown_and_self_friends_dropped() {
        let source = StubSource {
            users: vec![user("a@net.io"), user("b@net.io")],
            friends: vec![(
                "a@net.io",
                vec!["b@net.io", "ghost@net.io", "a@net.io"],
            )],
        };
        let snap = Snapshot::capture(&source).unwrap();

        assert_eq!(snap.edge_count(), 1);
        assert_eq!(snap.user_count(), 2);
    }

    #[test]
    fn test_one_directional_listing_still_one_edge() {
        // Collaborators report the edge from both endpoints; the canonical
        // pair collapses the two listings into one undirected edge.
        let source = StubSource {
            users: vec![user("a@net.io"), user("b@net.io")],
            friends: vec![
                ("a@net.io", vec!["b@net.io"]),
                ("b@net.io", vec!["a@net.io"]),
            ],
        };
        let snap = Snapshot::capture(&source).unwrap();
        assert_eq!(snap.edge_count(), 1);
    }

    #[test]
    fn test_read_failure_propagates() {
        let err = Snapshot::capture(&FailingSource).unwrap_err();
        assert!(matches!(err, FriendnetError::DataSource { .. }));
    }

    #[test]
    fn test_empty_source() {
        let source = StubSource {
            users: vec![],
            friends: vec![],
        };
        let snap = Snapshot::capture(&source).unwrap();
        assert!(snap.is_empty());
        assert_eq!(build_graph(&snap).node_count(), 0);
    }
}
