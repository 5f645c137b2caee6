//! Longest friendly chain search.
//!
//! Finds the longest simple path in the approved-friendship graph: the
//! longest acyclic sequence of users in which each consecutive pair are
//! direct friends. The graph may be disconnected and may contain cycles.
//!
//! The search is an exhaustive depth-first exploration rooted in turn at
//! every user. A vertex is marked while on the current recursion branch and
//! unmarked on backtrack, so it stays eligible for explorations from other
//! roots; without the unmark step, longer paths found from later roots would
//! be silently truncated.
//!
//! Worst-case cost is exponential — general graphs have exponentially many
//! simple paths, and no polynomial shortcut exists (longest simple path is
//! NP-hard). Target graphs are small, sparse social circles, so this is a
//! documented scalability caveat rather than something to optimize away.

use std::collections::{HashMap, HashSet};

use petgraph::graphmap::UnGraphMap;
use serde::Serialize;
use tracing::debug;

use crate::domain::{Friendship, User};
use crate::snapshot::Snapshot;

/// The longest simple path of mutually approved friendships.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FriendlyChain {
    /// Users of the chain, in path order (root first).
    pub users: Vec<User>,
    /// `friendships[i]` connects `users[i]` and `users[i + 1]`.
    pub friendships: Vec<Friendship>,
    /// Number of users in the chain; `friendships.len() + 1` unless empty.
    pub len: usize,
}

impl FriendlyChain {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Per-user discovery record, owned by whichever root's traversal is running.
///
/// Overwritten whenever a new traversal discovers the user; only meaningful
/// until the next root's run begins, which is why the best-chain comparison
/// happens at each vertex's post-order point and never afterwards.
struct Discovery<'a> {
    user: &'a User,
    /// Email of the vertex this one was discovered from, `None` at the root.
    prev: Option<&'a str>,
    /// Path length from the run's root at the moment of discovery.
    steps: usize,
}

/// The single best-chain record of one query, replaced on strictly-greater.
#[derive(Default)]
struct BestChain<'a> {
    users: Vec<&'a User>,
    len: usize,
}

impl<'a> BestChain<'a> {
    /// Replace the stored chain with the path ending at `end` if and only if
    /// its depth is strictly greater than the current best. Ties keep the
    /// first-found chain.
    fn update(&mut self, end: &'a str, nodes: &HashMap<&'a str, Discovery<'a>>) {
        let Some(endpoint) = nodes.get(end) else {
            return;
        };
        if endpoint.steps + 1 <= self.len {
            return;
        }

        // Walk predecessor links back to the run's root, then flip so the
        // chain reads root -> end.
        let mut sequence = Vec::with_capacity(endpoint.steps + 1);
        let mut current = endpoint;
        sequence.push(current.user);
        while let Some(prev) = current.prev {
            current = &nodes[prev];
            sequence.push(current.user);
        }
        sequence.reverse();

        debug!(len = sequence.len(), end = %end, "replaced best chain");
        self.len = sequence.len();
        self.users = sequence;
    }

    fn into_chain(self) -> FriendlyChain {
        let users: Vec<User> = self.users.into_iter().cloned().collect();
        let friendships = users
            .windows(2)
            .map(|pair| Friendship::approved(&pair[0].email, &pair[1].email))
            .collect();
        FriendlyChain {
            len: users.len(),
            users,
            friendships,
        }
    }
}

struct Search<'a, 'g> {
    snapshot: &'a Snapshot,
    graph: &'g UnGraphMap<&'a str, ()>,
    nodes: HashMap<&'a str, Discovery<'a>>,
    /// Vertices on the current recursion branch.
    on_stack: HashSet<&'a str>,
    best: BestChain<'a>,
}

impl<'a> Search<'a, '_> {
    fn dfs(&mut self, email: &'a str) {
        self.on_stack.insert(email);

        // Sorted neighbor order is the documented tie-break input, not an
        // artifact of hash ordering.
        let mut neighbors: Vec<&'a str> = self.graph.neighbors(email).collect();
        neighbors.sort_unstable();

        for next in neighbors {
            if self.on_stack.contains(next) {
                continue;
            }
            let Some(user) = self.snapshot.user(next) else {
                continue;
            };
            let steps = self.nodes[email].steps + 1;
            self.nodes.insert(
                next,
                Discovery {
                    user,
                    prev: Some(email),
                    steps,
                },
            );
            self.dfs(next);
        }

        // Post-order: the record is still this run's before backtracking.
        self.best.update(email, &self.nodes);
        self.on_stack.remove(email);
    }
}

/// Finds the longest simple path over the adjacency view.
///
/// Every user serves as a traversal root once, in sorted email order. The
/// first-found chain of maximal length wins; later equal-length chains never
/// replace it, so repeated queries over an unchanged snapshot are identical.
///
/// A graph with zero edges yields a single-user chain of length 1; an empty
/// user set yields an empty chain of length 0.
pub fn longest_chain<'a>(snapshot: &'a Snapshot, graph: &UnGraphMap<&'a str, ()>) -> FriendlyChain {
    let mut search = Search {
        snapshot,
        graph,
        nodes: HashMap::with_capacity(snapshot.user_count()),
        on_stack: HashSet::with_capacity(snapshot.user_count()),
        best: BestChain::default(),
    };

    for user in snapshot.users() {
        let email = user.email.as_str();
        search.nodes.insert(
            email,
            Discovery {
                user,
                prev: None,
                steps: 0,
            },
        );
        search.dfs(email);
    }

    search.best.into_chain()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryNetwork;
    use crate::snapshot::build_graph;

    fn snapshot(users: &[&str], edges: &[(&str, &str)]) -> Snapshot {
        let mut net = InMemoryNetwork::new();
        for email in users {
            net.add_user(User::new("test", "user", *email)).unwrap();
        }
        for (a, b) in edges {
            net.add_friendship(a, b).unwrap();
            net.accept_friendship(a, b).unwrap();
        }
        Snapshot::capture(&net).unwrap()
    }

    fn chain_of(users: &[&str], edges: &[(&str, &str)]) -> FriendlyChain {
        let snap = snapshot(users, edges);
        let g = build_graph(&snap);
        longest_chain(&snap, &g)
    }

    fn emails(chain: &FriendlyChain) -> Vec<&str> {
        chain.users.iter().map(|u| u.email.as_str()).collect()
    }

    #[test]
    fn test_empty_network() {
        let chain = chain_of(&[], &[]);
        assert_eq!(chain.len, 0);
        assert!(chain.is_empty());
        assert!(chain.friendships.is_empty());
    }

    #[test]
    fn test_isolated_users_yield_single_user_chain() {
        let chain = chain_of(&["c@net.io", "a@net.io", "b@net.io"], &[]);
        assert_eq!(chain.len, 1);
        // First root in sorted email order wins the trivial tie.
        assert_eq!(emails(&chain), ["a@net.io"]);
        assert!(chain.friendships.is_empty());
    }

    #[test]
    fn test_path_graph_found_end_to_end() {
        let chain = chain_of(
            &["a@net.io", "b@net.io", "c@net.io", "d@net.io"],
            &[
                ("a@net.io", "b@net.io"),
                ("b@net.io", "c@net.io"),
                ("c@net.io", "d@net.io"),
            ],
        );
        assert_eq!(chain.len, 4);
        assert_eq!(emails(&chain), ["a@net.io", "b@net.io", "c@net.io", "d@net.io"]);
        assert_eq!(chain.friendships.len(), 3);
        assert_eq!(
            chain.friendships[0],
            Friendship::approved("a@net.io", "b@net.io")
        );
    }

    #[test]
    fn test_star_visits_at_most_two_leaves() {
        // hub@ connects to three leaves; a simple path cannot re-enter the
        // hub, so the best chain is leaf-hub-leaf — never all four users.
        let chain = chain_of(
            &["hub@net.io", "a@net.io", "b@net.io", "c@net.io"],
            &[
                ("hub@net.io", "a@net.io"),
                ("hub@net.io", "b@net.io"),
                ("hub@net.io", "c@net.io"),
            ],
        );
        assert_eq!(chain.len, 3);
        assert_eq!(chain.friendships.len(), 2);
        assert_eq!(emails(&chain)[1], "hub@net.io");
    }

    #[test]
    fn test_disconnected_pair_first_found_wins() {
        let chain = chain_of(
            &["a@net.io", "b@net.io", "c@net.io", "d@net.io"],
            &[("a@net.io", "b@net.io"), ("c@net.io", "d@net.io")],
        );
        assert_eq!(chain.len, 2);
        assert_eq!(emails(&chain), ["a@net.io", "b@net.io"]);
    }

    #[test]
    fn test_cycle_terminates_and_covers_it() {
        let chain = chain_of(
            &["a@net.io", "b@net.io", "c@net.io"],
            &[
                ("a@net.io", "b@net.io"),
                ("b@net.io", "c@net.io"),
                ("c@net.io", "a@net.io"),
            ],
        );
        assert_eq!(chain.len, 3);
    }

    #[test]
    fn test_longer_path_found_from_later_root() {
        // Hub c@ with a short arm (a@) and two long arms (d@-e@, f@-g@).
        // The first root a@ only reaches a-c-d-e; the global best e-d-c-f-g
        // needs a later root, which requires vertices explored from a@ to
        // have been unmarked on backtrack.
        let chain = chain_of(
            &[
                "a@net.io",
                "c@net.io",
                "d@net.io",
                "e@net.io",
                "f@net.io",
                "g@net.io",
            ],
            &[
                ("c@net.io", "a@net.io"),
                ("c@net.io", "d@net.io"),
                ("d@net.io", "e@net.io"),
                ("c@net.io", "f@net.io"),
                ("f@net.io", "g@net.io"),
            ],
        );
        assert_eq!(chain.len, 5);
        assert_eq!(
            emails(&chain),
            ["e@net.io", "d@net.io", "c@net.io", "f@net.io", "g@net.io"]
        );
    }

    #[test]
    fn test_chain_is_a_simple_path() {
        // Complete graph on four users: a Hamiltonian path exists, and the
        // returned chain must never repeat a user.
        let users = ["a@net.io", "b@net.io", "c@net.io", "d@net.io"];
        let mut edges = Vec::new();
        for i in 0..users.len() {
            for j in (i + 1)..users.len() {
                edges.push((users[i], users[j]));
            }
        }
        let snap = snapshot(&users, &edges);
        let g = build_graph(&snap);
        let chain = longest_chain(&snap, &g);

        assert_eq!(chain.len, 4);
        let mut seen: Vec<&str> = emails(&chain);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 4, "chain must not repeat users");
        for (i, f) in chain.friendships.iter().enumerate() {
            assert!(f.involves(&chain.users[i].email));
            assert!(f.involves(&chain.users[i + 1].email));
        }
    }

    #[test]
    fn test_repeated_queries_identical() {
        let snap = snapshot(
            &["a@net.io", "b@net.io", "c@net.io", "d@net.io", "e@net.io"],
            &[
                ("a@net.io", "b@net.io"),
                ("b@net.io", "c@net.io"),
                ("c@net.io", "d@net.io"),
                ("d@net.io", "e@net.io"),
                ("e@net.io", "a@net.io"),
            ],
        );
        let g = build_graph(&snap);
        assert_eq!(longest_chain(&snap, &g), longest_chain(&snap, &g));
    }
}
