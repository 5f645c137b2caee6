//! Community enumeration over the approved-friendship graph.
//!
//! A community is a maximal connected component. Enumeration is a plain
//! undirected BFS flood per unvisited user, with a visited set of its own —
//! it shares nothing with the longest-chain search's transient state.

use std::collections::{HashSet, VecDeque};

use petgraph::graphmap::UnGraphMap;

use crate::domain::User;
use crate::snapshot::Snapshot;

/// Enumerates all communities, each as its member list.
///
/// Members are sorted by email and components are ordered by their smallest
/// member, so the output is deterministic. The lists partition the snapshot's
/// user set: every user appears in exactly one community (isolated users form
/// singleton communities).
pub fn communities<'a>(
    snapshot: &'a Snapshot,
    graph: &UnGraphMap<&'a str, ()>,
) -> Vec<Vec<User>> {
    let mut visited: HashSet<&str> = HashSet::with_capacity(snapshot.user_count());
    let mut out = Vec::new();

    // Sorted outer order means each flood starts at its component's
    // smallest member.
    for email in snapshot.emails() {
        if !visited.insert(email) {
            continue;
        }

        let mut members: Vec<&str> = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(email);

        while let Some(current) = queue.pop_front() {
            members.push(current);
            for neighbor in graph.neighbors(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        members.sort_unstable();
        out.push(
            members
                .into_iter()
                .filter_map(|e| snapshot.user(e))
                .cloned()
                .collect(),
        );
    }

    out
}

/// Number of communities in the snapshot.
pub fn community_count<'a>(snapshot: &'a Snapshot, graph: &UnGraphMap<&'a str, ()>) -> usize {
    communities(snapshot, graph).len()
}
