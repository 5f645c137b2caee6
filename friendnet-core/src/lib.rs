//! friendnet-core: friendship-graph analysis library
//!
//! This library answers two analytical queries over a small social network's
//! approved-friendship graph: the longest friendly chain (the longest simple
//! path of users connected by direct, mutually approved friendships) and the
//! community partition (connected components).
//!
//! # Features
//!
//! - **Longest friendly chain**: exhaustive multi-root DFS with backtracking;
//!   reports the member list, connecting edges, and length
//! - **Community detection**: component enumeration with member lists
//! - **Point-in-time snapshots**: the collaborator is read once per query, so
//!   concurrent store mutation cannot corrupt a running search
//! - **Pluggable source**: analyses consume the [`NetworkSource`] trait; an
//!   in-memory reference store is included
//! - **Deterministic results**: user and neighbor iteration orders are sorted,
//!   so ties always resolve the same way
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use friendnet_core::prelude::*;
//!
//! let network = Network::new(&store);
//! let report = network.analyze()?;
//! println!("best chain: {} users", report.chain.len);
//! ```
//!
//! # Module Organization
//!
//! - [`domain`]: users, friendship edges, and their lifecycle
//! - [`source`]: the collaborator contract the analyses consume
//! - [`memory`]: in-memory reference store implementing the contract
//! - [`snapshot`]: point-in-time capture and adjacency view construction
//! - [`chain`]: longest-friendly-chain search
//! - [`communities`]: community (connected component) enumeration
//! - [`network`]: caller-facing facade combining the analyses
//! - [`report`]: plain/JSON output formatting
//! - [`error`]: typed error handling
//!
//! # Scalability caveat
//!
//! Longest simple path is NP-hard; the chain search is exponential in the
//! worst case and intended for small, sparse social circles.

pub mod chain;
pub mod communities;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod memory;
pub mod network;
pub mod prelude;
pub mod report;
pub mod snapshot;
pub mod source;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{FriendnetError, FriendnetResult};

// Domain types
pub use domain::{Friendship, FriendshipState, User};

// Collaborator contract and reference store
pub use memory::InMemoryNetwork;
pub use source::NetworkSource;

// Snapshot and adjacency view
pub use snapshot::{build_graph, Snapshot};

// Analyses
pub use chain::{longest_chain, FriendlyChain};
pub use communities::{communities, community_count};

// Facade
pub use network::{Network, NetworkReport};

// Configuration
pub use config::{load_config, FriendnetConfig, OutputConfig};

// Logging
pub use logging::init_structured_logging;

// Reporting
pub use report::{print_json, print_plain};
