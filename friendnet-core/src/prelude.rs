//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use friendnet_core::prelude::*;
//! ```

// Core analysis types
pub use crate::error::{FriendnetError, FriendnetResult};

// Domain types
pub use crate::domain::{Friendship, FriendshipState, User};

// Collaborator contract and reference store
pub use crate::memory::InMemoryNetwork;
pub use crate::source::NetworkSource;

// Snapshot and analyses
pub use crate::chain::{longest_chain, FriendlyChain};
pub use crate::communities::{communities, community_count};
pub use crate::snapshot::{build_graph, Snapshot};

// Facade
pub use crate::network::{Network, NetworkReport};

// Configuration
pub use crate::config::{load_config, FriendnetConfig};
