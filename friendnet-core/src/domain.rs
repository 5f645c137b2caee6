//! Domain types: users and the friendship edges between them.
//!
//! Identity is the email address (unique, stable, case-sensitive). Friendship
//! edges are unordered pairs of distinct emails with a pending → approved
//! lifecycle; only approved edges participate in the graph analyses.
//!
//! Constructors do not validate endpoints; the storing side rejects
//! self-pairs and unknown users before an edge is created.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FriendnetError, FriendnetResult};

/// A member of the social network.
///
/// `first_name` and `last_name` are display attributes; the analyses key
/// everything on `email`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} <{}>", self.first_name, self.last_name, self.email)
    }
}

/// Lifecycle state of a friendship edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendshipState {
    Pending,
    Approved,
}

/// An undirected friendship edge between two distinct users.
///
/// The endpoint pair is canonicalised on construction (lexicographically
/// smaller email stored in `first`), so equality and hashing do not depend on
/// the order the endpoints were given in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Friendship {
    pub first: String,
    pub second: String,
    pub state: FriendshipState,
    /// Date the request was approved; `None` while pending.
    pub since: Option<NaiveDate>,
}

impl Friendship {
    /// Canonical endpoint order for a pair of emails.
    pub fn ordered(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }

    /// A new pending friendship request between `a` and `b`.
    pub fn new(a: &str, b: &str) -> Self {
        let (first, second) = Self::ordered(a, b);
        Self {
            first,
            second,
            state: FriendshipState::Pending,
            since: None,
        }
    }

    /// An already-approved edge between `a` and `b`, with no recorded date.
    ///
    /// Used when reconstructing the edges of a chain from the adjacency view.
    pub fn approved(a: &str, b: &str) -> Self {
        let (first, second) = Self::ordered(a, b);
        Self {
            first,
            second,
            state: FriendshipState::Approved,
            since: None,
        }
    }

    /// Move this edge from pending to approved, stamping the approval date.
    ///
    /// Errors with [`FriendnetError::NoPendingRequest`] when the edge is not
    /// pending.
    pub fn approve(&mut self, date: NaiveDate) -> FriendnetResult<()> {
        if self.state != FriendshipState::Pending {
            return Err(FriendnetError::no_pending_request(
                self.first.clone(),
                self.second.clone(),
            ));
        }
        self.state = FriendshipState::Approved;
        self.since = Some(date);
        Ok(())
    }

    pub fn is_approved(&self) -> bool {
        self.state == FriendshipState::Approved
    }

    /// Whether `email` is one of the two endpoints.
    pub fn involves(&self, email: &str) -> bool {
        self.first == email || self.second == email
    }

    /// The endpoint opposite `email`, if `email` is an endpoint at all.
    pub fn other_end(&self, email: &str) -> Option<&str> {
        if self.first == email {
            Some(&self.second)
        } else if self.second == email {
            Some(&self.first)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Friendship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {}", self.first, self.second)
    }
}
