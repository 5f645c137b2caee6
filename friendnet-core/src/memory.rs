//! In-memory reference store for users and friendships.
//!
//! This is the crate's built-in [`NetworkSource`]: enough of the management
//! layer to feed the analyses, the CLI, and the tests. Not a persistence
//! design — nothing here outlives the process.
//!
//! Users are keyed by email in a `BTreeMap`, so iteration order (and with it
//! the analyses' tie-break order) is sorted and deterministic.

use std::collections::BTreeMap;

use chrono::Local;

use crate::domain::{Friendship, User};
use crate::error::{FriendnetError, FriendnetResult};
use crate::source::NetworkSource;

/// An in-memory social network: users plus friendship edges.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNetwork {
    users: BTreeMap<String, User>,
    /// Keyed by canonical endpoint pair, see [`Friendship::ordered`].
    friendships: BTreeMap<(String, String), Friendship>,
}

impl InMemoryNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user. Errors when the email is already taken.
    pub fn add_user(&mut self, user: User) -> FriendnetResult<()> {
        if self.users.contains_key(&user.email) {
            return Err(FriendnetError::duplicate_user(user.email));
        }
        self.users.insert(user.email.clone(), user);
        Ok(())
    }

    /// Remove a user and every friendship they are part of.
    pub fn remove_user(&mut self, email: &str) -> FriendnetResult<User> {
        let user = self
            .users
            .remove(email)
            .ok_or_else(|| FriendnetError::unknown_user(email))?;
        self.friendships.retain(|_, f| !f.involves(email));
        Ok(user)
    }

    pub fn user(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    pub fn contains_user(&self, email: &str) -> bool {
        self.users.contains_key(email)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Record a friendship request between two registered, distinct users.
    ///
    /// The new edge starts out pending and is invisible to the analyses
    /// until [`accept_friendship`](Self::accept_friendship) is called.
    pub fn add_friendship(&mut self, a: &str, b: &str) -> FriendnetResult<()> {
        if a == b {
            return Err(FriendnetError::self_friendship(a));
        }
        for email in [a, b] {
            if !self.users.contains_key(email) {
                return Err(FriendnetError::unknown_user(email));
            }
        }
        let key = Friendship::ordered(a, b);
        if self.friendships.contains_key(&key) {
            return Err(FriendnetError::duplicate_friendship(key.0, key.1));
        }
        self.friendships.insert(key, Friendship::new(a, b));
        Ok(())
    }

    /// Approve a pending request, stamping today's date.
    pub fn accept_friendship(&mut self, a: &str, b: &str) -> FriendnetResult<()> {
        let key = Friendship::ordered(a, b);
        let f = self
            .friendships
            .get_mut(&key)
            .ok_or_else(|| FriendnetError::friendship_not_found(key.0.as_str(), key.1.as_str()))?;
        f.approve(Local::now().date_naive())
    }

    /// Remove the friendship between `a` and `b`, returning the removed edge.
    pub fn remove_friendship(&mut self, a: &str, b: &str) -> FriendnetResult<Friendship> {
        let key = Friendship::ordered(a, b);
        self.friendships
            .remove(&key)
            .ok_or_else(|| FriendnetError::friendship_not_found(key.0, key.1))
    }

    /// The friendship between `a` and `b` in either endpoint order, if any.
    pub fn friendship(&self, a: &str, b: &str) -> Option<&Friendship> {
        self.friendships.get(&Friendship::ordered(a, b))
    }

    pub fn friendships(&self) -> impl Iterator<Item = &Friendship> {
        self.friendships.values()
    }

    pub fn friendship_count(&self) -> usize {
        self.friendships.len()
    }
}

impl NetworkSource for InMemoryNetwork {
    fn users(&self) -> FriendnetResult<Vec<User>> {
        Ok(self.users.values().cloned().collect())
    }

    fn approved_friends_of(&self, email: &str) -> FriendnetResult<Vec<String>> {
        Ok(self
            .friendships
            .values()
            .filter(|f| f.is_approved())
            .filter_map(|f| f.other_end(email))
            .map(str::to_string)
            .collect())
    }
}
