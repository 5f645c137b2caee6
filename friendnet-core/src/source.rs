//! Collaborator contract consumed by the graph analyses.
//!
//! The user/friendship management layer (storage, request validation,
//! accounts) lives outside this crate; the analyses only need the two
//! read primitives below.

use crate::domain::User;
use crate::error::FriendnetResult;

/// Read access to the social network backing the analyses.
///
/// Implementations must return a view that is stable for the duration of one
/// query; [`crate::snapshot::Snapshot::capture`] reads it exactly once and
/// operates on the copy. Read failures surface as
/// [`crate::error::FriendnetError::DataSource`] and abort the query — no
/// retries.
pub trait NetworkSource {
    /// All known users, in any order.
    fn users(&self) -> FriendnetResult<Vec<User>>;

    /// Emails of all users sharing an APPROVED friendship edge with `email`.
    ///
    /// Pending requests are invisible here. An email with no approved
    /// friends (or not known at all) yields an empty list, not an error.
    fn approved_friends_of(&self, email: &str) -> FriendnetResult<Vec<String>>;
}
