//! Cache-first lookups of Discord entities and role-based permission checks.
//!
//! Every lookup on [`Client`] follows the same two-step contract: ask the
//! session's local cache, and on a miss make one equivalent API call. A cache
//! hit and a successful fetch are interchangeable results; callers cannot and
//! should not tell them apart. API errors are returned unchanged.
//!
//! Two lookups have no direct API equivalent and scan fetched data instead:
//! - `role` fetches the guild's full role list and matches the role id
//! - `voice_state` resolves the guild and matches the user id among its voice states
//!
//! When the scan finds nothing, a [`NotFoundError`](crate::error::not_found::NotFoundError)
//! is returned.

pub mod channel;
pub mod guild;
pub mod member;
pub mod permission;
pub mod role;
pub mod voice;

#[cfg(test)]
mod test;

use crate::session::Session;

pub use guild::GuildRecord;

/// Lookup facade over a [`Session`].
pub struct Client<S> {
    session: S,
}

impl<S: Session> Client<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    /// The wrapped session, for calls the facade does not mirror.
    pub fn session(&self) -> &S {
        &self.session
    }
}
