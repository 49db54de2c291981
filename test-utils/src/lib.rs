//! dgc Test Utils
//!
//! Provides shared testing utilities for the dgc lookup facade. The crate
//! builds valid Serenity model objects (guilds, members, roles, channels and
//! voice states) by deserializing JSON shaped like Discord's API payloads, so
//! tests can fill a fake cache or API without a live connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use serenity::all::Permissions;
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! #[tokio::test]
//! async fn test_member_roles() {
//!     let role = create_test_role(10, "Moderator", Permissions::KICK_MEMBERS);
//!     let member = create_test_member(1, 2, &[10]);
//!
//!     // Insert into a test session...
//! }
//! ```

pub mod serenity;
