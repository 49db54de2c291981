//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Guild, Member, Role, Channel, VoiceState) for testing purposes. These
//! factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's gateway and API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild_with_voice_states, create_test_voice_state};
//!
//! #[tokio::test]
//! async fn test_voice_lookup() {
//!     // Guild owned by user 100 where user 2 sits in voice channel 50
//!     let guild = create_test_guild_with_voice_states(1, "Test Guild", 100, &[(2, Some(50))]);
//!
//!     // Standalone voice state, as the cache would hold it
//!     let state = create_test_voice_state(1, 2, Some(50));
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create cached Serenity Guild objects
//! - `guild::create_test_guild_with_voice_states` - Create Guild objects with voice states
//! - `guild::create_test_partial_guild` - Create PartialGuild objects as the API returns them
//! - `member::create_test_member` - Create Serenity Member objects
//! - `role::create_test_role` - Create Serenity Role objects
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `voice_state::create_test_voice_state` - Create Serenity VoiceState objects

pub mod channel;
pub mod guild;
pub mod member;
pub mod role;
pub mod voice_state;

// Re-export commonly used functions for convenience
pub use channel::create_test_channel;
pub use guild::{create_test_guild, create_test_guild_with_voice_states, create_test_partial_guild};
pub use member::create_test_member;
pub use role::create_test_role;
pub use voice_state::create_test_voice_state;
