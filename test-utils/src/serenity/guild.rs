//! Test factories for creating Serenity Guild and PartialGuild objects.
//!
//! The gateway hands the cache full `Guild` objects, while the REST API returns
//! `PartialGuild`s without voice states. Both are built from the same JSON
//! payload so a test can place the "same" guild on either side of a lookup.

use serde_json::Value;
use serenity::all::{Guild, PartialGuild};

use super::voice_state::voice_state_json;

/// Creates a test Serenity Guild with the given owner and no voice states.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `owner_id` - User ID of the guild owner
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
pub fn create_test_guild(guild_id: u64, name: &str, owner_id: u64) -> Guild {
    create_test_guild_with_voice_states(guild_id, name, owner_id, &[])
}

/// Creates a test Serenity Guild with voice states.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `owner_id` - User ID of the guild owner
/// - `voice_states` - `(user_id, channel_id)` pairs; `None` channel means the
///   user is not connected to voice
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::guild::create_test_guild_with_voice_states;
///
/// let guild = create_test_guild_with_voice_states(1, "Test Guild", 100, &[(2, Some(50))]);
/// assert_eq!(guild.voice_states.len(), 1);
/// ```
pub fn create_test_guild_with_voice_states(
    guild_id: u64,
    name: &str,
    owner_id: u64,
    voice_states: &[(u64, Option<u64>)],
) -> Guild {
    let voice_states: Vec<Value> = voice_states
        .iter()
        .map(|(user_id, channel_id)| voice_state_json(guild_id, *user_id, *channel_id))
        .collect();

    serde_json::from_value(guild_json(guild_id, name, owner_id, voice_states))
        .expect("Failed to create test guild - invalid JSON structure")
}

/// Creates a test Serenity PartialGuild, as returned by the guild API endpoint.
///
/// # Panics
/// - If the JSON cannot be deserialized into a PartialGuild (indicates invalid test data)
pub fn create_test_partial_guild(guild_id: u64, name: &str, owner_id: u64) -> PartialGuild {
    serde_json::from_value(guild_json(guild_id, name, owner_id, Vec::new()))
        .expect("Failed to create test partial guild - invalid JSON structure")
}

fn guild_json(guild_id: u64, name: &str, owner_id: u64, voice_states: Vec<Value>) -> Value {
    serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "owner_id": owner_id.to_string(),
        "afk_channel_id": null,
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": voice_states,
        "channels": [],
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    })
}
