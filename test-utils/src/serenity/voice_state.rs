//! Test factory for creating Serenity VoiceState objects.

use serde_json::Value;
use serenity::all::VoiceState;

/// Creates a test Serenity VoiceState.
///
/// The state is neither muted nor deafened. A `None` channel describes a user
/// who has disconnected from voice.
///
/// # Arguments
/// - `guild_id` - Guild the voice state belongs to
/// - `user_id` - User the voice state belongs to
/// - `channel_id` - Voice channel the user is connected to, if any
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
pub fn create_test_voice_state(guild_id: u64, user_id: u64, channel_id: Option<u64>) -> VoiceState {
    serde_json::from_value(voice_state_json(guild_id, user_id, channel_id))
        .expect("Failed to create test voice state - invalid JSON structure")
}

pub(crate) fn voice_state_json(guild_id: u64, user_id: u64, channel_id: Option<u64>) -> Value {
    serde_json::json!({
        "guild_id": guild_id.to_string(),
        "channel_id": channel_id.map(|id| id.to_string()),
        "user_id": user_id.to_string(),
        "member": null,
        "session_id": format!("session-{}", user_id),
        "deaf": false,
        "mute": false,
        "self_deaf": false,
        "self_mute": false,
        "self_stream": null,
        "self_video": false,
        "suppress": false,
        "request_to_speak_timestamp": null,
    })
}
