use dioxus_logger::tracing;
use serenity::all::{GuildId, UserId, VoiceState};

use crate::{
    client::Client,
    error::{not_found::NotFoundError, AppError},
    session::Session,
};

impl<S: Session> Client<S> {
    /// Returns a voice state by guild and user ID.
    ///
    /// Tries the local cache first. On a miss the guild itself is resolved
    /// (cache, then API) and its voice states are searched for the user.
    /// Guilds fetched from the API carry no voice states, so that path can
    /// only ever end in `NotFoundError::VoiceState`.
    pub async fn voice_state(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<VoiceState, AppError> {
        if let Some(voice_state) = self.session.cached_voice_state(guild_id, user_id) {
            return Ok(voice_state);
        }

        tracing::debug!(
            "Voice state of user {} in guild {} not cached, searching guild",
            user_id,
            guild_id
        );

        let guild = self.guild(guild_id).await?;

        guild
            .voice_states()
            .into_iter()
            .find(|voice_state| voice_state.user_id == user_id)
            .cloned()
            .ok_or_else(|| NotFoundError::VoiceState { guild_id, user_id }.into())
    }

    /// Joins the voice channel in `guild_id` that `user_id` is currently in.
    ///
    /// The bot joins unmuted and self-deafened. A voice state with no channel
    /// means the user has left voice and is reported as not found.
    pub async fn voice_join(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<S::Connection, AppError> {
        let voice_state = self.voice_state(guild_id, user_id).await?;

        let Some(channel_id) = voice_state.channel_id else {
            return Err(NotFoundError::VoiceState { guild_id, user_id }.into());
        };

        tracing::debug!(
            "Joining voice channel {} in guild {} to follow user {}",
            channel_id,
            guild_id,
            user_id
        );

        self.session
            .join_voice(
                voice_state.guild_id.unwrap_or(guild_id),
                channel_id,
                false,
                true,
            )
            .await
    }
}
