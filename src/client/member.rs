use dioxus_logger::tracing;
use serenity::all::{GuildId, Member, UserId};

use crate::{client::Client, error::AppError, session::Session};

impl<S: Session> Client<S> {
    /// Returns a guild's member based on the specific guild and user IDs.
    ///
    /// Tries the local cache first, if that misses, makes an API call.
    pub async fn member(&self, guild_id: GuildId, user_id: UserId) -> Result<Member, AppError> {
        if let Some(member) = self.session.cached_member(guild_id, user_id) {
            return Ok(member);
        }

        tracing::debug!(
            "Member {} of guild {} not cached, fetching from API",
            user_id,
            guild_id
        );

        self.session.fetch_member(guild_id, user_id).await
    }
}
