use serenity::all::{GuildId, RoleId, UserId};
use thiserror::Error;

/// Lookups that missed the cache and also found nothing in the fetched data.
///
/// Plain cache misses never surface as this error: they fall back to the API,
/// and an API-side "unknown entity" is reported through `AppError::DiscordErr`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// The guild's role list does not contain the requested role.
    #[error("Couldn't find role {role_id} in guild {guild_id}")]
    Role {
        /// Guild whose roles were searched
        guild_id: GuildId,
        /// The role that was requested
        role_id: RoleId,
    },

    /// The guild's voice states do not include the requested user.
    #[error("Could not find voice state of user {user_id} in guild {guild_id}")]
    VoiceState {
        /// Guild whose voice states were searched
        guild_id: GuildId,
        /// The user that was requested
        user_id: UserId,
    },
}
