//! The seam between the lookup facade and the wrapped Discord library.
//!
//! A [`Session`] bundles the two sources the facade chooses between: the local
//! state cache, which answers synchronously and reports a miss as `None`, and
//! the remote API, whose calls may fail with any error the library produces.
//! The facade never inspects *why* a cache lookup missed; it only decides
//! whether to fall back.
//!
//! [`discord::SerenitySession`] is the production implementation.

pub mod discord;

use serenity::all::{
    Channel, ChannelId, Guild, GuildId, Member, PartialGuild, Role, RoleId, UserId, VoiceState,
};
use serenity::async_trait;

use crate::error::AppError;

pub use discord::SerenitySession;

#[async_trait]
pub trait Session: Send + Sync {
    /// Handle returned by a successful voice channel join.
    type Connection: Send;

    fn cached_member(&self, guild_id: GuildId, user_id: UserId) -> Option<Member>;

    fn cached_channel(&self, channel_id: ChannelId) -> Option<Channel>;

    fn cached_guild(&self, guild_id: GuildId) -> Option<Guild>;

    fn cached_role(&self, guild_id: GuildId, role_id: RoleId) -> Option<Role>;

    fn cached_voice_state(&self, guild_id: GuildId, user_id: UserId) -> Option<VoiceState>;

    async fn fetch_member(&self, guild_id: GuildId, user_id: UserId) -> Result<Member, AppError>;

    async fn fetch_channel(&self, channel_id: ChannelId) -> Result<Channel, AppError>;

    async fn fetch_guild(&self, guild_id: GuildId) -> Result<PartialGuild, AppError>;

    /// Fetches every role of the guild.
    async fn fetch_roles(&self, guild_id: GuildId) -> Result<Vec<Role>, AppError>;

    /// Joins `channel_id` in `guild_id` with the given self-mute and
    /// self-deafen flags.
    async fn join_voice(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
        self_mute: bool,
        self_deaf: bool,
    ) -> Result<Self::Connection, AppError>;
}
