use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{
    Channel, ChannelId, Context, Guild, GuildId, Member, PartialGuild, Role, RoleId, UserId,
    VoiceState,
};
use serenity::async_trait;
use serenity::cache::Cache;
use serenity::http::Http;
use songbird::error::{JoinError, JoinResult};
use songbird::{Call, Songbird};
use tokio::sync::Mutex;

use crate::{
    error::{config::ConfigError, AppError},
    session::Session,
};

/// Session backed by a live serenity client.
///
/// Holds shared handles only, so cloning is cheap and one session can be
/// built per event without touching the gateway connection.
#[derive(Clone)]
pub struct SerenitySession {
    cache: Arc<Cache>,
    http: Arc<Http>,
    voice: Option<Arc<Songbird>>,
}

impl SerenitySession {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>) -> Self {
        Self {
            cache,
            http,
            voice: None,
        }
    }

    /// Attaches the Songbird manager used for voice joins.
    pub fn with_voice(mut self, voice: Arc<Songbird>) -> Self {
        self.voice = Some(voice);
        self
    }

    /// Builds a session from an event context, picking up the Songbird manager
    /// if the client was built with `register_songbird()`.
    pub async fn from_context(ctx: &Context) -> Self {
        let session = Self::new(ctx.cache.clone(), ctx.http.clone());

        match songbird::get(ctx).await {
            Some(voice) => session.with_voice(voice),
            None => session,
        }
    }
}

#[async_trait]
impl Session for SerenitySession {
    type Connection = Arc<Mutex<Call>>;

    fn cached_member(&self, guild_id: GuildId, user_id: UserId) -> Option<Member> {
        self.cache
            .guild(guild_id)
            .and_then(|guild| guild.members.get(&user_id).cloned())
    }

    // Channels are only cached per guild, so every cached guild is searched.
    fn cached_channel(&self, channel_id: ChannelId) -> Option<Channel> {
        self.cache.guilds().into_iter().find_map(|guild_id| {
            self.cache
                .guild(guild_id)
                .and_then(|guild| guild.channels.get(&channel_id).cloned())
                .map(Channel::Guild)
        })
    }

    fn cached_guild(&self, guild_id: GuildId) -> Option<Guild> {
        self.cache.guild(guild_id).map(|guild| Guild::clone(&guild))
    }

    fn cached_role(&self, guild_id: GuildId, role_id: RoleId) -> Option<Role> {
        self.cache
            .guild(guild_id)
            .and_then(|guild| guild.roles.get(&role_id).cloned())
    }

    fn cached_voice_state(&self, guild_id: GuildId, user_id: UserId) -> Option<VoiceState> {
        self.cache
            .guild(guild_id)
            .and_then(|guild| guild.voice_states.get(&user_id).cloned())
    }

    async fn fetch_member(&self, guild_id: GuildId, user_id: UserId) -> Result<Member, AppError> {
        Ok(self.http.get_member(guild_id, user_id).await?)
    }

    async fn fetch_channel(&self, channel_id: ChannelId) -> Result<Channel, AppError> {
        Ok(self.http.get_channel(channel_id).await?)
    }

    async fn fetch_guild(&self, guild_id: GuildId) -> Result<PartialGuild, AppError> {
        Ok(self.http.get_guild(guild_id).await?)
    }

    async fn fetch_roles(&self, guild_id: GuildId) -> Result<Vec<Role>, AppError> {
        Ok(self.http.get_guild_roles(guild_id).await?)
    }

    async fn join_voice(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
        self_mute: bool,
        self_deaf: bool,
    ) -> Result<Self::Connection, AppError> {
        let voice = self.voice.as_ref().ok_or(ConfigError::VoiceNotRegistered)?;

        // Flags set before joining are sent with the join itself.
        let call = voice.get_or_insert(guild_id);
        let join = {
            let mut handler = call.lock().await;
            unless_disconnected(handler.mute(self_mute).await)?;
            unless_disconnected(handler.deafen(self_deaf).await)?;
            handler.join(channel_id).await
        };

        // The lock must be released before waiting for the connection.
        let joined = match join {
            Ok(join) => join.await,
            Err(e) => Err(e),
        };

        if let Err(e) = joined {
            if let Err(remove_err) = voice.remove(guild_id).await {
                tracing::warn!(
                    "Failed to leave voice in guild {} after failed join: {}",
                    guild_id,
                    remove_err
                );
            }
            return Err(e.into());
        }

        Ok(call)
    }
}

/// Treats "no active call" as success when updating flags before a join.
fn unless_disconnected(result: JoinResult<()>) -> JoinResult<()> {
    match result {
        Err(JoinError::NoCall) => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_session() -> SerenitySession {
        SerenitySession::new(Arc::new(Cache::new()), Arc::new(Http::new("")))
    }

    #[test]
    fn test_empty_cache_misses() {
        let session = empty_session();
        let guild_id = GuildId::new(1);
        let user_id = UserId::new(2);

        assert!(session.cached_member(guild_id, user_id).is_none());
        assert!(session.cached_channel(ChannelId::new(50)).is_none());
        assert!(session.cached_guild(guild_id).is_none());
        assert!(session.cached_role(guild_id, RoleId::new(10)).is_none());
        assert!(session.cached_voice_state(guild_id, user_id).is_none());
    }

    #[tokio::test]
    async fn test_join_without_voice_manager() {
        let session = empty_session();

        let result = session
            .join_voice(GuildId::new(1), ChannelId::new(50), false, true)
            .await;

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::VoiceNotRegistered))
        ));
    }

    #[test]
    fn test_flags_accepted_before_connecting() {
        assert!(unless_disconnected(Err(JoinError::NoCall)).is_ok());
        assert!(unless_disconnected(Ok(())).is_ok());
    }

    #[test]
    fn test_flag_errors_kept_while_connected() {
        assert!(matches!(
            unless_disconnected(Err(JoinError::Dropped)),
            Err(JoinError::Dropped)
        ));
    }
}
