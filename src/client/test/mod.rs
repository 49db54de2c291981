use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serenity::all::{
    Channel, ChannelId, Guild, GuildChannel, GuildId, Member, PartialGuild, Permissions, Role,
    RoleId, UserId, VoiceState,
};
use serenity::async_trait;
use test_utils::serenity::{
    create_test_channel, create_test_guild, create_test_guild_with_voice_states,
    create_test_member, create_test_partial_guild, create_test_role, create_test_voice_state,
};

use crate::{
    client::{Client, GuildRecord},
    error::{not_found::NotFoundError, AppError},
    session::Session,
};

mod role;

const GUILD_ID: u64 = 1;
const USER_ID: u64 = 2;
const OWNER_ID: u64 = 100;
const CHANNEL_ID: u64 = 50;

/// In-memory session with a separate cache and "remote" side.
///
/// Every remote call is counted so tests can tell a cache hit from a fetch.
/// Remote lookups of unknown entities fail like an API 404 would.
#[derive(Default)]
struct TestSession {
    cached_members: HashMap<(GuildId, UserId), Member>,
    cached_channels: HashMap<ChannelId, Channel>,
    cached_guilds: HashMap<GuildId, Guild>,
    cached_roles: HashMap<(GuildId, RoleId), Role>,
    cached_voice_states: HashMap<(GuildId, UserId), VoiceState>,

    remote_members: HashMap<(GuildId, UserId), Member>,
    remote_channels: HashMap<ChannelId, Channel>,
    remote_guilds: HashMap<GuildId, PartialGuild>,
    remote_roles: HashMap<GuildId, Vec<Role>>,

    fail_voice_join: bool,
    api_calls: AtomicUsize,
    joins: Mutex<Vec<(GuildId, ChannelId, bool, bool)>>,
}

impl TestSession {
    fn new() -> Self {
        Self::default()
    }

    fn cache_member(mut self, member: Member) -> Self {
        self.cached_members
            .insert((member.guild_id, member.user.id), member);
        self
    }

    fn remote_member(mut self, member: Member) -> Self {
        self.remote_members
            .insert((member.guild_id, member.user.id), member);
        self
    }

    fn cache_channel(mut self, channel: GuildChannel) -> Self {
        self.cached_channels
            .insert(channel.id, Channel::Guild(channel));
        self
    }

    fn remote_channel(mut self, channel: GuildChannel) -> Self {
        self.remote_channels
            .insert(channel.id, Channel::Guild(channel));
        self
    }

    fn cache_guild(mut self, guild: Guild) -> Self {
        self.cached_guilds.insert(guild.id, guild);
        self
    }

    fn remote_guild(mut self, guild: PartialGuild) -> Self {
        self.remote_guilds.insert(guild.id, guild);
        self
    }

    fn cache_role(mut self, guild_id: u64, role: Role) -> Self {
        self.cached_roles
            .insert((GuildId::new(guild_id), role.id), role);
        self
    }

    fn remote_roles(mut self, guild_id: u64, roles: Vec<Role>) -> Self {
        self.remote_roles.insert(GuildId::new(guild_id), roles);
        self
    }

    fn cache_voice_state(mut self, guild_id: u64, voice_state: VoiceState) -> Self {
        self.cached_voice_states
            .insert((GuildId::new(guild_id), voice_state.user_id), voice_state);
        self
    }

    fn failing_voice_join(mut self) -> Self {
        self.fail_voice_join = true;
        self
    }

    fn api_calls(&self) -> usize {
        self.api_calls.load(Ordering::SeqCst)
    }

    fn joins(&self) -> Vec<(GuildId, ChannelId, bool, bool)> {
        self.joins.lock().unwrap().clone()
    }

    fn record_api_call(&self) {
        self.api_calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Session for TestSession {
    type Connection = (GuildId, ChannelId);

    fn cached_member(&self, guild_id: GuildId, user_id: UserId) -> Option<Member> {
        self.cached_members.get(&(guild_id, user_id)).cloned()
    }

    fn cached_channel(&self, channel_id: ChannelId) -> Option<Channel> {
        self.cached_channels.get(&channel_id).cloned()
    }

    fn cached_guild(&self, guild_id: GuildId) -> Option<Guild> {
        self.cached_guilds.get(&guild_id).cloned()
    }

    fn cached_role(&self, guild_id: GuildId, role_id: RoleId) -> Option<Role> {
        self.cached_roles.get(&(guild_id, role_id)).cloned()
    }

    fn cached_voice_state(&self, guild_id: GuildId, user_id: UserId) -> Option<VoiceState> {
        self.cached_voice_states.get(&(guild_id, user_id)).cloned()
    }

    async fn fetch_member(&self, guild_id: GuildId, user_id: UserId) -> Result<Member, AppError> {
        self.record_api_call();
        self.remote_members
            .get(&(guild_id, user_id))
            .cloned()
            .ok_or_else(|| serenity::Error::Other("Unknown Member").into())
    }

    async fn fetch_channel(&self, channel_id: ChannelId) -> Result<Channel, AppError> {
        self.record_api_call();
        self.remote_channels
            .get(&channel_id)
            .cloned()
            .ok_or_else(|| serenity::Error::Other("Unknown Channel").into())
    }

    async fn fetch_guild(&self, guild_id: GuildId) -> Result<PartialGuild, AppError> {
        self.record_api_call();
        self.remote_guilds
            .get(&guild_id)
            .cloned()
            .ok_or_else(|| serenity::Error::Other("Unknown Guild").into())
    }

    async fn fetch_roles(&self, guild_id: GuildId) -> Result<Vec<Role>, AppError> {
        self.record_api_call();
        self.remote_roles
            .get(&guild_id)
            .cloned()
            .ok_or_else(|| serenity::Error::Other("Unknown Guild").into())
    }

    async fn join_voice(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
        self_mute: bool,
        self_deaf: bool,
    ) -> Result<Self::Connection, AppError> {
        if self.fail_voice_join {
            return Err(songbird::error::JoinError::NoCall.into());
        }

        self.joins
            .lock()
            .unwrap()
            .push((guild_id, channel_id, self_mute, self_deaf));

        Ok((guild_id, channel_id))
    }
}

fn is_api_error(err: &AppError) -> bool {
    matches!(err, AppError::DiscordErr(_))
}
