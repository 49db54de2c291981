use dioxus_logger::tracing;
use serenity::all::{Guild, GuildId, PartialGuild, UserId, VoiceState};

use crate::{client::Client, error::AppError, session::Session};

/// A guild resolved either from the cache or from the API.
///
/// The cache holds full gateway guilds while the API returns partial guilds,
/// which carry no voice states. Accessors cover what both have in common so
/// callers can treat either source the same way.
#[derive(Debug, Clone)]
pub enum GuildRecord {
    Cached(Box<Guild>),
    Fetched(Box<PartialGuild>),
}

impl GuildRecord {
    pub fn id(&self) -> GuildId {
        match self {
            Self::Cached(guild) => guild.id,
            Self::Fetched(guild) => guild.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Cached(guild) => &guild.name,
            Self::Fetched(guild) => &guild.name,
        }
    }

    pub fn owner_id(&self) -> UserId {
        match self {
            Self::Cached(guild) => guild.owner_id,
            Self::Fetched(guild) => guild.owner_id,
        }
    }

    /// Voice states known for the guild, empty for fetched guilds.
    pub fn voice_states(&self) -> Vec<&VoiceState> {
        match self {
            Self::Cached(guild) => guild.voice_states.values().collect(),
            Self::Fetched(_) => Vec::new(),
        }
    }
}

impl From<Guild> for GuildRecord {
    fn from(guild: Guild) -> Self {
        Self::Cached(Box::new(guild))
    }
}

impl From<PartialGuild> for GuildRecord {
    fn from(guild: PartialGuild) -> Self {
        Self::Fetched(Box::new(guild))
    }
}

impl<S: Session> Client<S> {
    /// Returns a guild based on the specific guild ID.
    ///
    /// Tries the local cache first, if that misses, makes an API call.
    pub async fn guild(&self, guild_id: GuildId) -> Result<GuildRecord, AppError> {
        if let Some(guild) = self.session.cached_guild(guild_id) {
            return Ok(guild.into());
        }

        tracing::debug!("Guild {} not cached, fetching from API", guild_id);

        Ok(self.session.fetch_guild(guild_id).await?.into())
    }
}
