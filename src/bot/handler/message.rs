//! Text command handling.
//!
//! Only `<prefix>join` is recognized. Messages from bots, messages without the
//! prefix and unknown commands are ignored silently.

use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, Message, Permissions, UserId};

use crate::{
    client::Client,
    error::{not_found::NotFoundError, AppError},
    session::{SerenitySession, Session},
};

/// Handle message creation in a channel
pub async fn handle_message(command_prefix: &str, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let Some(command) = message.content.strip_prefix(command_prefix) else {
        return;
    };
    if command.trim() != "join" {
        return;
    }

    let reply = match message.guild_id {
        None => "Voice channels are only available in servers".to_string(),
        Some(guild_id) => {
            let client = Client::new(SerenitySession::from_context(&ctx).await);

            match join_author(&client, guild_id, message.author.id).await {
                Ok(reply) => reply,
                Err(e) => {
                    tracing::error!(
                        "Failed to join voice for user {} in guild {}: {}",
                        message.author.id,
                        guild_id,
                        e
                    );
                    "Failed to join your voice channel".to_string()
                }
            }
        }
    };

    if let Err(e) = message.reply(&ctx, reply).await {
        tracing::error!(
            "Failed to reply to command in channel {}: {}",
            message.channel_id,
            e
        );
    }
}

/// Joins the author's voice channel if they may connect to voice themselves.
///
/// A missing voice state is an expected outcome and turns into a reply rather
/// than an error.
async fn join_author<S: Session>(
    client: &Client<S>,
    guild_id: GuildId,
    user_id: UserId,
) -> Result<String, AppError> {
    if !client
        .member_allowed(Some(guild_id), user_id, Permissions::CONNECT)
        .await?
    {
        tracing::debug!("User {} lacks CONNECT in guild {}", user_id, guild_id);
        return Ok("You need the Connect permission to use this command".to_string());
    }

    match client.voice_join(guild_id, user_id).await {
        Ok(_) => {
            tracing::info!("Joined voice in guild {} following user {}", guild_id, user_id);
            Ok("Joined your voice channel".to_string())
        }
        Err(AppError::NotFoundErr(NotFoundError::VoiceState { .. })) => {
            Ok("Join a voice channel first".to_string())
        }
        Err(e) => Err(e),
    }
}
