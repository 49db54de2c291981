use dioxus_logger::tracing;
use serenity::all::GatewayIntents;
use songbird::SerenityInit;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Builds the Discord bot client.
///
/// The client has Songbird registered so that sessions built from its event
/// contexts can join voice channels.
///
/// # Arguments
/// - `config` - Application configuration providing the bot token and command prefix
///
/// # Returns
/// - `Ok(serenity::Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed (e.g. malformed token)
pub async fn init_bot(config: &Config) -> Result<serenity::Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(config.command_prefix.clone());

    let client = serenity::Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .register_songbird()
        .await?;

    Ok(client)
}

/// Starts the Discord bot, blocking until it shuts down.
pub async fn start_bot(mut client: serenity::Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
