//! Cache-first Discord lookups and role-based permission checks.
//!
//! `dgc` is a thin layer over serenity: [`client::Client`] resolves members,
//! channels, guilds, roles and voice states from the local cache, falls back to
//! the REST API on a miss, and answers "may this user do X?" from the member's
//! role permissions. It holds no state besides the wrapped [`session::Session`].
//!
//! # Modules
//!
//! - **Client** (`client/`) - The lookup facade and permission resolution
//! - **Session** (`session/`) - Cache/API seam and its serenity implementation
//! - **Error** (`error/`) - Error types shared by the facade and the bot
//! - **Configuration** (`config`) - Environment-based bot configuration
//! - **Bot** (`bot/`) - Example bot with a `join` command built on the facade
//!
//! # Configuration
//!
//! The bot binary reads these environment variables (a `.env` file is honored):
//! - `DISCORD_BOT_TOKEN` - Bot token (required)
//! - `COMMAND_PREFIX` - Prefix for text commands (default `!`)

pub mod bot;
pub mod client;
pub mod config;
pub mod error;
pub mod session;
