//! Discord bot that puts the lookup facade to work.
//!
//! The bot answers a single text command, `<prefix>join`, by checking that the
//! author may connect to voice and then joining the voice channel they are in.
//! All entity lookups go through [`crate::client::Client`] over a
//! [`crate::session::SerenitySession`] built from the event context.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Populate the guild cache (roles, owner, channels)
//! - `GUILD_MESSAGES` - Receive command messages in guilds
//! - `GUILD_VOICE_STATES` - Keep voice states cached
//! - `MESSAGE_CONTENT` - Read the command text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
