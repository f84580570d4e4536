//! Discord bot integration for the suggestion board.
//!
//! The bot listens to the configured suggestions channel, turns new messages into
//! suggestion embeds with vote buttons, handles `/edit` and its modal inside suggestion
//! threads and tears suggestions down when their message is deleted.
//!
//! The bot's HTTP client is shared with the display-name scheduler so both talk to
//! Discord without maintaining separate connections.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive thread and channel events
//! - `GUILD_MESSAGES` - Receive message create and delete events
//! - `MESSAGE_CONTENT` - Read the body of suggestion messages (privileged intent)
//! - `GUILD_MEMBERS` - Resolve member nicknames for display names (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer Portal
//! for the bot application.

pub mod gateway;
pub mod handler;
pub mod render;
pub mod start;
