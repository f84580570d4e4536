//! Embed, button and modal layout plus the custom ids the interaction handler parses.

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedAuthor,
    CreateEmbedFooter, CreateInputText, CreateModal, InputTextStyle, Timestamp,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::{
        suggestion::Suggestion,
        view::SuggestionView,
        vote::{VoteTally, VoteType},
    },
};

pub const VOTE_UP_ID: &str = "vote_up";
pub const VOTE_DOWN_ID: &str = "vote_down";
pub const EDIT_MODAL_PREFIX: &str = "edit_suggestion_";
pub const EDIT_CONTENT_INPUT_ID: &str = "new_content";

/// Discord's per-message content limit.
pub const MESSAGE_MAX_CHARS: usize = 2000;

const EMBED_COLOR: u32 = 0x5865F2;

pub fn parse_vote_button(custom_id: &str) -> Option<VoteType> {
    match custom_id {
        VOTE_UP_ID => Some(VoteType::Up),
        VOTE_DOWN_ID => Some(VoteType::Down),
        _ => None,
    }
}

pub fn edit_modal_id(suggestion_id: i32) -> String {
    format!("{}{}", EDIT_MODAL_PREFIX, suggestion_id)
}

/// Extracts the suggestion id from an edit modal's custom id.
pub fn parse_edit_modal_id(custom_id: &str) -> Option<i32> {
    custom_id.strip_prefix(EDIT_MODAL_PREFIX)?.parse().ok()
}

pub fn tally_text(tally: &VoteTally) -> String {
    format!(
        "👍 **{}** in favour\n👎 **{}** against",
        tally.upvotes, tally.downvotes
    )
}

pub fn footer_text(view: &SuggestionView) -> String {
    let id = match view.suggestion_id {
        Some(id) => id.to_string(),
        None => "pending".to_string(),
    };

    if view.edited {
        format!("ID: {} • ✏️ Edited", id)
    } else {
        format!("ID: {}", id)
    }
}

/// Builds the suggestion embed.
///
/// # Returns
/// - `Ok(CreateEmbed)` - Embed ready for posting or editing
/// - `Err(AppError::InternalErr(InvalidDiscordTimestamp))` - Creation time out of range
pub fn build_suggestion_embed(view: &SuggestionView) -> Result<CreateEmbed, AppError> {
    let created_at = view.created_at.timestamp();
    let timestamp = Timestamp::from_unix_timestamp(created_at).map_err(|e| {
        AppError::InternalErr(InternalError::InvalidDiscordTimestamp {
            timestamp: created_at,
            reason: e.to_string(),
        })
    })?;

    Ok(CreateEmbed::new()
        .color(EMBED_COLOR)
        .author(CreateEmbedAuthor::new(&view.author_display_name))
        .title("💡 New Suggestion")
        .description(&view.content)
        .field("📊 Votes", tally_text(&view.tally), false)
        .footer(CreateEmbedFooter::new(footer_text(view)))
        .timestamp(timestamp))
}

pub fn vote_buttons() -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(VOTE_UP_ID)
            .label("👍 Vote in favour")
            .style(ButtonStyle::Success),
        CreateButton::new(VOTE_DOWN_ID)
            .label("👎 Vote against")
            .style(ButtonStyle::Danger),
    ])
}

/// Text input value for the edit modal.
///
/// Discord rejects a modal whose prefilled value exceeds the input's limit, so longer
/// suggestions are cut to the first [`MESSAGE_MAX_CHARS`] characters without a marker.
pub fn edit_prefill(content: &str) -> String {
    content.chars().take(MESSAGE_MAX_CHARS).collect()
}

/// Modal opened by `/edit`, prefilled with the current content.
pub fn edit_modal(suggestion: &Suggestion) -> CreateModal {
    let input = CreateInputText::new(
        InputTextStyle::Paragraph,
        "New suggestion text",
        EDIT_CONTENT_INPUT_ID,
    )
    .value(edit_prefill(&suggestion.content))
    .required(true)
    .max_length(MESSAGE_MAX_CHARS as u16);

    CreateModal::new(edit_modal_id(suggestion.id), "Edit Suggestion")
        .components(vec![CreateActionRow::InputText(input)])
}
