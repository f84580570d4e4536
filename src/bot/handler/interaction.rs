//! Interaction handling: vote buttons, the `/edit` command and the edit modal.
//!
//! Every user action gets an ephemeral reply. Rejections carry their reason; store and
//! Discord failures are logged and answered with a generic message.

use sea_orm::DatabaseConnection;
use serenity::all::{
    ActionRowComponent, CommandInteraction, ComponentInteraction, Context,
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
    Interaction, Member, ModalInteraction,
};

use crate::{
    bot::{
        gateway::DiscordGateway,
        render::{edit_modal, parse_edit_modal_id, parse_vote_button, EDIT_CONTENT_INPUT_ID},
    },
    model::{edit_history::EditRequest, view::EditOutcome},
    service::{edit::EditService, vote::VoteService},
};

pub async fn handle_interaction(
    db: &DatabaseConnection,
    gateway: &DiscordGateway,
    ctx: Context,
    interaction: Interaction,
) {
    match interaction {
        Interaction::Component(component) => {
            handle_vote_button(db, gateway, &ctx, component).await
        }
        Interaction::Command(command) if command.data.name == "edit" => {
            handle_edit_command(db, gateway, &ctx, command).await
        }
        Interaction::Modal(modal) => handle_edit_modal(db, gateway, &ctx, modal).await,
        _ => {}
    }
}

fn is_administrator(member: Option<&Member>) -> bool {
    member
        .and_then(|m| m.permissions)
        .is_some_and(|permissions| permissions.administrator())
}

async fn handle_vote_button(
    db: &DatabaseConnection,
    gateway: &DiscordGateway,
    ctx: &Context,
    component: ComponentInteraction,
) {
    let Some(vote_type) = parse_vote_button(&component.data.custom_id) else {
        return;
    };

    if let Err(e) = component.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to acknowledge vote interaction: {}", e);
        return;
    }

    let service = VoteService::new(db, gateway);
    let reply = match service
        .vote_on_message(component.message.id.get(), component.user.id.get(), vote_type)
        .await
    {
        Ok(cast) => cast.confirmation(),
        Err(e) => e.user_message(),
    };

    if let Err(e) = component
        .edit_response(&ctx.http, EditInteractionResponse::new().content(reply))
        .await
    {
        tracing::error!("Failed to reply to vote interaction: {}", e);
    }
}

async fn handle_edit_command(
    db: &DatabaseConnection,
    gateway: &DiscordGateway,
    ctx: &Context,
    command: CommandInteraction,
) {
    let service = EditService::new(db, gateway);

    let authorized = service
        .authorize_edit(
            command.channel_id.get(),
            command.user.id.get(),
            is_administrator(command.member.as_deref()),
        )
        .await;

    let response = match authorized {
        Ok(suggestion) => CreateInteractionResponse::Modal(edit_modal(&suggestion)),
        Err(e) => CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(e.user_message())
                .ephemeral(true),
        ),
    };

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to /edit: {}", e);
    }
}

/// Reads the submitted text of the edit modal's content input.
fn submitted_content(modal: &ModalInteraction) -> Option<String> {
    modal
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == EDIT_CONTENT_INPUT_ID => {
                input.value.clone()
            }
            _ => None,
        })
}

async fn handle_edit_modal(
    db: &DatabaseConnection,
    gateway: &DiscordGateway,
    ctx: &Context,
    modal: ModalInteraction,
) {
    let Some(suggestion_id) = parse_edit_modal_id(&modal.data.custom_id) else {
        return;
    };

    if let Err(e) = modal.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to acknowledge edit submission: {}", e);
        return;
    }

    let editor_display_name = match &modal.member {
        Some(member) => member.display_name().to_string(),
        None => modal.user.display_name().to_string(),
    };

    let request = EditRequest {
        suggestion_id,
        channel_id: modal.channel_id.get(),
        editor_id: modal.user.id.get(),
        editor_display_name,
        editor_is_admin: is_administrator(modal.member.as_ref()),
        new_content: submitted_content(&modal).unwrap_or_default(),
    };

    let service = EditService::new(db, gateway);
    let reply = match service.apply_edit(request).await {
        Ok(EditOutcome::Applied { .. }) => "✅ Suggestion edited successfully!".to_string(),
        Ok(EditOutcome::Unchanged) => "⚠️ No changes were made.".to_string(),
        Err(e) => e.user_message(),
    };

    if let Err(e) = modal
        .edit_response(&ctx.http, EditInteractionResponse::new().content(reply))
        .await
    {
        tracing::error!("Failed to reply to edit submission: {}", e);
    }
}
