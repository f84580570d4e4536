use crate::{
    error::{validation::ValidationError, AppError},
    data::suggestion::SuggestionRepository,
    model::{edit_history::EditRequest, suggestion::Suggestion, view::EditOutcome},
    service::{
        edit::EditService,
        test::fake::{GatewayCall, Operation, RecordingGateway},
    },
    util::best_effort::BestEffort,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::suggestion::SuggestionFactory};

mod apply_edit;
mod authorize_edit;

const AUTHOR_ID: u64 = 42;
const THREAD_ID: u64 = 7007;

/// Inserts a thread-bound suggestion by `AUTHOR_ID` with the given content.
async fn create_bound_suggestion(
    db: &sea_orm::DatabaseConnection,
    content: &str,
) -> Result<entity::suggestion::Model, DbErr> {
    SuggestionFactory::new(db)
        .author_id(AUTHOR_ID.to_string())
        .author_username("Alice")
        .thread_id(Some(THREAD_ID.to_string()))
        .content(content)
        .build()
        .await
}

fn edit_request(suggestion_id: i32, editor_id: u64, new_content: &str) -> EditRequest {
    EditRequest {
        suggestion_id,
        channel_id: THREAD_ID,
        editor_id,
        editor_display_name: "Alice Renamed".to_string(),
        editor_is_admin: false,
        new_content: new_content.to_string(),
    }
}
