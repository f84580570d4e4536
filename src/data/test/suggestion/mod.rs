use crate::{data::suggestion::SuggestionRepository, model::suggestion::CreateSuggestionParams};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::suggestion::SuggestionFactory};

mod delete;
mod get_by_message_id;
mod get_recent;
mod update_content;
mod update_thread_id;
