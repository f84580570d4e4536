use crate::service::{
    display_name::DisplayNameService,
    test::fake::{GatewayCall, Operation, RecordingGateway},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::suggestion::SuggestionFactory};
