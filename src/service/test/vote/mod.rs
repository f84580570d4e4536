use crate::{
    error::AppError,
    model::vote::{VoteEffect, VoteTally, VoteType},
    service::{
        test::fake::{Operation, RecordingGateway},
        vote::VoteService,
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
