//! Suggestion workflows.
//!
//! Each service borrows the database connection and an outbound [`gateway::SuggestionGateway`]
//! for the duration of one event. Store changes are the primary effect of every
//! operation; Discord updates that follow them are best effort and never roll a store
//! change back.

pub mod display_name;
pub mod edit;
pub mod gateway;
pub mod suggestion;
pub mod view;
pub mod vote;
