//! Domain models for the suggestion board.
//!
//! Entity models use TEXT columns for Discord snowflakes; the models here hold them as
//! `u64` and are built at the repository boundary with `from_entity`.

pub mod edit_history;
pub mod suggestion;
pub mod view;
pub mod vote;
