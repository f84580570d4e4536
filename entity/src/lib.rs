//! SeaORM entities for the suggestion board.
//!
//! One module per table: `suggestions`, `votes` and `edit_history`. Votes and edit
//! history rows belong to a suggestion and are removed with it (ON DELETE CASCADE).

pub mod prelude;

pub mod edit_history;
pub mod suggestion;
pub mod vote;
