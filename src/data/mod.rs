//! Suggestion store repositories.
//!
//! Repositories wrap SeaORM entities and return entity models or raw `DbErr`; services
//! convert both at their boundary. Every repository is generic over `ConnectionTrait` so
//! the same operations run on the pooled connection or inside a transaction.

pub mod edit_history;
pub mod suggestion;
pub mod vote;
