//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let suggestion = factory::create_suggestion(&db).await?;
//!     factory::create_vote(&db, suggestion.id, "42", "up").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let suggestion = factory::suggestion::SuggestionFactory::new(&db)
//!     .author_id("1001")
//!     .content("Add dark mode support")
//!     .thread_id(Some("2002".to_string()))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `suggestion` - Create suggestion entities
//! - `vote` - Create vote entities
//! - `edit_history` - Create edit history entities
//! - `helpers` - Unique id generation

pub mod edit_history;
pub mod helpers;
pub mod suggestion;
pub mod vote;

// Re-export commonly used factory functions for concise usage
pub use edit_history::create_edit_history;
pub use suggestion::{create_suggestion, create_suggestion_with_thread};
pub use vote::create_vote;
