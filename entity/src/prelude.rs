pub use super::edit_history::Entity as EditHistory;
pub use super::suggestion::Entity as Suggestion;
pub use super::vote::Entity as Vote;
