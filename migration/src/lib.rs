pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_suggestion_table;
mod m20260301_000002_create_vote_table;
mod m20260308_000003_create_edit_history_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_suggestion_table::Migration),
            Box::new(m20260301_000002_create_vote_table::Migration),
            Box::new(m20260308_000003_create_edit_history_table::Migration),
        ]
    }
}
