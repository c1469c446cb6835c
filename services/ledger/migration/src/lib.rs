use sea_orm_migration::prelude::*;

mod m20260829_000001_create_expenses;
mod m20260829_000002_create_incomes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260829_000001_create_expenses::Migration),
            Box::new(m20260829_000002_create_incomes::Migration),
        ]
    }
}
