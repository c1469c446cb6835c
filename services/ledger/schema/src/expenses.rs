use sea_orm::entity::prelude::*;

/// Expense record, always scoped to its owner.
///
/// `category` is stored as the snake_case string the domain enum serializes
/// to; unknown values read back as `Other`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub user_id: Uuid,
    pub description: String,
    pub amount: f64,
    pub date: chrono::NaiveDate,
    pub category: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
