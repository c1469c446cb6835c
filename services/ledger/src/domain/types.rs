use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Expense categories, mirroring the account-book UI's fixed list.
///
/// Stored in the database as the snake_case string; anything unrecognized
/// reads back as `Other` so a widened list never breaks old rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Education,
    Housing,
    Health,
    Leisure,
    Clothing,
    Services,
    #[default]
    Other,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Education => "education",
            Self::Housing => "housing",
            Self::Health => "health",
            Self::Leisure => "leisure",
            Self::Clothing => "clothing",
            Self::Services => "services",
            Self::Other => "other",
        }
    }
}

impl From<&str> for ExpenseCategory {
    fn from(value: &str) -> Self {
        match value {
            "food" => Self::Food,
            "transport" => Self::Transport,
            "education" => Self::Education,
            "housing" => Self::Housing,
            "health" => Self::Health,
            "leisure" => Self::Leisure,
            "clothing" => Self::Clothing,
            "services" => Self::Services,
            _ => Self::Other,
        }
    }
}

/// Income categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeCategory {
    Salary,
    Freelance,
    Investments,
    Gifts,
    Rent,
    AssetSale,
    #[default]
    Other,
}

impl IncomeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Freelance => "freelance",
            Self::Investments => "investments",
            Self::Gifts => "gifts",
            Self::Rent => "rent",
            Self::AssetSale => "asset_sale",
            Self::Other => "other",
        }
    }
}

impl From<&str> for IncomeCategory {
    fn from(value: &str) -> Self {
        match value {
            "salary" => Self::Salary,
            "freelance" => Self::Freelance,
            "investments" => Self::Investments,
            "gifts" => Self::Gifts,
            "rent" => Self::Rent,
            "asset_sale" => Self::AssetSale,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i32,
    pub user_id: Uuid,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: i32,
    pub user_id: Uuid,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: IncomeCategory,
}

/// Fields of an expense the caller controls; the id is assigned on insert
/// and the owner comes from the bearer identity.
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub user_id: Uuid,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
}

#[derive(Debug, Clone)]
pub struct IncomeDraft {
    pub user_id: Uuid,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: IncomeCategory,
}
