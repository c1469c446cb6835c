pub mod expenses;
pub mod incomes;
