pub mod expense;
pub mod income;
