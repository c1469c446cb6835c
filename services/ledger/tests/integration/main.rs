mod expense_test;
mod helpers;
