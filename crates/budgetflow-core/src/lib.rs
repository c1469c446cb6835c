//! Service plumbing shared by the BudgetFlow auth and ledger services.
//!
//! Health endpoints, tracing setup, request-id middleware, and serde helpers.
//! Domain logic never lives here.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
