//! Auth types shared across BudgetFlow services.
//!
//! Provides JWT validation, cookie builders, and the `Identity` extractor
//! the ledger service uses to scope requests to the authenticated user.

pub mod cookie;
pub mod identity;
pub mod token;
