//! Heuristic statement classification.
//!
//! Two ordered rule lists live here:
//! - [`rules::CLOUD_RULES`] - header-only rules for tables from the cloud backend;
//!   unmatched tables default to profit-and-loss.
//! - [`rules::LOCAL_RULES`] - header then page-text rules for the local backend;
//!   unmatched tables are dropped.

mod classifier;
pub mod rules;


pub use classifier::{StatementClassifier, route_page_table};
pub use rules::{Condition, Outcome, Rule, RuleInput};
