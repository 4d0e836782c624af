//! budget-builder - monthly income and expense budget table
//!
//! This library holds a budget as a three-level tree (income/expense
//! sections, category groups, subcategories) over a growing axis of month
//! columns, and derives the subtotal, total, profit/loss and running closing
//! balance rows from it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, months and the budget tree
//! - `services`: The budget model's mutations and aggregates
//! - `reports`: Aggregate rows gathered for display and export
//! - `config`: Configuration and path management
//! - `storage`: JSON workbook storage layer
//! - `audit`: Audit logging of table edits
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `budget` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```
//! use budget_builder::services::BudgetModel;
//!
//! let mut model = BudgetModel::seed();
//! model.append_month_range(Some("2024-03"), Some("2024-04"));
//! assert_eq!(model.months().len(), 4);
//! assert_eq!(model.closing_balance(1).to_string(), "1720.00");
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
