//! Audit trail for budget-builder
//!
//! Every table edit made through the CLI (month columns, groups,
//! subcategories, cells) is appended to `audit.log` as one JSON object per
//! line, with the affected row before and/or after the change.
//!
//! ```rust,ignore
//! use budget_builder::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::create(
//!     EntityType::Subcategory,
//!     "0/1/2",
//!     Some("New Subcategory".to_string()),
//!     &leaf,
//! ))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
