//! Core transaction processing and business logic
//!
//! The financial heart of the gym administration service: the entity
//! catalogs, the in-memory transaction store, the filter engine, the
//! report aggregations, and the monthly dues generator. Everything here
//! is synchronous and deterministic; the API layer owns locking and
//! wall-clock time.

pub mod billing;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod model;
pub mod reports;
pub mod roster;
pub mod seed;
pub mod store;

pub use billing::{generate_dues, BillingPeriod, GenerateOptions, GenerateOutcome};
pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity};
pub use filter::{CategorySelector, TransactionFilter};
pub use model::{
    PaymentMethod, PersonKind, RelatedPerson, Transaction, TransactionDraft, TransactionStatus,
    TransactionType,
};
pub use reports::{
    debtor_rollups, delinquency_summary, filter_rollups, monthly_totals, rollup_summary,
    DebtorRollup, DelinquencySummary, MonthlyTotals, RollupSummary,
};
pub use roster::{Contact, RosterMember, StaticRoster, StudentDirectory};
pub use store::TransactionBook;
