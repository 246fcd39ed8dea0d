//! Route modules for the API server
//!
//! All routes are organized into modules:
//! - transactions: Transaction CRUD, filtering, status changes
//! - reports: Income/expense and delinquency reports
//! - billing: Monthly dues generation
//! - settings: Configuration display

pub mod billing;
pub mod reports;
pub mod settings;
pub mod transactions;
