//! Transaction filter engine
//!
//! A composable filter where every criterion is optional and all active
//! criteria must hold. Filtering never mutates the store; results are
//! owned clones.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{Transaction, TransactionStatus, TransactionType};

/// Category criterion, either the whole catalog or one id.
///
/// Form inputs arrive as strings ("all", "3"), so parsing owns the
/// string-to-id coercion instead of scattering it through callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySelector {
    #[default]
    All,
    #[serde(untagged)]
    Id(u32),
}

impl CategorySelector {
    /// Parse a form value: "all" (any case) or a numeric category id
    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(CategorySelector::All);
        }
        trimmed
            .parse::<u32>()
            .map(CategorySelector::Id)
            .map_err(|_| format!("Invalid category selector: {}", s))
    }

    fn matches(&self, category: u32) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Id(id) => *id == category,
        }
    }
}

/// Conjunctive transaction filter; `Default` matches everything
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// Restrict to one transaction type
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    /// Restrict to one status
    pub status: Option<TransactionStatus>,
    /// Exclude rows due strictly before this date
    pub date_from: Option<NaiveDate>,
    /// Exclude rows due strictly after this date
    pub date_to: Option<NaiveDate>,
    /// Category criterion within the type's catalog
    #[serde(default)]
    pub category: CategorySelector,
    /// Inclusive lower amount bound
    pub amount_min: Option<Decimal>,
    /// Inclusive upper amount bound
    pub amount_max: Option<Decimal>,
    /// Case-insensitive substring over description, person name, notes
    pub search: Option<String>,
    /// Restrict to statuses that still count as owed
    #[serde(default)]
    pub statuses: Vec<TransactionStatus>,
}

impl TransactionFilter {
    /// The fixed receivables specialization: open membership dues
    pub fn receivables(dues_category: u32) -> Self {
        Self {
            kind: Some(TransactionType::Income),
            category: CategorySelector::Id(dues_category),
            statuses: vec![TransactionStatus::Pending, TransactionStatus::Overdue],
            ..Default::default()
        }
    }

    /// True when the transaction passes every active criterion
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if tx.kind != kind {
                return false;
            }
        }

        if let Some(status) = self.status {
            if tx.status != status {
                return false;
            }
        }

        if !self.statuses.is_empty() && !self.statuses.contains(&tx.status) {
            return false;
        }

        // Date bounds compare the due date, exclusive outside the range
        if let Some(from) = self.date_from {
            if tx.due_date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if tx.due_date > to {
                return false;
            }
        }

        if !self.category.matches(tx.category) {
            return false;
        }

        if let Some(min) = self.amount_min {
            if tx.amount < min {
                return false;
            }
        }
        if let Some(max) = self.amount_max {
            if tx.amount > max {
                return false;
            }
        }

        if let Some(ref term) = self.search {
            let term = term.to_lowercase();
            if !term.is_empty() {
                let hit = tx.description.to_lowercase().contains(&term)
                    || tx.related_person.name.to_lowercase().contains(&term)
                    || tx.notes.to_lowercase().contains(&term);
                if !hit {
                    return false;
                }
            }
        }

        true
    }
}

// ==================== Tests ====================
