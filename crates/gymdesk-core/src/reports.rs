//! Aggregation engine
//!
//! Pure read-only report functions over transaction slices. Nothing in
//! here mutates the store or depends on wall-clock time; where "today"
//! matters it is a parameter.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use gymdesk_utils::month_label;

use crate::model::{Transaction, TransactionStatus, TransactionType};
use crate::roster::{placeholder_contact, StudentDirectory};

// ==================== Monthly income/expense ====================

/// Paid income and expense per calendar month of one year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTotals {
    pub year: i32,
    pub income: [Decimal; 12],
    pub expense: [Decimal; 12],
}

impl MonthlyTotals {
    pub fn total_income(&self) -> Decimal {
        self.income.iter().copied().sum()
    }

    pub fn total_expense(&self) -> Decimal {
        self.expense.iter().copied().sum()
    }

    pub fn net(&self) -> Decimal {
        self.total_income() - self.total_expense()
    }
}

/// Bucket paid transactions by payment month for the given year.
///
/// Unpaid rows have no payment date and never appear here, regardless
/// of their due dates.
pub fn monthly_totals(txs: &[Transaction], year: i32) -> MonthlyTotals {
    let mut income = [Decimal::ZERO; 12];
    let mut expense = [Decimal::ZERO; 12];

    for tx in txs {
        if tx.status != TransactionStatus::Paid {
            continue;
        }
        let Some(paid) = tx.paid_date else { continue };
        if paid.year() != year {
            continue;
        }
        let idx = paid.month0() as usize;
        match tx.kind {
            TransactionType::Income => income[idx] += tx.amount,
            TransactionType::Expense => expense[idx] += tx.amount,
        }
    }

    MonthlyTotals {
        year,
        income,
        expense,
    }
}

// ==================== Delinquency summary ====================

/// One bar of the by-month chart, labeled `MM/YYYY`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub label: String,
    pub amount: Decimal,
}

/// Outstanding income overview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelinquencySummary {
    /// Sum over all outstanding income rows
    pub total: Decimal,
    /// Number of outstanding income rows
    pub count: usize,
    /// Pending share of the total
    pub pending_amount: Decimal,
    /// Overdue share of the total
    pub overdue_amount: Decimal,
    /// Totals grouped by due month, in first-seen order
    pub by_month: Vec<MonthBucket>,
}

/// Summarize income rows that are still pending or overdue
pub fn delinquency_summary(txs: &[Transaction]) -> DelinquencySummary {
    let mut total = Decimal::ZERO;
    let mut count = 0;
    let mut pending_amount = Decimal::ZERO;
    let mut overdue_amount = Decimal::ZERO;
    let mut by_month: Vec<MonthBucket> = Vec::new();

    for tx in txs {
        if tx.kind != TransactionType::Income || !tx.is_outstanding() {
            continue;
        }

        total += tx.amount;
        count += 1;
        match tx.status {
            TransactionStatus::Pending => pending_amount += tx.amount,
            TransactionStatus::Overdue => overdue_amount += tx.amount,
            _ => unreachable!("outstanding rows are pending or overdue"),
        }

        let label = month_label(tx.due_date.month(), tx.due_date.year());
        match by_month.iter_mut().find(|b| b.label == label) {
            Some(bucket) => bucket.amount += tx.amount,
            None => by_month.push(MonthBucket {
                label,
                amount: tx.amount,
            }),
        }
    }

    DelinquencySummary {
        total,
        count,
        pending_amount,
        overdue_amount,
        by_month,
    }
}

// ==================== Detailed delinquency ====================

/// One outstanding dues row inside a debtor group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtorItem {
    pub transaction_id: u64,
    pub description: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: TransactionStatus,
    /// Days past due for overdue rows, 0 otherwise
    pub days_late: i64,
}

/// A member with outstanding dues, with contact data for follow-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtorRollup {
    pub person_id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub transactions: Vec<DebtorItem>,
    pub total_amount: Decimal,
    pub max_days_late: i64,
}

/// Header cards of the detailed report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollupSummary {
    pub debtor_count: usize,
    pub outstanding_total: Decimal,
    pub average_per_debtor: Decimal,
}

/// Group outstanding dues rows by member, in first-seen order.
///
/// Only the dues category counts; other outstanding income (enrollment,
/// product sales) is not delinquency. Contact data comes from the
/// directory, with a deterministic placeholder for unknown members.
pub fn debtor_rollups(
    txs: &[Transaction],
    directory: &dyn StudentDirectory,
    dues_category: u32,
    today: NaiveDate,
) -> Vec<DebtorRollup> {
    let mut rollups: Vec<DebtorRollup> = Vec::new();

    for tx in txs {
        if tx.kind != TransactionType::Income
            || !tx.is_outstanding()
            || tx.category != dues_category
        {
            continue;
        }

        let days_late = if tx.status == TransactionStatus::Overdue {
            (today - tx.due_date).num_days().max(0)
        } else {
            0
        };

        let person = &tx.related_person;
        let rollup = match rollups.iter_mut().find(|r| r.person_id == person.id) {
            Some(r) => r,
            None => {
                let contact = directory
                    .contact(person.id)
                    .unwrap_or_else(|| placeholder_contact(person.id, &person.name));
                rollups.push(DebtorRollup {
                    person_id: person.id,
                    name: person.name.clone(),
                    email: contact.email,
                    phone: contact.phone,
                    transactions: Vec::new(),
                    total_amount: Decimal::ZERO,
                    max_days_late: 0,
                });
                rollups.last_mut().expect("just pushed")
            }
        };

        rollup.transactions.push(DebtorItem {
            transaction_id: tx.id,
            description: tx.description.clone(),
            amount: tx.amount,
            due_date: tx.due_date,
            status: tx.status,
            days_late,
        });
        rollup.total_amount += tx.amount;
        rollup.max_days_late = rollup.max_days_late.max(days_late);
    }

    rollups
}

/// Narrow rollups by a case-insensitive search over name, email, phone
pub fn filter_rollups(rollups: Vec<DebtorRollup>, term: &str) -> Vec<DebtorRollup> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return rollups;
    }
    rollups
        .into_iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&term)
                || r.email.to_lowercase().contains(&term)
                || r.phone.to_lowercase().contains(&term)
        })
        .collect()
}

/// Header summary over a rollup set
pub fn rollup_summary(rollups: &[DebtorRollup]) -> RollupSummary {
    let outstanding_total: Decimal = rollups.iter().map(|r| r.total_amount).sum();
    let debtor_count = rollups.len();
    let average_per_debtor = if debtor_count > 0 {
        (outstanding_total / Decimal::from(debtor_count as u64)).round_dp(2)
    } else {
        Decimal::ZERO
    };
    RollupSummary {
        debtor_count,
        outstanding_total,
        average_per_debtor,
    }
}

// ==================== Tests ====================
