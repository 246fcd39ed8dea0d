//! In-memory transaction store
//!
//! `TransactionBook` owns the full transaction list. All mutation goes
//! through it so id assignment and status bookkeeping stay in one place.
//! The book itself is synchronous; callers that share it across tasks
//! wrap it in a lock.

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult};
use crate::filter::TransactionFilter;
use crate::model::{Transaction, TransactionDraft, TransactionStatus};
use crate::seed;

/// The transaction store
#[derive(Debug, Default)]
pub struct TransactionBook {
    transactions: Vec<Transaction>,
}

impl TransactionBook {
    /// Create an empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a book pre-loaded with the sample dataset
    pub fn seeded() -> Self {
        Self {
            transactions: seed::sample_transactions(),
        }
    }

    /// Add a transaction, assigning the next id when the given one is 0.
    ///
    /// Ids are `max(existing) + 1`, so deleting the newest row frees its
    /// id for reuse while older ids stay stable.
    pub fn add(&mut self, mut tx: Transaction) -> u64 {
        if tx.id == 0 {
            tx.id = self
                .transactions
                .iter()
                .map(|t| t.id)
                .max()
                .unwrap_or(0)
                + 1;
        }
        let id = tx.id;
        self.transactions.push(tx);
        log::debug!("added transaction {}", id);
        id
    }

    /// Validate a draft and add the resulting transaction
    pub fn insert(&mut self, draft: TransactionDraft) -> CoreResult<u64> {
        let tx = draft.validate()?;
        Ok(self.add(tx))
    }

    /// Replace the transaction with the given id
    pub fn update(&mut self, id: u64, mut tx: Transaction) -> CoreResult<()> {
        let slot = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(CoreError::TransactionNotFound { id })?;
        tx.id = id;
        *slot = tx;
        Ok(())
    }

    /// Remove the transaction with the given id
    pub fn remove(&mut self, id: u64) -> CoreResult<()> {
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(CoreError::TransactionNotFound { id })?;
        self.transactions.remove(pos);
        Ok(())
    }

    /// Change a transaction's status.
    ///
    /// Moving to paid records `today` as the payment date. Any other
    /// transition leaves the payment date and method as entered.
    pub fn set_status(
        &mut self,
        id: u64,
        status: TransactionStatus,
        today: NaiveDate,
    ) -> CoreResult<()> {
        let tx = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(CoreError::TransactionNotFound { id })?;
        tx.status = status;
        if status == TransactionStatus::Paid {
            tx.paid_date = Some(today);
        }
        Ok(())
    }

    /// Get a transaction by id
    pub fn get(&self, id: u64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// All transactions
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transactions matching a filter, as owned clones
    pub fn filtered(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }

    /// Open membership dues: income rows in the dues category that are
    /// still pending or overdue
    pub fn receivables(&self, dues_category: u32) -> Vec<Transaction> {
        self.filtered(&TransactionFilter::receivables(dues_category))
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

// ==================== Tests ====================
