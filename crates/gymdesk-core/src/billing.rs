//! Dues generation engine
//!
//! Creates one pending dues transaction per enrolled member for a
//! billing period. Duplicate handling is a policy: `Skip` leaves members
//! who already have dues for the period alone, `Allow` creates another
//! row regardless.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use gymdesk_config::DuplicatePolicy;
use gymdesk_utils::month_label;

use crate::error::{CoreError, CoreResult};
use crate::model::{RelatedPerson, Transaction, TransactionStatus, TransactionType};
use crate::roster::StudentDirectory;
use crate::store::TransactionBook;

/// The month being billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPeriod {
    pub month: u32,
    pub year: i32,
}

impl BillingPeriod {
    pub fn new(month: u32, year: i32) -> CoreResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::InvalidDate {
                message: format!("Month out of range: {}", month),
            });
        }
        Ok(Self { month, year })
    }

    /// The `MM/YYYY` label used in descriptions and notes
    pub fn label(&self) -> String {
        month_label(self.month, self.year)
    }
}

/// Knobs of a generation run, normally sourced from config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    pub dues_category: u32,
    /// Day of the month the dues fall due (1-28)
    pub due_day: u32,
    pub unit_amount: Decimal,
    pub on_duplicate: DuplicatePolicy,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            dues_category: 1,
            due_day: 10,
            unit_amount: Decimal::new(12000, 2),
            on_duplicate: DuplicatePolicy::Skip,
        }
    }
}

/// Result of a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutcome {
    /// Ids of the rows created
    pub generated: Vec<u64>,
    /// Members skipped because dues for the period already existed
    pub skipped: Vec<u32>,
}

/// True when the member already has a dues row due in the period
fn has_dues_for_period(
    book: &TransactionBook,
    person_id: u32,
    dues_category: u32,
    period: BillingPeriod,
) -> bool {
    book.transactions().iter().any(|tx| {
        tx.kind == TransactionType::Income
            && tx.category == dues_category
            && tx.related_person.id == person_id
            && tx.due_date.month() == period.month
            && tx.due_date.year() == period.year
    })
}

/// Generate monthly dues for every roster member.
///
/// Each row comes out pending, unpaid, due on `opts.due_day` of the
/// period. Existing transactions are never modified.
pub fn generate_dues(
    book: &mut TransactionBook,
    roster: &dyn StudentDirectory,
    period: BillingPeriod,
    opts: &GenerateOptions,
) -> CoreResult<GenerateOutcome> {
    let due_date = NaiveDate::from_ymd_opt(period.year, period.month, opts.due_day)
        .ok_or_else(|| CoreError::InvalidDate {
            message: format!(
                "No day {} in {:02}/{}",
                opts.due_day, period.month, period.year
            ),
        })?;

    let label = period.label();
    let mut outcome = GenerateOutcome {
        generated: Vec::new(),
        skipped: Vec::new(),
    };

    for member in roster.members() {
        if opts.on_duplicate == DuplicatePolicy::Skip
            && has_dues_for_period(book, member.id, opts.dues_category, period)
        {
            outcome.skipped.push(member.id);
            continue;
        }

        let id = book.add(Transaction {
            id: 0,
            kind: TransactionType::Income,
            description: format!("Mensalidade {} - {}", label, member.name),
            amount: opts.unit_amount,
            paid_date: None,
            due_date,
            category: opts.dues_category,
            status: TransactionStatus::Pending,
            payment_method: None,
            related_person: RelatedPerson::student(member.id, member.name),
            notes: format!("Mensalidade referente a {}", label),
        });
        outcome.generated.push(id);
    }

    log::info!(
        "generated {} dues rows for {} ({} skipped)",
        outcome.generated.len(),
        label,
        outcome.skipped.len()
    );

    Ok(outcome)
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Contact, RosterMember, StaticRoster};

    fn roster_of(names: &[(u32, &str)]) -> StaticRoster {
        StaticRoster::new(
            names
                .iter()
                .map(|(id, name)| {
                    (
                        RosterMember {
                            id: *id,
                            name: name.to_string(),
                        },
                        Contact {
                            email: format!("{}@email.com", id),
                            phone: "(11) 90000-0000".to_string(),
                        },
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_generate_one_row_per_member() {
        let mut book = TransactionBook::new();
        let roster = roster_of(&[(101, "João Silva"), (102, "Maria Oliveira"), (103, "Pedro Santos")]);
        let period = BillingPeriod::new(6, 2024).unwrap();

        let outcome =
            generate_dues(&mut book, &roster, period, &GenerateOptions::default()).unwrap();

        assert_eq!(outcome.generated.len(), 3);
        assert!(outcome.skipped.is_empty());
        assert_eq!(book.len(), 3);

        for id in &outcome.generated {
            let tx = book.get(*id).unwrap();
            assert_eq!(tx.kind, TransactionType::Income);
            assert_eq!(tx.category, 1);
            assert_eq!(tx.status, TransactionStatus::Pending);
            assert_eq!(tx.paid_date, None);
            assert_eq!(tx.payment_method, None);
            assert_eq!(tx.amount, Decimal::new(12000, 2));
            assert_eq!(tx.due_date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
            assert_eq!(tx.notes, "Mensalidade referente a 06/2024");
        }

        let first = book.get(outcome.generated[0]).unwrap();
        assert_eq!(first.description, "Mensalidade 06/2024 - João Silva");
    }

    #[test]
    fn test_generate_leaves_existing_rows_untouched() {
        let mut book = TransactionBook::seeded();
        let before: Vec<u64> = book.transactions().iter().map(|t| t.id).collect();
        let roster = roster_of(&[(150, "Bruno Lima")]);
        let period = BillingPeriod::new(6, 2024).unwrap();

        generate_dues(&mut book, &roster, period, &GenerateOptions::default()).unwrap();

        for id in before {
            assert!(book.get(id).is_some());
        }
        assert_eq!(book.len(), 11);
    }

    #[test]
    fn test_skip_policy_detects_existing_dues() {
        let mut book = TransactionBook::new();
        let roster = roster_of(&[(101, "João Silva"), (102, "Maria Oliveira")]);
        let period = BillingPeriod::new(6, 2024).unwrap();
        let opts = GenerateOptions::default();

        let first = generate_dues(&mut book, &roster, period, &opts).unwrap();
        assert_eq!(first.generated.len(), 2);

        let second = generate_dues(&mut book, &roster, period, &opts).unwrap();
        assert!(second.generated.is_empty());
        assert_eq!(second.skipped, vec![101, 102]);
        assert_eq!(book.len(), 2);

        // A different month bills normally
        let july = BillingPeriod::new(7, 2024).unwrap();
        let third = generate_dues(&mut book, &roster, july, &opts).unwrap();
        assert_eq!(third.generated.len(), 2);
    }

    #[test]
    fn test_allow_policy_double_generates() {
        let mut book = TransactionBook::new();
        let roster = roster_of(&[(101, "João Silva")]);
        let period = BillingPeriod::new(6, 2024).unwrap();
        let opts = GenerateOptions {
            on_duplicate: DuplicatePolicy::Allow,
            ..Default::default()
        };

        generate_dues(&mut book, &roster, period, &opts).unwrap();
        generate_dues(&mut book, &roster, period, &opts).unwrap();
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_invalid_period_rejected() {
        assert!(BillingPeriod::new(13, 2024).is_err());
        assert!(BillingPeriod::new(0, 2024).is_err());
    }

    #[test]
    fn test_custom_amount_and_due_day() {
        let mut book = TransactionBook::new();
        let roster = roster_of(&[(101, "João Silva")]);
        let period = BillingPeriod::new(2, 2024).unwrap();
        let opts = GenerateOptions {
            due_day: 5,
            unit_amount: Decimal::new(15000, 2),
            ..Default::default()
        };

        let outcome = generate_dues(&mut book, &roster, period, &opts).unwrap();
        let tx = book.get(outcome.generated[0]).unwrap();
        assert_eq!(tx.due_date, NaiveDate::from_ymd_opt(2024, 2, 5).unwrap());
        assert_eq!(tx.amount, Decimal::new(15000, 2));
    }
}
