//! Transaction data model
//!
//! Core types shared by the store, filter, report, and billing modules.
//! Amounts are `Decimal` throughout; dates are `NaiveDate`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::{CoreError, CoreResult};

/// Transaction direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in (dues, day passes, product sales)
    Income,
    /// Money going out (salaries, rent, equipment)
    Expense,
}

impl std::str::FromStr for TransactionType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(format!("Invalid transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "income"),
            TransactionType::Expense => write!(f, "expense"),
        }
    }
}

/// Transaction lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Awaiting payment, due date not necessarily passed
    Pending,
    /// Settled
    Paid,
    /// Awaiting payment past the due date
    Overdue,
    /// Voided, excluded from receivable totals
    Cancelled,
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TransactionStatus::Pending),
            "paid" => Ok(TransactionStatus::Paid),
            "overdue" => Ok(TransactionStatus::Overdue),
            "cancelled" => Ok(TransactionStatus::Cancelled),
            _ => Err(format!("Invalid transaction status: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Pending => write!(f, "pending"),
            TransactionStatus::Paid => write!(f, "paid"),
            TransactionStatus::Overdue => write!(f, "overdue"),
            TransactionStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Payment method used to settle a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    BankTransfer,
    Pix,
    Boleto,
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "debit_card" => Ok(PaymentMethod::DebitCard),
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            "pix" => Ok(PaymentMethod::Pix),
            "boleto" => Ok(PaymentMethod::Boleto),
            _ => Err(format!("Invalid payment method: {}", s)),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::CreditCard => write!(f, "credit_card"),
            PaymentMethod::DebitCard => write!(f, "debit_card"),
            PaymentMethod::BankTransfer => write!(f, "bank_transfer"),
            PaymentMethod::Pix => write!(f, "pix"),
            PaymentMethod::Boleto => write!(f, "boleto"),
        }
    }
}

/// Kind of person a transaction relates to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    Student,
    Employee,
    Supplier,
}

impl std::fmt::Display for PersonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersonKind::Student => write!(f, "student"),
            PersonKind::Employee => write!(f, "employee"),
            PersonKind::Supplier => write!(f, "supplier"),
        }
    }
}

/// The student, employee, or supplier a transaction is tied to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedPerson {
    pub id: u32,
    pub name: String,
    pub kind: PersonKind,
}

impl RelatedPerson {
    pub fn student(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: PersonKind::Student,
        }
    }

    pub fn employee(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: PersonKind::Employee,
        }
    }

    pub fn supplier(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: PersonKind::Supplier,
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the store
    pub id: u64,
    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Short description shown in listings
    pub description: String,
    /// Positive amount
    pub amount: Decimal,
    /// Date the payment was made (set when status becomes paid)
    pub paid_date: Option<NaiveDate>,
    /// Date the payment falls due
    pub due_date: NaiveDate,
    /// Category id within the type's catalog
    pub category: u32,
    /// Lifecycle status
    pub status: TransactionStatus,
    /// How it was or will be settled
    pub payment_method: Option<PaymentMethod>,
    /// Who it relates to
    pub related_person: RelatedPerson,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl Transaction {
    /// True when the row still counts toward what is owed
    pub fn is_outstanding(&self) -> bool {
        matches!(
            self.status,
            TransactionStatus::Pending | TransactionStatus::Overdue
        )
    }
}

/// Incoming edit-form payload, validated into a `Transaction`
///
/// Numeric and date fields are optional here so the save boundary can
/// report "missing" separately from "invalid".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionDraft {
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    #[serde(default)]
    pub description: String,
    pub amount: Option<Decimal>,
    pub paid_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub category: Option<u32>,
    pub status: Option<TransactionStatus>,
    pub payment_method: Option<PaymentMethod>,
    pub related_person: Option<RelatedPerson>,
    #[serde(default)]
    pub notes: String,
}

impl TransactionDraft {
    /// Validate the draft and produce a transaction with id 0.
    ///
    /// The store assigns the real id on insert. Every check reports the
    /// offending field so the API can surface per-field errors.
    pub fn validate(self) -> CoreResult<Transaction> {
        let kind = self.kind.ok_or_else(|| CoreError::ValidationError {
            field: "type".to_string(),
            message: "Transaction type is required".to_string(),
        })?;

        if self.description.trim().is_empty() {
            return Err(CoreError::ValidationError {
                field: "description".to_string(),
                message: "Description is required".to_string(),
            });
        }

        let amount = self.amount.ok_or_else(|| CoreError::ValidationError {
            field: "amount".to_string(),
            message: "Amount is required".to_string(),
        })?;
        if amount <= Decimal::ZERO {
            return Err(CoreError::ValidationError {
                field: "amount".to_string(),
                message: "Amount must be greater than zero".to_string(),
            });
        }

        let due_date = self.due_date.ok_or_else(|| CoreError::ValidationError {
            field: "due_date".to_string(),
            message: "Due date is required".to_string(),
        })?;

        let category = self.category.ok_or_else(|| CoreError::ValidationError {
            field: "category".to_string(),
            message: "Category is required".to_string(),
        })?;
        if catalog::category_name(kind, category).is_none() {
            return Err(CoreError::UnknownCategory {
                category,
                kind: kind.to_string(),
            });
        }

        let status = self.status.unwrap_or(TransactionStatus::Pending);

        // A paid row must say when and how it was paid
        if status == TransactionStatus::Paid {
            if self.paid_date.is_none() {
                return Err(CoreError::ValidationError {
                    field: "paid_date".to_string(),
                    message: "Paid transactions require a payment date".to_string(),
                });
            }
            if self.payment_method.is_none() {
                return Err(CoreError::ValidationError {
                    field: "payment_method".to_string(),
                    message: "Paid transactions require a payment method".to_string(),
                });
            }
        }

        let related_person = self
            .related_person
            .ok_or_else(|| CoreError::ValidationError {
                field: "related_person".to_string(),
                message: "Related person is required".to_string(),
            })?;

        Ok(Transaction {
            id: 0,
            kind,
            description: self.description.trim().to_string(),
            amount,
            paid_date: self.paid_date,
            due_date,
            category,
            status,
            payment_method: self.payment_method,
            related_person,
            notes: self.notes,
        })
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TransactionDraft {
        TransactionDraft {
            kind: Some(TransactionType::Income),
            description: "Mensalidade Junho".to_string(),
            amount: Some(Decimal::new(12000, 2)),
            paid_date: None,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 10),
            category: Some(1),
            status: Some(TransactionStatus::Pending),
            payment_method: None,
            related_person: Some(RelatedPerson::student(101, "João Silva")),
            notes: String::new(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let tx = draft().validate().unwrap();
        assert_eq!(tx.id, 0);
        assert_eq!(tx.status, TransactionStatus::Pending);
        assert_eq!(tx.amount, Decimal::new(12000, 2));
    }

    #[test]
    fn test_empty_description_rejected() {
        let mut d = draft();
        d.description = "   ".to_string();
        let err = d.validate().unwrap_err();
        assert!(matches!(err, CoreError::ValidationError { ref field, .. } if field == "description"));
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let mut d = draft();
        d.amount = Some(Decimal::ZERO);
        assert!(d.validate().is_err());

        let mut d = draft();
        d.amount = Some(Decimal::new(-100, 2));
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_missing_due_date_rejected() {
        let mut d = draft();
        d.due_date = None;
        let err = d.validate().unwrap_err();
        assert!(matches!(err, CoreError::ValidationError { ref field, .. } if field == "due_date"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut d = draft();
        d.category = Some(99);
        assert!(matches!(
            d.validate().unwrap_err(),
            CoreError::UnknownCategory { category: 99, .. }
        ));
    }

    #[test]
    fn test_category_validated_per_type() {
        // 7 exists for expenses but not for income
        let mut d = draft();
        d.category = Some(7);
        assert!(d.validate().is_err());

        let mut d = draft();
        d.kind = Some(TransactionType::Expense);
        d.category = Some(7);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_paid_requires_date_and_method() {
        let mut d = draft();
        d.status = Some(TransactionStatus::Paid);
        let err = d.clone().validate().unwrap_err();
        assert!(matches!(err, CoreError::ValidationError { ref field, .. } if field == "paid_date"));

        d.paid_date = NaiveDate::from_ymd_opt(2024, 6, 8);
        let err = d.clone().validate().unwrap_err();
        assert!(
            matches!(err, CoreError::ValidationError { ref field, .. } if field == "payment_method")
        );

        d.payment_method = Some(PaymentMethod::Pix);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_enum_round_trips() {
        assert_eq!(
            "income".parse::<TransactionType>().unwrap(),
            TransactionType::Income
        );
        assert_eq!(
            "overdue".parse::<TransactionStatus>().unwrap(),
            TransactionStatus::Overdue
        );
        assert_eq!(
            "bank_transfer".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::BankTransfer
        );
        assert_eq!(PaymentMethod::Pix.to_string(), "pix");
        assert!("wire".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_serde_field_names() {
        let tx = draft().validate().unwrap();
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "income");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["related_person"]["kind"], "student");
    }
}
