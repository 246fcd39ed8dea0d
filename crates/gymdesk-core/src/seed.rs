//! Sample dataset
//!
//! The ten-row October 2023 demo dataset the dashboard ships with. Used
//! to seed the book on startup and as a fixture in tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::model::{
    PaymentMethod, RelatedPerson, Transaction, TransactionStatus, TransactionType,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// The demo transactions, ids 1 through 10
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            kind: TransactionType::Income,
            description: "Mensalidade - João Silva".to_string(),
            amount: Decimal::new(12000, 2),
            paid_date: Some(date(2023, 10, 5)),
            due_date: date(2023, 10, 10),
            category: 1,
            status: TransactionStatus::Paid,
            payment_method: Some(PaymentMethod::CreditCard),
            related_person: RelatedPerson::student(101, "João Silva"),
            notes: "Pagamento antecipado".to_string(),
        },
        Transaction {
            id: 2,
            kind: TransactionType::Income,
            description: "Matrícula - Maria Oliveira".to_string(),
            amount: Decimal::new(8000, 2),
            paid_date: Some(date(2023, 10, 3)),
            due_date: date(2023, 10, 3),
            category: 2,
            status: TransactionStatus::Paid,
            payment_method: Some(PaymentMethod::Pix),
            related_person: RelatedPerson::student(102, "Maria Oliveira"),
            notes: String::new(),
        },
        Transaction {
            id: 3,
            kind: TransactionType::Expense,
            description: "Conta de Energia".to_string(),
            amount: Decimal::new(45000, 2),
            paid_date: None,
            due_date: date(2023, 10, 15),
            category: 4,
            status: TransactionStatus::Pending,
            payment_method: None,
            related_person: RelatedPerson::supplier(201, "Companhia de Energia"),
            notes: "Referente ao mês de setembro".to_string(),
        },
        Transaction {
            id: 4,
            kind: TransactionType::Expense,
            description: "Salário - Instrutor Carlos".to_string(),
            amount: Decimal::new(200000, 2),
            paid_date: None,
            due_date: date(2023, 10, 5),
            category: 1,
            status: TransactionStatus::Overdue,
            payment_method: None,
            related_person: RelatedPerson::employee(301, "Carlos Mendes"),
            notes: "Salário mensal".to_string(),
        },
        Transaction {
            id: 5,
            kind: TransactionType::Income,
            description: "Avaliação Física - Pedro Santos".to_string(),
            amount: Decimal::new(5000, 2),
            paid_date: Some(date(2023, 10, 1)),
            due_date: date(2023, 10, 1),
            category: 3,
            status: TransactionStatus::Paid,
            payment_method: Some(PaymentMethod::Cash),
            related_person: RelatedPerson::student(103, "Pedro Santos"),
            notes: String::new(),
        },
        Transaction {
            id: 6,
            kind: TransactionType::Expense,
            description: "Manutenção Esteira".to_string(),
            amount: Decimal::new(30000, 2),
            paid_date: Some(date(2023, 9, 28)),
            due_date: date(2023, 9, 28),
            category: 3,
            status: TransactionStatus::Paid,
            payment_method: Some(PaymentMethod::DebitCard),
            related_person: RelatedPerson::supplier(202, "Técnico Equipamentos"),
            notes: "Troca de peças e manutenção preventiva".to_string(),
        },
        Transaction {
            id: 7,
            kind: TransactionType::Income,
            description: "Mensalidade - Ana Costa".to_string(),
            amount: Decimal::new(12000, 2),
            paid_date: None,
            due_date: date(2023, 10, 12),
            category: 1,
            status: TransactionStatus::Pending,
            payment_method: None,
            related_person: RelatedPerson::student(104, "Ana Costa"),
            notes: String::new(),
        },
        Transaction {
            id: 8,
            kind: TransactionType::Expense,
            description: "Material de Limpeza".to_string(),
            amount: Decimal::new(18000, 2),
            paid_date: Some(date(2023, 10, 2)),
            due_date: date(2023, 10, 2),
            category: 6,
            status: TransactionStatus::Paid,
            payment_method: Some(PaymentMethod::CreditCard),
            related_person: RelatedPerson::supplier(203, "Distribuidora Limpeza"),
            notes: "Compra mensal".to_string(),
        },
        Transaction {
            id: 9,
            kind: TransactionType::Income,
            description: "Venda de Suplementos".to_string(),
            amount: Decimal::new(7500, 2),
            paid_date: Some(date(2023, 10, 4)),
            due_date: date(2023, 10, 4),
            category: 5,
            status: TransactionStatus::Paid,
            payment_method: Some(PaymentMethod::Cash),
            related_person: RelatedPerson::student(105, "Ricardo Gomes"),
            notes: "Whey Protein 500g".to_string(),
        },
        Transaction {
            id: 10,
            kind: TransactionType::Expense,
            description: "Aluguel".to_string(),
            amount: Decimal::new(350000, 2),
            paid_date: None,
            due_date: date(2023, 10, 10),
            category: 2,
            status: TransactionStatus::Pending,
            payment_method: None,
            related_person: RelatedPerson::supplier(204, "Imobiliária Central"),
            notes: "Referente ao mês de outubro".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let txs = sample_transactions();
        assert_eq!(txs.len(), 10);
        assert_eq!(txs.iter().map(|t| t.id).max(), Some(10));

        let income = txs
            .iter()
            .filter(|t| t.kind == TransactionType::Income)
            .count();
        assert_eq!(income, 5);
    }

    #[test]
    fn test_seed_paid_rows_have_dates() {
        for tx in sample_transactions() {
            if tx.status == TransactionStatus::Paid {
                assert!(tx.paid_date.is_some(), "paid row {} missing date", tx.id);
                assert!(tx.payment_method.is_some());
            }
        }
    }
}
