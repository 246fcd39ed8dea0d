//! Static entity catalogs
//!
//! Category, status, and payment-method reference data. The catalogs are
//! fixed at compile time; lookups for unknown ids fall back to
//! "Desconhecido" and the neutral grey, matching the dashboard's display
//! rules.

use serde::Serialize;

use crate::model::{TransactionStatus, TransactionType};

/// A category in one of the two per-type catalogs
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
}

/// Income categories (dues, enrollment, assessments, ...)
pub const INCOME_CATEGORIES: &[Category] = &[
    Category {
        id: 1,
        name: "Mensalidade",
        description: "Pagamentos de mensalidade dos alunos",
    },
    Category {
        id: 2,
        name: "Matrícula",
        description: "Taxas de matrícula de novos alunos",
    },
    Category {
        id: 3,
        name: "Avaliação Física",
        description: "Pagamentos de avaliações físicas",
    },
    Category {
        id: 4,
        name: "Personal Trainer",
        description: "Sessões de personal trainer",
    },
    Category {
        id: 5,
        name: "Venda de Produtos",
        description: "Venda de suplementos, roupas e acessórios",
    },
    Category {
        id: 6,
        name: "Outros",
        description: "Outras receitas",
    },
];

/// Expense categories (payroll, rent, equipment, ...)
pub const EXPENSE_CATEGORIES: &[Category] = &[
    Category {
        id: 1,
        name: "Salários",
        description: "Pagamentos de funcionários e instrutores",
    },
    Category {
        id: 2,
        name: "Aluguel",
        description: "Aluguel do espaço físico",
    },
    Category {
        id: 3,
        name: "Equipamentos",
        description: "Compra e manutenção de equipamentos",
    },
    Category {
        id: 4,
        name: "Serviços",
        description: "Água, luz, internet, etc.",
    },
    Category {
        id: 5,
        name: "Marketing",
        description: "Publicidade e promoções",
    },
    Category {
        id: 6,
        name: "Limpeza",
        description: "Materiais e serviços de limpeza",
    },
    Category {
        id: 7,
        name: "Impostos",
        description: "Impostos e taxas",
    },
    Category {
        id: 8,
        name: "Seguros",
        description: "Seguros do espaço e equipamentos",
    },
    Category {
        id: 9,
        name: "Suprimentos",
        description: "Materiais de escritório e outros suprimentos",
    },
    Category {
        id: 10,
        name: "Outros",
        description: "Outras despesas",
    },
];

/// Fallback color for unknown statuses (the cancelled grey)
pub const FALLBACK_COLOR: &str = "#9E9E9E";

/// Name shown for any unknown catalog id
pub const UNKNOWN_NAME: &str = "Desconhecido";

/// The catalog for a transaction type
pub fn categories(kind: TransactionType) -> &'static [Category] {
    match kind {
        TransactionType::Income => INCOME_CATEGORIES,
        TransactionType::Expense => EXPENSE_CATEGORIES,
    }
}

/// Look up a category name, `None` for unknown ids
pub fn category_name(kind: TransactionType, id: u32) -> Option<&'static str> {
    categories(kind).iter().find(|c| c.id == id).map(|c| c.name)
}

/// Display name for a category, falling back for unknown ids
pub fn category_display_name(kind: TransactionType, id: u32) -> &'static str {
    category_name(kind, id).unwrap_or(UNKNOWN_NAME)
}

/// pt-BR display name for a status
pub fn status_name(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Pending => "Pendente",
        TransactionStatus::Paid => "Pago",
        TransactionStatus::Overdue => "Atrasado",
        TransactionStatus::Cancelled => "Cancelado",
    }
}

/// UI color for a status
pub fn status_color(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Pending => "#FFA726",
        TransactionStatus::Paid => "#66BB6A",
        TransactionStatus::Overdue => "#EF5350",
        TransactionStatus::Cancelled => FALLBACK_COLOR,
    }
}

/// pt-BR display name for a payment method
pub fn payment_method_name(method: crate::model::PaymentMethod) -> &'static str {
    use crate::model::PaymentMethod::*;
    match method {
        Cash => "Dinheiro",
        CreditCard => "Cartão de Crédito",
        DebitCard => "Cartão de Débito",
        BankTransfer => "Transferência Bancária",
        Pix => "PIX",
        Boleto => "Boleto",
    }
}

// ==================== Tests ====================
