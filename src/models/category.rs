//! Transaction categories
//!
//! The category set is closed. Expense and income categories are disjoint,
//! and a transaction's category must belong to the subset for its type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::transaction::TransactionType;

/// A transaction category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    // Expense categories
    Adega,
    Alimentacao,
    Transporte,
    Moradia,
    Saude,
    Lazer,
    Educacao,
    Compras,
    Contas,
    Pets,
    Streaming,
    Outro,
    OutrosGastos,

    // Income categories
    Salario,
    Freelance,
    Investimentos,
    OutrosGanhos,
}

impl Category {
    pub const EXPENSE: [Category; 13] = [
        Category::Adega,
        Category::Alimentacao,
        Category::Transporte,
        Category::Moradia,
        Category::Saude,
        Category::Lazer,
        Category::Educacao,
        Category::Compras,
        Category::Contas,
        Category::Pets,
        Category::Streaming,
        Category::Outro,
        Category::OutrosGastos,
    ];

    pub const INCOME: [Category; 4] = [
        Category::Salario,
        Category::Freelance,
        Category::Investimentos,
        Category::OutrosGanhos,
    ];

    /// Categories allowed for a transaction type
    pub fn for_type(kind: TransactionType) -> &'static [Category] {
        match kind {
            TransactionType::Expense => &Self::EXPENSE,
            TransactionType::Income => &Self::INCOME,
        }
    }

    /// All categories, expense categories first
    pub fn all() -> impl Iterator<Item = Category> {
        Self::EXPENSE.into_iter().chain(Self::INCOME)
    }

    /// The transaction type this category belongs to
    pub fn kind(&self) -> TransactionType {
        if Self::INCOME.contains(self) {
            TransactionType::Income
        } else {
            TransactionType::Expense
        }
    }

    /// Check whether this category may be used with the given type
    pub fn allows(&self, kind: TransactionType) -> bool {
        self.kind() == kind
    }

    /// Sheet code, e.g. "OUTROS_GASTOS"
    pub fn code(&self) -> &'static str {
        match self {
            Self::Adega => "ADEGA",
            Self::Alimentacao => "ALIMENTACAO",
            Self::Transporte => "TRANSPORTE",
            Self::Moradia => "MORADIA",
            Self::Saude => "SAUDE",
            Self::Lazer => "LAZER",
            Self::Educacao => "EDUCACAO",
            Self::Compras => "COMPRAS",
            Self::Contas => "CONTAS",
            Self::Pets => "PETS",
            Self::Streaming => "STREAMING",
            Self::Outro => "OUTRO",
            Self::OutrosGastos => "OUTROS_GASTOS",
            Self::Salario => "SALARIO",
            Self::Freelance => "FREELANCE",
            Self::Investimentos => "INVESTIMENTOS",
            Self::OutrosGanhos => "OUTROS_GANHOS",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Adega => "Adega",
            Self::Alimentacao => "Alimentação",
            Self::Transporte => "Transporte",
            Self::Moradia => "Moradia",
            Self::Saude => "Saúde",
            Self::Lazer => "Lazer",
            Self::Educacao => "Educação",
            Self::Compras => "Compras",
            Self::Contas => "Contas",
            Self::Pets => "Pets",
            Self::Streaming => "Streaming",
            Self::Outro => "Outro",
            Self::OutrosGastos => "Outros Gastos",
            Self::Salario => "Salário",
            Self::Freelance => "Freelance",
            Self::Investimentos => "Investimentos",
            Self::OutrosGanhos => "Outros Ganhos",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Accepts the sheet code or the label, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        let normalized = needle.replace([' ', '-'], "_");
        Self::all()
            .find(|c| {
                c.code().eq_ignore_ascii_case(&normalized)
                    || c.label().to_lowercase() == needle.to_lowercase()
            })
            .ok_or_else(|| CategoryParseError(needle.to_string()))
    }
}

/// Error returned for an unknown category name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsets_are_disjoint_and_complete() {
        assert_eq!(Category::all().count(), 17);
        for c in Category::EXPENSE {
            assert_eq!(c.kind(), TransactionType::Expense);
            assert!(!Category::INCOME.contains(&c));
        }
        for c in Category::INCOME {
            assert_eq!(c.kind(), TransactionType::Income);
        }
    }

    #[test]
    fn test_allows() {
        assert!(Category::Salario.allows(TransactionType::Income));
        assert!(!Category::Salario.allows(TransactionType::Expense));
        assert!(Category::Moradia.allows(TransactionType::Expense));
    }

    #[test]
    fn test_parse_code_and_label() {
        assert_eq!("OUTROS_GASTOS".parse::<Category>().unwrap(), Category::OutrosGastos);
        assert_eq!("outros gastos".parse::<Category>().unwrap(), Category::OutrosGastos);
        assert_eq!("Saúde".parse::<Category>().unwrap(), Category::Saude);
        assert_eq!("saude".parse::<Category>().unwrap(), Category::Saude);
        assert!("groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Category::OutrosGanhos).unwrap();
        assert_eq!(json, "\"OUTROS_GANHOS\"");
        let back: Category = serde_json::from_str("\"ALIMENTACAO\"").unwrap();
        assert_eq!(back, Category::Alimentacao);
    }
}
