use crate::client::synchronizer::StockEntry;
use std::fmt;

pub const TITLE: &str = "Sistema de Estoque";
pub const EMPTY_STOCK: &str = "Nenhum produto em estoque.";

/// Point-in-time copy of what the client shows: the products with their local
/// quantities, and the error banner if the last request failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockSnapshot {
    pub entries: Vec<StockEntry>,
    pub error: Option<String>,
}

impl StockSnapshot {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for StockSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TITLE)?;
        writeln!(f, "{}", "=".repeat(TITLE.len()))?;
        if let Some(error) = &self.error {
            writeln!(f, "[erro] {}", error)?;
        }
        if self.entries.is_empty() {
            return writeln!(f, "{}", EMPTY_STOCK);
        }
        for (index, entry) in self.entries.iter().enumerate() {
            writeln!(
                f,
                "{:>3}. {} - {}  [qtd: {}]  ({})",
                index + 1,
                entry.product.name,
                entry.product.description,
                entry.quantity,
                entry.product.id
            )?;
        }
        Ok(())
    }
}
