use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }
}

/// One executed trade. `balance_before` is the cash on hand when the order was
/// placed and is what the transaction list displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub instrument_name: String,
    pub action: TradeAction,
    pub amount: f64,
    pub balance_before: f64,
    pub balance_after: f64,
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - ${:.2} | Balance: ${:.2}",
            self.action.as_str(),
            self.instrument_name,
            self.amount,
            self.balance_before
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransactionLog {
    records: Vec<TransactionRecord>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&TransactionRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
