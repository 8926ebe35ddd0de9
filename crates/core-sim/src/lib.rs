mod catalog;
mod config;
mod generators;
mod ledger;
mod session;
mod simulator;
mod state;
mod transactions;
mod valuation;

pub use catalog::{Instrument, StockCatalog};
pub use config::SimConfig;
pub use ledger::TradeRejection;
pub use session::{Session, SessionSnapshot, StockRow};
pub use simulator::{apply_drift, PriceSimulator, TickOutcome};
pub use state::Portfolio;
pub use transactions::{TradeAction, TransactionLog, TransactionRecord};
pub use valuation::ValuationTracker;
