use rand::{rngs::StdRng, Rng};
use serde::Serialize;

use crate::{
    catalog::StockCatalog,
    config::SimConfig,
    ledger::{self, TradeRejection},
    simulator::{PriceSimulator, TickOutcome},
    state::Portfolio,
    transactions::{TransactionLog, TransactionRecord},
    valuation::ValuationTracker,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockRow {
    pub index: usize,
    pub name: String,
    pub price: f64,
    pub owned: u32,
    pub holding_value: f64,
    pub can_buy: bool,
    pub can_sell: bool,
}

/// Everything a view needs to draw the current state of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub cash: f64,
    pub net_liquidation_value: f64,
    pub countdown: u32,
    pub stocks: Vec<StockRow>,
    pub valuation_history: Vec<f64>,
    pub transactions: Vec<TransactionRecord>,
}

/// One trading session: the portfolio plus everything that mutates or
/// observes it.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    config: SimConfig,
    portfolio: Portfolio,
    simulator: PriceSimulator,
    transactions: TransactionLog,
    valuation: ValuationTracker,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(config: SimConfig, mut rng: R) -> Self {
        let catalog = StockCatalog::generate(
            config.stock_count,
            config.min_start_price,
            config.max_start_price,
            &mut rng,
        );
        Self::with_catalog(config, catalog, rng)
    }

    pub fn with_catalog(config: SimConfig, catalog: StockCatalog, rng: R) -> Self {
        let portfolio = Portfolio::new(config.starting_cash, catalog);
        let simulator = PriceSimulator::new(
            config.countdown_ticks,
            config.max_drift_pct,
            config.price_floor,
        );
        let mut valuation = ValuationTracker::new(config.history_capacity);
        valuation.sample(&portfolio);

        Self {
            config,
            portfolio,
            simulator,
            transactions: TransactionLog::new(),
            valuation,
            rng,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn transactions(&self) -> &TransactionLog {
        &self.transactions
    }

    pub fn valuation(&self) -> &ValuationTracker {
        &self.valuation
    }

    pub fn countdown(&self) -> u32 {
        self.simulator.countdown()
    }

    pub fn net_liquidation_value(&self) -> f64 {
        self.portfolio.net_liquidation_value()
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.simulator.tick(&mut self.portfolio.catalog, &mut self.rng)
    }

    /// Returns `None` when the trade was not possible; nothing changes then.
    pub fn buy(&mut self, index: usize) -> Option<TransactionRecord> {
        self.try_buy(index).ok()
    }

    /// Returns `None` when the trade was not possible; nothing changes then.
    pub fn sell(&mut self, index: usize) -> Option<TransactionRecord> {
        self.try_sell(index).ok()
    }

    pub fn try_buy(&mut self, index: usize) -> Result<TransactionRecord, TradeRejection> {
        let record = ledger::buy(&mut self.portfolio, index)?;
        Ok(self.settle(record))
    }

    pub fn try_sell(&mut self, index: usize) -> Result<TransactionRecord, TradeRejection> {
        let record = ledger::sell(&mut self.portfolio, index)?;
        Ok(self.settle(record))
    }

    fn settle(&mut self, record: TransactionRecord) -> TransactionRecord {
        self.transactions.append(record.clone());
        self.valuation.sample(&self.portfolio);
        record
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let cash = self.portfolio.cash();
        let stocks = self
            .portfolio
            .catalog()
            .instruments()
            .iter()
            .enumerate()
            .map(|(index, stock)| StockRow {
                index,
                name: stock.name.clone(),
                price: stock.price,
                owned: stock.owned,
                holding_value: stock.holding_value(),
                can_buy: cash >= stock.price,
                can_sell: stock.owned > 0,
            })
            .collect();

        SessionSnapshot {
            cash,
            net_liquidation_value: self.net_liquidation_value(),
            countdown: self.countdown(),
            stocks,
            valuation_history: self.valuation.history().iter().copied().collect(),
            transactions: self.transactions.records().to_vec(),
        }
    }
}
