use crate::catalog::StockCatalog;

#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    pub(crate) cash: f64,
    pub(crate) catalog: StockCatalog,
}

impl Portfolio {
    pub fn new(cash: f64, catalog: StockCatalog) -> Self {
        assert!(
            cash.is_finite() && cash >= 0.0,
            "cash must be finite and non-negative"
        );

        Self { cash, catalog }
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn catalog(&self) -> &StockCatalog {
        &self.catalog
    }

    /// Cash plus the market value of every holding.
    pub fn net_liquidation_value(&self) -> f64 {
        self.cash + self.catalog.holdings_value()
    }
}
