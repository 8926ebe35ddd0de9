#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub starting_cash: f64,
    pub stock_count: usize,
    pub min_start_price: f64,
    pub max_start_price: f64,
    pub max_drift_pct: f64,
    pub price_floor: f64,
    pub countdown_ticks: u32,
    pub tick_interval_ms: u64,
    pub history_capacity: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            starting_cash: 500.0,
            stock_count: 20,
            min_start_price: 2.0,
            max_start_price: 200.0,
            max_drift_pct: 0.03,
            price_floor: 0.01,
            countdown_ticks: 10,
            tick_interval_ms: 1_000,
            history_capacity: 200,
        }
    }
}
