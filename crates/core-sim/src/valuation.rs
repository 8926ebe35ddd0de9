use std::collections::VecDeque;

use crate::state::Portfolio;

/// Rolling window of net liquidation values, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationTracker {
    history: VecDeque<f64>,
    capacity: usize,
}

impl ValuationTracker {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");

        Self {
            history: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn sample(&mut self, portfolio: &Portfolio) -> &VecDeque<f64> {
        self.record(portfolio.net_liquidation_value())
    }

    pub fn record(&mut self, value: f64) -> &VecDeque<f64> {
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(value);
        &self.history
    }

    pub fn history(&self) -> &VecDeque<f64> {
        &self.history
    }

    pub fn latest(&self) -> Option<f64> {
        self.history.back().copied()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
