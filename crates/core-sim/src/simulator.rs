use rand::Rng;

use crate::{catalog::StockCatalog, generators::random_drift};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub countdown: u32,
    pub repriced: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceSimulator {
    countdown: u32,
    reset_to: u32,
    max_drift_pct: f64,
    price_floor: f64,
}

impl PriceSimulator {
    pub fn new(countdown_ticks: u32, max_drift_pct: f64, price_floor: f64) -> Self {
        assert!(countdown_ticks > 0, "countdown_ticks must be positive");
        assert!(
            price_floor.is_finite() && price_floor > 0.0,
            "price_floor must be finite and positive"
        );

        Self {
            countdown: countdown_ticks,
            reset_to: countdown_ticks,
            max_drift_pct,
            price_floor,
        }
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Advances the countdown by one tick and reprices every instrument when it
    /// runs out.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        catalog: &mut StockCatalog,
        rng: &mut R,
    ) -> TickOutcome {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return TickOutcome {
                countdown: self.countdown,
                repriced: false,
            };
        }

        self.countdown = self.reset_to;
        for stock in catalog.instruments_mut() {
            let drift = random_drift(rng, self.max_drift_pct);
            stock.price = apply_drift(stock.price, drift, self.price_floor);
        }

        TickOutcome {
            countdown: self.countdown,
            repriced: true,
        }
    }
}

pub fn apply_drift(price: f64, drift: f64, floor: f64) -> f64 {
    (price + price * drift).max(floor)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::catalog::{Instrument, StockCatalog};

    use super::{apply_drift, PriceSimulator};

    fn two_stock_catalog() -> StockCatalog {
        StockCatalog::from_instruments(vec![
            Instrument::new("Prime Labs", 100.0),
            Instrument::new("Next Works", 0.01),
        ])
    }

    #[test]
    fn reprices_exactly_once_on_tenth_tick() {
        let mut simulator = PriceSimulator::new(10, 0.03, 0.01);
        let mut catalog = two_stock_catalog();
        let mut rng = StdRng::seed_from_u64(8);

        let outcomes: Vec<_> = (0..10)
            .map(|_| simulator.tick(&mut catalog, &mut rng))
            .collect();

        let repriced: Vec<usize> = outcomes
            .iter()
            .enumerate()
            .filter(|(_, outcome)| outcome.repriced)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(repriced, vec![9]);
        assert_eq!(outcomes[0].countdown, 9);
        assert_eq!(outcomes[8].countdown, 1);
        assert_eq!(outcomes[9].countdown, 10);
        assert_eq!(simulator.countdown(), 10);
    }

    #[test]
    fn non_reset_ticks_leave_prices_untouched() {
        let mut simulator = PriceSimulator::new(10, 0.03, 0.01);
        let mut catalog = two_stock_catalog();
        let mut rng = StdRng::seed_from_u64(8);

        for _ in 0..9 {
            simulator.tick(&mut catalog, &mut rng);
        }

        assert_eq!(catalog, two_stock_catalog());
    }

    #[test]
    fn repricing_moves_each_price_by_at_most_three_percent() {
        let mut simulator = PriceSimulator::new(1, 0.03, 0.01);
        let mut catalog =
            StockCatalog::from_instruments(vec![Instrument::new("Sky Group", 100.0)]);
        let mut rng = StdRng::seed_from_u64(21);

        for _ in 0..500 {
            let before = catalog.get(0).unwrap().price;
            simulator.tick(&mut catalog, &mut rng);
            let after = catalog.get(0).unwrap().price;
            let change = (after - before) / before;
            assert!(change.abs() <= 0.03 + 1e-12, "change {change} out of bounds");
        }
    }

    #[test]
    fn prices_never_fall_below_floor() {
        let mut simulator = PriceSimulator::new(1, 0.03, 0.01);
        let mut catalog = two_stock_catalog();
        let mut rng = StdRng::seed_from_u64(1234);

        for _ in 0..5_000 {
            simulator.tick(&mut catalog, &mut rng);
            assert!(catalog.instruments().iter().all(|stock| stock.price >= 0.01));
        }
    }

    #[test]
    fn apply_drift_clamps_to_floor_without_ceiling() {
        assert_eq!(apply_drift(0.01, -0.03, 0.01), 0.01);
        assert_eq!(apply_drift(100.0, 0.03, 0.01), 103.0);
        assert_eq!(apply_drift(100.0, -0.025, 0.01), 97.5);
    }

    #[test]
    #[should_panic(expected = "countdown_ticks must be positive")]
    fn rejects_zero_countdown() {
        let _ = PriceSimulator::new(0, 0.03, 0.01);
    }
}
