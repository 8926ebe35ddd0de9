use rand::Rng;
use serde::Serialize;

use crate::generators::{random_start_price, random_stock_name};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instrument {
    pub name: String,
    pub price: f64,
    pub owned: u32,
}

impl Instrument {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            owned: 0,
        }
    }

    pub fn holding_value(&self) -> f64 {
        self.price * f64::from(self.owned)
    }
}

/// Instruments are addressed by their position, which never changes after
/// generation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StockCatalog {
    instruments: Vec<Instrument>,
}

impl StockCatalog {
    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        min_price: f64,
        max_price: f64,
        rng: &mut R,
    ) -> Self {
        let instruments = (0..count)
            .map(|_| {
                let name = random_stock_name(rng);
                let price = random_start_price(rng, min_price, max_price);
                Instrument::new(name, price)
            })
            .collect();

        Self { instruments }
    }

    pub fn from_instruments(instruments: Vec<Instrument>) -> Self {
        Self { instruments }
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Instrument> {
        self.instruments.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Instrument> {
        self.instruments.get_mut(index)
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    pub(crate) fn instruments_mut(&mut self) -> &mut [Instrument] {
        &mut self.instruments
    }

    pub fn holding_values(&self) -> Vec<f64> {
        self.instruments.iter().map(Instrument::holding_value).collect()
    }

    pub fn holdings_value(&self) -> f64 {
        self.instruments.iter().map(Instrument::holding_value).sum()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{Instrument, StockCatalog};

    #[test]
    fn generate_builds_requested_number_of_unowned_instruments() {
        let mut rng = StdRng::seed_from_u64(3);
        let catalog = StockCatalog::generate(20, 2.0, 200.0, &mut rng);

        assert_eq!(catalog.len(), 20);
        assert!(catalog.instruments().iter().all(|stock| stock.owned == 0));
        assert!(catalog
            .instruments()
            .iter()
            .all(|stock| (2.0..=200.0).contains(&stock.price)));
    }

    #[test]
    fn generate_with_zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let catalog = StockCatalog::generate(0, 2.0, 200.0, &mut rng);

        assert!(catalog.is_empty());
        assert_eq!(catalog.holdings_value(), 0.0);
    }

    #[test]
    fn same_seed_generates_same_catalog() {
        let catalog_a = StockCatalog::generate(20, 2.0, 200.0, &mut StdRng::seed_from_u64(5));
        let catalog_b = StockCatalog::generate(20, 2.0, 200.0, &mut StdRng::seed_from_u64(5));

        assert_eq!(catalog_a, catalog_b);
    }

    #[test]
    fn holding_values_follow_catalog_order() {
        let mut catalog = StockCatalog::from_instruments(vec![
            Instrument::new("Sky Labs", 10.0),
            Instrument::new("Core Energy", 2.5),
        ]);
        catalog.get_mut(0).unwrap().owned = 3;
        catalog.get_mut(1).unwrap().owned = 2;

        assert_eq!(catalog.holding_values(), vec![30.0, 5.0]);
        assert_eq!(catalog.holdings_value(), 35.0);
        assert_eq!(catalog.get(2), None);
    }
}
