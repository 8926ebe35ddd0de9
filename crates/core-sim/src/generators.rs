use rand::{seq::SliceRandom, Rng};

pub const NAME_PREFIXES: [&str; 20] = [
    "Global",
    "Tech",
    "Innovative",
    "United",
    "Prime",
    "Dynamic",
    "Next",
    "Future",
    "Sky",
    "Quantum",
    "Vision",
    "Core",
    "Bright",
    "Pioneer",
    "Elite",
    "Advanced",
    "Integrated",
    "Pro",
    "Infinite",
    "Ultimate",
];

pub const NAME_SUFFIXES: [&str; 20] = [
    "Systems",
    "Solutions",
    "Industries",
    "Technologies",
    "Corporation",
    "Enterprises",
    "Holdings",
    "Dynamics",
    "Innovations",
    "Logistics",
    "Networks",
    "Ventures",
    "Group",
    "Partners",
    "Labs",
    "Works",
    "Services",
    "Consulting",
    "Software",
    "Energy",
];

/// Draws prefix and suffix independently, so the same name can come up twice.
pub fn random_stock_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = NAME_PREFIXES.choose(rng).copied().unwrap_or(NAME_PREFIXES[0]);
    let suffix = NAME_SUFFIXES.choose(rng).copied().unwrap_or(NAME_SUFFIXES[0]);
    format!("{prefix} {suffix}")
}

pub fn random_start_price<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    assert!(
        min.is_finite() && max.is_finite() && min <= max,
        "start price range must be finite and ordered"
    );

    round_to(rng.gen_range(min..=max), 2)
}

/// Fractional drift in `[-max_pct, max_pct]`, rounded to 4 decimal places.
pub fn random_drift<R: Rng + ?Sized>(rng: &mut R, max_pct: f64) -> f64 {
    assert!(
        max_pct.is_finite() && max_pct >= 0.0,
        "max_pct must be finite and non-negative"
    );

    round_to(rng.gen_range(-max_pct..=max_pct), 4)
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{
        random_drift, random_start_price, random_stock_name, round_to, NAME_PREFIXES,
        NAME_SUFFIXES,
    };

    #[test]
    fn seeded_generators_are_deterministic() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let draws_a: Vec<(String, f64, f64)> = (0..10)
            .map(|_| {
                (
                    random_stock_name(&mut rng_a),
                    random_start_price(&mut rng_a, 2.0, 200.0),
                    random_drift(&mut rng_a, 0.03),
                )
            })
            .collect();

        let draws_b: Vec<(String, f64, f64)> = (0..10)
            .map(|_| {
                (
                    random_stock_name(&mut rng_b),
                    random_start_price(&mut rng_b, 2.0, 200.0),
                    random_drift(&mut rng_b, 0.03),
                )
            })
            .collect();

        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn names_join_a_known_prefix_and_suffix() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let name = random_stock_name(&mut rng);
            let (prefix, suffix) = name.split_once(' ').expect("name has two words");
            assert!(NAME_PREFIXES.contains(&prefix));
            assert!(NAME_SUFFIXES.contains(&suffix));
        }
    }

    #[test]
    fn start_prices_stay_in_range_with_two_decimals() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..1_000 {
            let price = random_start_price(&mut rng, 2.0, 200.0);
            assert!((2.0..=200.0).contains(&price));
            assert_eq!(price, round_to(price, 2));
        }
    }

    #[test]
    fn drift_stays_within_bounds_with_four_decimals() {
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..1_000 {
            let drift = random_drift(&mut rng, 0.03);
            assert!((-0.03..=0.03).contains(&drift));
            assert_eq!(drift, round_to(drift, 4));
        }
    }

    #[test]
    fn round_to_handles_common_precisions() {
        assert_eq!(round_to(12.345_67, 2), 12.35);
        assert_eq!(round_to(-0.012_34, 4), -0.0123);
        assert_eq!(round_to(7.0, 2), 7.0);
    }

    #[test]
    #[should_panic(expected = "max_pct must be finite and non-negative")]
    fn drift_rejects_negative_bound() {
        let mut rng = StdRng::seed_from_u64(1);
        let _ = random_drift(&mut rng, -0.01);
    }
}
