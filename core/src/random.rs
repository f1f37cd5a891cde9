use rand::prelude::*;

/// Uniform integer with inclusive `min` and exclusive `max`, after rounding
/// `min` up and `max` down.
///
/// An empty or inverted range still yields a value from the same formula
/// instead of panicking, so it lands in `(max, min]`.
pub fn random_range(rng: &mut SmallRng, min: f64, max: f64) -> i64 {
    let min = min.ceil();
    let max = max.floor();
    let unit: f64 = rng.random();
    (unit * (max - min)).floor() as i64 + min as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_within_inclusive_min_exclusive_max() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen_min = false;
        for _ in 0..2000 {
            let value = random_range(&mut rng, 0.0, 4.0);
            assert!((0..4).contains(&value), "{value} out of range");
            seen_min |= value == 0;
        }
        assert!(seen_min);
    }

    #[test]
    fn rounds_bounds_inwards() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..500 {
            let value = random_range(&mut rng, 29.2, 255.9);
            assert!((30..255).contains(&value), "{value} out of range");
        }
    }

    #[test]
    fn empty_range_returns_min() {
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(random_range(&mut rng, 5.0, 5.0), 5);
    }

    #[test]
    fn inverted_range_does_not_panic() {
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..100 {
            let value = random_range(&mut rng, 300.0, 255.0);
            assert!((255..=300).contains(&value), "{value} out of range");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        let xs: Vec<_> = (0..16).map(|_| random_range(&mut a, 0.0, 100.0)).collect();
        let ys: Vec<_> = (0..16).map(|_| random_range(&mut b, 0.0, 100.0)).collect();
        assert_eq!(xs, ys);
    }
}
