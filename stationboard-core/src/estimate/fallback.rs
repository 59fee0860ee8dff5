use rand::Rng;
use serde::{Deserialize, Serialize};

/// tuning for synthesized arrival estimates, used when no scheduled entry is
/// imminent at a (station, line, headsign).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FallbackConfig {
    /// minutes until the first synthesized arrival, before jitter
    pub base_minutes: i64,
    /// how many estimates to synthesize
    pub count: usize,
    /// additional minutes per successive estimate
    pub step_minutes: i64,
    /// symmetric random jitter applied to each estimate, in minutes
    pub jitter_minutes: i64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        FallbackConfig {
            base_minutes: 6,
            count: 3,
            step_minutes: 6,
            jitter_minutes: 2,
        }
    }
}

/// synthesizes a short ascending run of plausible minute counts:
/// base + per-index step + jitter drawn from [-jitter, +jitter], floored at
/// one minute so "Now" never appears without a real schedule entry behind it.
pub fn synthesize_minutes<R: Rng + ?Sized>(config: &FallbackConfig, rng: &mut R) -> Vec<i64> {
    (0..config.count)
        .map(|i| {
            let jitter = if config.jitter_minutes > 0 {
                rng.random_range(-config.jitter_minutes..=config.jitter_minutes)
            } else {
                0
            };
            (config.base_minutes + i as i64 * config.step_minutes + jitter).max(1)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_synthesized_minutes_sorted_are_nondecreasing_and_positive() {
        let config = FallbackConfig::default();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut minutes = synthesize_minutes(&config, &mut rng);
            assert_eq!(minutes.len(), 3);
            minutes.sort_unstable();
            assert!(minutes.windows(2).all(|w| w[0] <= w[1]));
            assert!(minutes.iter().all(|m| *m >= 1));
        }
    }

    #[test]
    fn test_jitter_stays_within_bounds() {
        let config = FallbackConfig::default();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let minutes = synthesize_minutes(&config, &mut rng);
            for (i, m) in minutes.iter().enumerate() {
                let center = config.base_minutes + i as i64 * config.step_minutes;
                assert!((m - center).abs() <= config.jitter_minutes);
            }
        }
    }

    #[test]
    fn test_floor_applies_with_aggressive_jitter() {
        let config = FallbackConfig {
            base_minutes: 1,
            count: 3,
            step_minutes: 0,
            jitter_minutes: 5,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let minutes = synthesize_minutes(&config, &mut rng);
        assert!(minutes.iter().all(|m| *m >= 1));
    }
}
