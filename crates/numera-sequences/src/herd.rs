//! The hundred-herd purchase puzzle.
//!
//! Classic formulation: buy exactly one hundred animals for exactly one
//! hundred coins, with bulls at 5, cows at 3 and calves at ⅓ coin each.
//! Prices and totals are inputs rather than constants; `Default`
//! supplies the classic pricing.

/// Per-head prices for the three animal kinds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HerdPricing {
    /// Price of one bull.
    pub bull: f64,
    /// Price of one cow.
    pub cow: f64,
    /// Price of one calf.
    pub calf: f64,
}

impl Default for HerdPricing {
    fn default() -> Self {
        Self {
            bull: 5.0,
            cow: 3.0,
            calf: 1.0 / 3.0,
        }
    }
}

/// A purchase satisfying the head-count and budget constraints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HerdSolution {
    /// Bulls bought.
    pub bulls: u32,
    /// Cows bought.
    pub cows: u32,
    /// Calves bought.
    pub calves: u32,
}

/// Enumerates every (bulls, cows, calves) purchase of exactly `animals`
/// head costing exactly `budget` under `pricing`.
///
/// Exhaustive search over bull and cow counts, in ascending bull order.
/// Cost equality is tested to 1e-9 to absorb fractional per-head prices.
#[must_use]
pub fn herd_purchases(pricing: HerdPricing, animals: u32, budget: f64) -> Vec<HerdSolution> {
    let mut solutions = Vec::new();
    for bulls in 0..=animals {
        for cows in 0..=(animals - bulls) {
            let calves = animals - bulls - cows;
            let cost = pricing.bull * f64::from(bulls)
                + pricing.cow * f64::from(cows)
                + pricing.calf * f64::from(calves);
            if (cost - budget).abs() < 1e-9 {
                solutions.push(HerdSolution {
                    bulls,
                    cows,
                    calves,
                });
            }
        }
    }
    solutions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_hundred_for_hundred() {
        let solutions = herd_purchases(HerdPricing::default(), 100, 100.0);
        let expected = [
            HerdSolution { bulls: 0, cows: 25, calves: 75 },
            HerdSolution { bulls: 4, cows: 18, calves: 78 },
            HerdSolution { bulls: 8, cows: 11, calves: 81 },
            HerdSolution { bulls: 12, cows: 4, calves: 84 },
        ];
        assert_eq!(solutions, expected);
    }

    #[test]
    fn test_solutions_satisfy_constraints() {
        let pricing = HerdPricing::default();
        for s in herd_purchases(pricing, 100, 100.0) {
            assert_eq!(s.bulls + s.cows + s.calves, 100);
            let cost = pricing.bull * f64::from(s.bulls)
                + pricing.cow * f64::from(s.cows)
                + pricing.calf * f64::from(s.calves);
            assert!((cost - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unsatisfiable_budget() {
        // every animal costs at least 1, so 100 head can't cost 50
        let pricing = HerdPricing {
            bull: 5.0,
            cow: 3.0,
            calf: 1.0,
        };
        assert!(herd_purchases(pricing, 100, 50.0).is_empty());
    }
}
