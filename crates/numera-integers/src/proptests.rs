//! Property-based tests for divisor and factor enumeration.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{divisors, gcd_lcm, is_prime, prime_factorization};

    proptest! {
        #[test]
        fn divisors_sorted_divide_and_bound(n in 1u64..20_000) {
            let ds = divisors(n);
            prop_assert!(ds.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(ds.first().copied(), Some(1));
            prop_assert_eq!(ds.last().copied(), Some(n));
            for &d in &ds {
                prop_assert_eq!(n % d, 0);
                prop_assert_eq!(d * (n / d), n);
            }
        }

        #[test]
        fn gcd_times_lcm_is_product(a in 1u64..10_000, b in 1u64..10_000) {
            let (g, l) = gcd_lcm(a, b);
            prop_assert_eq!(g * l, a * b);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
            prop_assert_eq!(l % a, 0);
            prop_assert_eq!(l % b, 0);
        }

        #[test]
        fn factorization_multiplies_back(n in 2u64..50_000) {
            let factors = prime_factorization(n);
            prop_assert!(factors.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(factors.iter().product::<u64>(), n);
            for &f in &factors {
                prop_assert!(is_prime(f));
            }
        }
    }
}
