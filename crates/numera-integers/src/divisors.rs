//! Divisor enumeration, GCD/LCM, perfect numbers and factorization.

/// Computes the greatest common divisor by Euclid's algorithm.
///
/// `gcd(0, 0)` is 0 by convention.
#[must_use]
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Computes the least common multiple.
///
/// Zero when either input is zero, matching the `gcd(0, 0) == 0`
/// convention.
#[must_use]
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Returns `(gcd, lcm)` in one call.
#[must_use]
pub fn gcd_lcm(a: u64, b: u64) -> (u64, u64) {
    (gcd(a, b), lcm(a, b))
}

/// Lists every positive divisor of `n`, ascending. Empty for `n == 0`.
///
/// Divisors are collected in pairs `(i, n / i)` for `i ≤ √n`; the final
/// sort is part of the contract, the pairing order is not.
#[must_use]
pub fn divisors(n: u64) -> Vec<u64> {
    let mut result = Vec::new();
    let mut i = 1;
    while i * i <= n {
        if n % i == 0 {
            result.push(i);
            if i != n / i {
                result.push(n / i);
            }
        }
        i += 1;
    }
    result.sort_unstable();
    result
}

/// Returns true if `n` equals the sum of its proper divisors.
///
/// No perfect number exists below 2, so `n <= 1` is always false.
#[must_use]
pub fn is_perfect(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    let mut sum = 1;
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            sum += i;
            let paired = n / i;
            if paired != i {
                sum += paired;
            }
        }
        i += 1;
    }
    sum == n
}

/// Returns the prime factors of `n` with multiplicity, ascending.
///
/// Trial division up to √n; a remaining cofactor above 1 is itself
/// prime and is appended last. Empty for `n <= 1`.
#[must_use]
pub fn prime_factorization(n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n <= 1 {
        return factors;
    }
    let mut n = n;
    let mut d = 2;
    while d * d <= n {
        while n % d == 0 {
            factors.push(d);
            n /= d;
        }
        d += if d == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd_lcm(12, 18), (6, 36));
        assert_eq!(gcd_lcm(0, 0), (0, 0));
        assert_eq!(gcd_lcm(7, 0), (7, 0));
        assert_eq!(gcd_lcm(17, 13), (1, 221));
    }

    #[test]
    fn test_divisors_sorted_with_endpoints() {
        assert_eq!(divisors(1), vec![1]);
        assert_eq!(divisors(12), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(divisors(36), vec![1, 2, 3, 4, 6, 9, 12, 18, 36]);
        assert_eq!(divisors(17), vec![1, 17]);
        assert_eq!(divisors(0), Vec::<u64>::new());
    }

    #[test]
    fn test_perfect_numbers() {
        assert!(is_perfect(6));
        assert!(is_perfect(28));
        assert!(is_perfect(496));
        assert!(!is_perfect(12));
        assert!(!is_perfect(1));
        assert!(!is_perfect(0));
    }

    #[test]
    fn test_prime_factorization() {
        assert_eq!(prime_factorization(360), vec![2, 2, 2, 3, 3, 5]);
        assert_eq!(prime_factorization(97), vec![97]);
        assert_eq!(prime_factorization(1), Vec::<u64>::new());
        assert_eq!(prime_factorization(0), Vec::<u64>::new());
        // large prime cofactor appended after trial division stops
        assert_eq!(prime_factorization(2 * 1_000_003), vec![2, 1_000_003]);
    }
}
