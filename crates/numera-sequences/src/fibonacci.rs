//! Fibonacci terms, iterative and recursive.
//!
//! The two entry points are deliberately separate implementations. The
//! iterative form is the one to call for performance; the naive double
//! recursion is kept as a reference whose exponential cost profile is
//! itself part of the contract.

/// Returns the first `n` Fibonacci terms, starting `0, 1, 1, 2, …`.
///
/// Iterative: O(n) time and space. Empty for `n == 0`.
///
/// # Example
///
/// ```
/// use numera_sequences::fibonacci_sequence;
///
/// assert_eq!(fibonacci_sequence(6), vec![0, 1, 1, 2, 3, 5]);
/// assert!(fibonacci_sequence(0).is_empty());
/// ```
#[must_use]
pub fn fibonacci_sequence(n: usize) -> Vec<u64> {
    let mut terms = Vec::with_capacity(n);
    let (mut current, mut next) = (0u64, 1u64);
    for _ in 0..n {
        terms.push(current);
        (current, next) = (next, current + next);
    }
    terms
}

/// Returns the `n`-th Fibonacci term (1-based) by naive double recursion.
///
/// Exponential in `n`. `fibonacci_recursive(i + 1)` equals
/// `fibonacci_sequence(n)[i]` for every valid `i`.
#[must_use]
pub fn fibonacci_recursive(n: usize) -> u64 {
    match n {
        0 | 1 => 0,
        2 => 1,
        _ => fibonacci_recursive(n - 1) + fibonacci_recursive(n - 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_base_cases() {
        assert_eq!(fibonacci_sequence(0), Vec::<u64>::new());
        assert_eq!(fibonacci_sequence(1), vec![0]);
        assert_eq!(fibonacci_sequence(2), vec![0, 1]);
    }

    #[test]
    fn test_sequence_values() {
        assert_eq!(
            fibonacci_sequence(10),
            vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
        );
    }

    #[test]
    fn test_recursive_terms() {
        assert_eq!(fibonacci_recursive(0), 0);
        assert_eq!(fibonacci_recursive(1), 0);
        assert_eq!(fibonacci_recursive(2), 1);
        assert_eq!(fibonacci_recursive(3), 1);
        assert_eq!(fibonacci_recursive(10), 34);
    }
}
