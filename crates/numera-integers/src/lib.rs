//! # numera-integers
//!
//! Integer number theory over machine integers.
//!
//! This crate provides:
//! - Primality testing and the Sieve of Eratosthenes (`primes`)
//! - Divisor enumeration, GCD/LCM, perfect numbers, factorization (`divisors`)
//! - Decimal-digit utilities: Armstrong numbers, palindromes, reversal (`digits`)
//!
//! Every function is pure and deterministic; results that are sequences
//! (divisor lists, factor lists) are returned in ascending order
//! regardless of the internal enumeration order.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digits;
pub mod divisors;
pub mod primes;

#[cfg(test)]
mod proptests;

pub use digits::{
    digit_count, digit_sum, is_armstrong, is_palindrome_number, is_perfect_square, max_digit,
    reverse_number, to_binary,
};
pub use divisors::{divisors, gcd, gcd_lcm, is_perfect, lcm, prime_factorization};
pub use primes::{count_primes_below, is_prime, largest_prime_below, primes_in_range, sieve_primes};
