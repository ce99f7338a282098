//! Property-based tests for Fibonacci and Hanoi enumeration.
