//! Property-based tests for normalization and the Caesar cipher.
