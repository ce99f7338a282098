//! # numera-collections
//!
//! List and matrix utilities:
//!
//! - List operations: stable bubble sort, linear search, second-largest
//!   distinct value, progression and uniqueness helpers (`list`)
//! - A generic dense [`Matrix`] with construction-checked
//!   rectangularity, arithmetic, diagonal sums and symmetry (`matrix`)
//!
//! Operations never mutate their inputs; sorts and dedups work on
//! copies.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod list;
pub mod matrix;


pub use list::{
    bubble_sort, dedup_preserving_order, is_arithmetic_progression, linear_search, mean,
    second_largest, unique_elements,
};
pub use matrix::{Matrix, MatrixError};
