//! List utilities.

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

/// Stable bubble sort of a copy of `items`.
///
/// O(n²); kept for its guaranteed stability on small inputs. Larger
/// workloads should prefer the standard library sort.
#[must_use]
pub fn bubble_sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    let n = sorted.len();
    for pass in 0..n {
        for j in 0..n.saturating_sub(pass + 1) {
            if sorted[j] > sorted[j + 1] {
                sorted.swap(j, j + 1);
            }
        }
    }
    sorted
}

/// Index of the first element equal to `target`.
#[must_use]
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}

/// The second largest distinct value.
///
/// `None` when fewer than two distinct values exist.
#[must_use]
pub fn second_largest<T: Ord + Copy>(items: &[T]) -> Option<T> {
    let mut largest: Option<T> = None;
    let mut second: Option<T> = None;
    for &item in items {
        if Some(item) == largest || Some(item) == second {
            continue;
        }
        match largest {
            None => largest = Some(item),
            Some(max) if item > max => {
                second = largest;
                largest = Some(item);
            }
            _ => match second {
                None => second = Some(item),
                Some(runner_up) if item > runner_up => second = Some(item),
                _ => {}
            },
        }
    }
    second
}

/// Whether consecutive differences are all equal.
///
/// Vacuously true for fewer than two elements.
#[must_use]
pub fn is_arithmetic_progression(items: &[i64]) -> bool {
    match items {
        [] | [_] => true,
        [first, second, ..] => {
            let difference = second - first;
            items.windows(2).all(|w| w[1] - w[0] == difference)
        }
    }
}

/// Arithmetic mean; `None` for an empty slice.
#[must_use]
pub fn mean(items: &[f64]) -> Option<f64> {
    if items.is_empty() {
        return None;
    }
    Some(items.iter().sum::<f64>() / items.len() as f64)
}

/// The elements occurring exactly once, in first-seen order.
#[must_use]
pub fn unique_elements<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut counts: FxHashMap<&T, usize> = FxHashMap::default();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    items
        .iter()
        .filter(|item| counts[*item] == 1)
        .cloned()
        .collect()
}

/// Removes duplicates, keeping the first occurrence of each element.
#[must_use]
pub fn dedup_preserving_order<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = FxHashSet::default();
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}
