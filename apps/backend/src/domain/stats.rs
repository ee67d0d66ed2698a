//! Aggregate statistics across games and users.

use std::cmp::Ordering;

/// Mean of the remaining attempts of in-progress games; `None` if there are none.
pub fn average_remaining(remaining: &[u8]) -> Option<f64> {
    if remaining.is_empty() {
        return None;
    }
    let total: u64 = remaining.iter().map(|&r| u64::from(r)).sum();
    Some(total as f64 / remaining.len() as f64)
}

pub fn format_average_message(average: f64) -> String {
    format!("The average moves remaining is {average:.2}")
}

/// A user's performance: the mean of their scores, or 0 with no scores.
pub fn performance(scores: &[i32]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let total: i64 = scores.iter().map(|&s| i64::from(s)).sum();
    total as f64 / scores.len() as f64
}

/// Sort descending by `key`. Ties keep no particular order.
pub fn rank_descending<T>(items: &mut [T], key: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
}
