use std::cmp::Ordering;

use indexmap::IndexMap;

/// The widths shipped with the default configuration.
#[must_use]
pub fn default_values() -> IndexMap<String, f64> {
    [
        ("xs", 0.0),
        ("sm", 600.0),
        ("md", 900.0),
        ("lg", 1200.0),
        ("xl", 1536.0),
    ]
    .into_iter()
    .map(|(key, width)| (key.to_string(), width))
    .collect()
}

/// Return a copy of `values` whose iteration order is ascending by width.
///
/// The sort is stable: keys with equal widths keep their input order, and
/// `-0` ties with `0`. NaN widths sort after every number.
#[must_use]
pub fn sort_values(values: &IndexMap<String, f64>) -> IndexMap<String, f64> {
    let mut entries: Vec<(&String, &f64)> = values.iter().collect();
    entries.sort_by(|(_, a), (_, b)| compare_widths(**a, **b));

    entries
        .into_iter()
        .map(|(key, width)| (key.clone(), *width))
        .collect()
}

fn compare_widths(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Pairs of keys that share a width, in sorted order.
pub(super) fn equal_widths(sorted: &IndexMap<String, f64>) -> Vec<(&str, &str)> {
    sorted
        .iter()
        .zip(sorted.iter().skip(1))
        .filter(|((_, a), (_, b))| a == b)
        .map(|((first, _), (second, _))| (first.as_str(), second.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, f64)]) -> IndexMap<String, f64> {
        entries
            .iter()
            .map(|(key, width)| (key.to_string(), *width))
            .collect()
    }

    fn keys(values: &IndexMap<String, f64>) -> Vec<&str> {
        values.keys().map(String::as_str).collect()
    }

    #[test]
    fn orders_keys_by_ascending_width() {
        let sorted = sort_values(&map(&[("lg", 1200.0), ("xs", 0.0), ("md", 900.0)]));
        assert_eq!(keys(&sorted), vec!["xs", "md", "lg"]);
        assert_eq!(sorted["md"], 900.0);
    }

    #[test]
    fn keeps_input_order_for_equal_widths() {
        let sorted = sort_values(&map(&[
            ("wide", 1000.0),
            ("b", 500.0),
            ("a", 500.0),
            ("c", 500.0),
        ]));
        assert_eq!(keys(&sorted), vec!["b", "a", "c", "wide"]);
    }

    #[test]
    fn sorting_twice_matches_sorting_once() {
        let input = map(&[("c", 3.0), ("a", 1.0), ("b", 2.0), ("d", 1.0)]);
        let once = sort_values(&input);
        let twice = sort_values(&once);
        assert_eq!(keys(&once), keys(&twice));
    }

    #[test]
    fn input_is_left_untouched() {
        let input = map(&[("b", 2.0), ("a", 1.0)]);
        let _ = sort_values(&input);
        assert_eq!(keys(&input), vec!["b", "a"]);
    }

    #[test]
    fn negative_zero_ties_with_zero() {
        let sorted = sort_values(&map(&[("pos", 0.0), ("neg", -0.0)]));
        assert_eq!(keys(&sorted), vec!["pos", "neg"]);
    }

    #[test]
    fn nan_widths_sort_last_without_panicking() {
        let input: IndexMap<String, f64> = (0..64)
            .map(|i| {
                let width = if i % 3 == 0 { f64::NAN } else { f64::from(64 - i) };
                (format!("k{i}"), width)
            })
            .collect();

        let sorted = sort_values(&input);
        assert_eq!(sorted.len(), 64);

        let widths: Vec<f64> = sorted.values().copied().collect();
        let first_nan = widths.iter().position(|w| w.is_nan()).unwrap();
        assert!(widths[first_nan..].iter().all(|w| w.is_nan()));
        assert!(widths[..first_nan].windows(2).all(|pair| pair[0] <= pair[1]));

        let nan_keys: Vec<&str> = sorted.keys().skip(first_nan).map(String::as_str).collect();
        assert_eq!(nan_keys[..3], ["k0", "k3", "k6"]);
    }

    #[test]
    fn equal_widths_are_reported_pairwise() {
        let sorted = sort_values(&map(&[("a", 1.0), ("b", 2.0), ("c", 2.0)]));
        assert_eq!(equal_widths(&sorted), vec![("b", "c")]);
        assert!(equal_widths(&default_values()).is_empty());
    }
}
