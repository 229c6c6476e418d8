//! Column sorting.
//!
//! Sorting is stable: rows whose values compare equal keep their input order,
//! in both directions.

use std::cmp::Ordering;

use serde_json::Value;
use ustr::Ustr;

use crate::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow shown next to a sorted header.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// The sorted column and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortConfig {
    pub column: Ustr,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn ascending(column: &str) -> Self {
        Self {
            column: Ustr::from(column),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: &str) -> Self {
        Self {
            column: Ustr::from(column),
            direction: SortDirection::Descending,
        }
    }

    /// Sort that results from clicking `column`'s header.
    ///
    /// A new column starts ascending; the current column flips direction.
    /// There is no way back to the unsorted state.
    pub fn after_click(current: Option<&Self>, column: Ustr) -> Self {
        match current {
            Some(current) if current.column == column => Self {
                column,
                direction: current.direction.flipped(),
            },
            _ => Self {
                column,
                direction: SortDirection::Ascending,
            },
        }
    }

    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        let ordering = compare_values(a.get(&self.column), b.get(&self.column));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Rank of a value kind when two cells hold different kinds.
fn kind_rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 3,
        Some(Value::Array(_)) => 4,
        Some(Value::Object(_)) => 5,
    }
}

/// Total order over cell values.
///
/// Same kinds use their natural order (numbers numerically, strings
/// lexicographically, `false < true`, nested values by their JSON text).
/// Different kinds are ordered by [`kind_rank`], missing and null first.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                x.cmp(&y)
            } else if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                x.cmp(&y)
            } else {
                let x = x.as_f64().unwrap_or(f64::NAN);
                let y = y.as_f64().unwrap_or(f64::NAN);
                x.total_cmp(&y)
            }
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x @ Value::Array(_)), Some(y @ Value::Array(_)))
        | (Some(x @ Value::Object(_)), Some(y @ Value::Object(_))) => {
            x.to_string().cmp(&y.to_string())
        }
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// Reorders `order` (indices into `rows`) by `sort`, keeping ties in place.
pub fn sort_indices(rows: &[Row], order: &mut [usize], sort: &SortConfig) {
    order.sort_by(|&a, &b| sort.compare(&rows[a], &rows[b]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn people() -> Vec<Row> {
        vec![
            Row::from_value(json!({"name": "Bob", "age": 30})),
            Row::from_value(json!({"name": "Amy", "age": 25})),
            Row::from_value(json!({"name": "Cid", "age": 40})),
        ]
    }

    fn names(rows: &[Row], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| rows[i].cell_text("name")).collect()
    }

    #[test]
    fn test_click_cycle() {
        let name = Ustr::from("name");
        let age = Ustr::from("age");

        let first = SortConfig::after_click(None, name);
        assert_eq!(first.direction, SortDirection::Ascending);

        let second = SortConfig::after_click(Some(&first), name);
        assert_eq!(second.direction, SortDirection::Descending);

        let third = SortConfig::after_click(Some(&second), name);
        assert_eq!(third.direction, SortDirection::Ascending, "no unsorted state");

        let other = SortConfig::after_click(Some(&second), age);
        assert_eq!(other, SortConfig::ascending("age"));
    }

    #[test]
    fn test_sort_strings_both_directions() {
        let rows = people();
        let mut order: Vec<usize> = (0..rows.len()).collect();

        sort_indices(&rows, &mut order, &SortConfig::ascending("name"));
        assert_eq!(names(&rows, &order), vec!["Amy", "Bob", "Cid"]);

        sort_indices(&rows, &mut order, &SortConfig::descending("name"));
        assert_eq!(names(&rows, &order), vec!["Cid", "Bob", "Amy"]);
    }

    #[test]
    fn test_numbers_compare_numerically() {
        let rows = vec![
            Row::from_value(json!({"n": 100})),
            Row::from_value(json!({"n": 9})),
            Row::from_value(json!({"n": 10.5})),
            Row::from_value(json!({"n": -3})),
        ];
        let mut order: Vec<usize> = (0..rows.len()).collect();
        sort_indices(&rows, &mut order, &SortConfig::ascending("n"));
        assert_eq!(order, vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_equal_values_keep_input_order() {
        let rows = vec![
            Row::from_value(json!({"house": "H1", "id": "a"})),
            Row::from_value(json!({"house": "H2", "id": "b"})),
            Row::from_value(json!({"house": "H1", "id": "c"})),
            Row::from_value(json!({"house": "H2", "id": "d"})),
        ];
        let mut order: Vec<usize> = (0..rows.len()).collect();
        sort_indices(&rows, &mut order, &SortConfig::ascending("house"));
        assert_eq!(order, vec![0, 2, 1, 3]);

        let mut order: Vec<usize> = (0..rows.len()).collect();
        sort_indices(&rows, &mut order, &SortConfig::descending("house"));
        assert_eq!(order, vec![1, 3, 0, 2], "ties stay in input order");
    }

    #[test]
    fn test_mixed_kinds_order_by_kind() {
        let rows = vec![
            Row::from_value(json!({"v": "text"})),
            Row::from_value(json!({"v": 5})),
            Row::from_value(json!({})),
            Row::from_value(json!({"v": true})),
            Row::from_value(json!({"v": null})),
        ];
        let mut order: Vec<usize> = (0..rows.len()).collect();
        sort_indices(&rows, &mut order, &SortConfig::ascending("v"));
        assert_eq!(order, vec![2, 4, 3, 1, 0]);
    }

    #[test]
    fn test_large_integers_compare_exactly() {
        let a = json!(9_007_199_254_740_993_u64);
        let b = json!(9_007_199_254_740_992_u64);
        assert_eq!(compare_values(Some(&a), Some(&b)), Ordering::Greater);
    }
}
