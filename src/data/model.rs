use std::collections::{BTreeMap, BTreeSet};

/// Column holding the ISO-3166-alpha-3-like region code.
pub const CODE_COLUMN: &str = "Code";
/// Column holding the country / region name.
pub const ENTITY_COLUMN: &str = "Entity";
/// Column holding the observation year.
pub const YEAR_COLUMN: &str = "Year";

// ---------------------------------------------------------------------------
// Row – one parsed CSV line
// ---------------------------------------------------------------------------

/// A single CSV record: column name → raw string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub fields: BTreeMap<String, String>,
}

impl Row {
    /// Pair headers with values. A repeated header keeps the later value.
    pub fn from_pairs(headers: &[String], values: impl IntoIterator<Item = String>) -> Self {
        let fields = headers.iter().cloned().zip(values).collect();
        Row { fields }
    }

    /// Raw value of a column, if the column exists.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn entity(&self) -> Option<&str> {
        self.get(ENTITY_COLUMN)
    }

    pub fn code(&self) -> Option<&str> {
        self.get(CODE_COLUMN)
    }

    /// The year column parsed as an integer.
    pub fn year(&self) -> Option<i32> {
        self.get(YEAR_COLUMN)?.trim().parse().ok()
    }

    /// A metric column parsed as a finite number. Empty and non-numeric cells yield `None`.
    pub fn number(&self, column: &str) -> Option<f64> {
        let raw = self.get(column)?.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

// ---------------------------------------------------------------------------
// Dataset – the filtered, immutable working set
// ---------------------------------------------------------------------------

/// The loaded dataset with the country index used by the dropdowns.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Surviving rows in file order.
    pub rows: Vec<Row>,
    /// Header columns as they appeared in the file.
    pub columns: Vec<String>,
    /// Sorted, unique entity names.
    pub countries: BTreeSet<String>,
}

impl Dataset {
    /// Build the country index from already-filtered rows.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Row>) -> Self {
        let countries = rows
            .iter()
            .filter_map(|row| row.entity())
            .map(str::to_string)
            .collect();
        Dataset {
            rows,
            columns,
            countries,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_country(&self, name: &str) -> bool {
        self.countries.contains(name)
    }

    /// The n-th country in sorted order.
    pub fn nth_country(&self, n: usize) -> Option<&str> {
        self.countries.iter().nth(n).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Point / Series / Axis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub year: i32,
    pub value: f64,
}

/// One country's values for one metric, ordered by year.
///
/// Duplicate years are kept in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<Point>,
}

impl Series {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.points.iter().map(|p| p.year)
    }

    /// Value recorded for `year`. With duplicate years the last one wins.
    pub fn value_at(&self, year: i32) -> Option<f64> {
        self.points
            .iter()
            .rev()
            .find(|p| p.year == year)
            .map(|p| p.value)
    }

    /// Points as `[x, y]` pairs for plotting.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|p| [p.year as f64, p.value])
            .collect()
    }
}

/// Sorted, duplicate-free years shared by two series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Axis {
    pub years: Vec<i32>,
}

impl Axis {
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        Row {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn number_rejects_blank_and_text() {
        let r = row(&[("a", ""), ("b", "n/a"), ("c", " 4.5 "), ("d", "NaN"), ("e", "inf")]);
        assert_eq!(r.number("a"), None);
        assert_eq!(r.number("b"), None);
        assert_eq!(r.number("c"), Some(4.5));
        assert_eq!(r.number("d"), None);
        assert_eq!(r.number("e"), None);
        assert_eq!(r.number("missing"), None);
    }

    #[test]
    fn dataset_indexes_sorted_unique_countries() {
        let rows = vec![
            row(&[(ENTITY_COLUMN, "Peru")]),
            row(&[(ENTITY_COLUMN, "Chad")]),
            row(&[(ENTITY_COLUMN, "Peru")]),
        ];
        let ds = Dataset::from_rows(vec![ENTITY_COLUMN.to_string()], rows);
        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.countries.iter().cloned().collect::<Vec<_>>(),
            vec!["Chad".to_string(), "Peru".to_string()]
        );
        assert_eq!(ds.nth_country(1), Some("Peru"));
        assert_eq!(ds.nth_country(2), None);
    }

    #[test]
    fn value_at_prefers_last_duplicate() {
        let s = Series {
            label: "X".into(),
            points: vec![
                Point { year: 2000, value: 1.0 },
                Point { year: 2000, value: 2.0 },
                Point { year: 2001, value: 3.0 },
            ],
        };
        assert_eq!(s.value_at(2000), Some(2.0));
        assert_eq!(s.value_at(1999), None);
        assert_eq!(s.plot_points()[2], [2001.0, 3.0]);
    }
}
