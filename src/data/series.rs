use std::collections::BTreeSet;

use super::model::{Axis, Dataset, Point, Series};

// ---------------------------------------------------------------------------
// Series extraction
// ---------------------------------------------------------------------------

/// Collect one country's values for `metric_column`, sorted by year.
///
/// Rows with a blank or non-numeric metric cell contribute nothing. The sort
/// is stable, so rows sharing a year stay in file order.
pub fn extract_series(dataset: &Dataset, country: &str, metric_column: &str) -> Series {
    let mut points: Vec<Point> = dataset
        .rows
        .iter()
        .filter(|row| row.entity() == Some(country))
        .filter_map(|row| {
            let value = row.number(metric_column)?;
            let year = row.year()?;
            Some(Point { year, value })
        })
        .collect();

    points.sort_by_key(|p| p.year);

    Series {
        label: country.to_string(),
        points,
    }
}

// ---------------------------------------------------------------------------
// Axis alignment
// ---------------------------------------------------------------------------

/// Union of the years of both series, ascending and without repeats.
pub fn align(a: &Series, b: &Series) -> Axis {
    let years: BTreeSet<i32> = a.years().chain(b.years()).collect();
    Axis {
        years: years.into_iter().collect(),
    }
}
