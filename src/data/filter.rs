use super::model::Row;

/// Earliest year kept in the working dataset.
pub const MIN_YEAR: i32 = 1990;

/// Length of a country-level region code. Aggregates use longer or empty codes.
pub const REGION_CODE_LEN: usize = 3;

/// Whether a row describes a single country at or after [`MIN_YEAR`].
///
/// A row passes when:
/// * its region code is exactly three characters long, and
/// * its year parses as an integer no earlier than [`MIN_YEAR`].
///
/// A missing column fails the predicate.
pub fn is_country_row(row: &Row) -> bool {
    let code_ok = row
        .code()
        .is_some_and(|code| code.chars().count() == REGION_CODE_LEN);
    code_ok && row.year().is_some_and(|year| year >= MIN_YEAR)
}

/// Keep only country rows, preserving order.
pub fn filter_rows(rows: Vec<Row>) -> Vec<Row> {
    rows.into_iter().filter(is_country_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CODE_COLUMN, YEAR_COLUMN};

    fn row(code: &str, year: &str) -> Row {
        Row {
            fields: [
                (CODE_COLUMN.to_string(), code.to_string()),
                (YEAR_COLUMN.to_string(), year.to_string()),
            ]
            .into_iter()
            .collect(),
        }
    }

    #[test]
    fn boundary_year_is_included() {
        assert!(is_country_row(&row("IND", "1990")));
        assert!(!is_country_row(&row("IND", "1989")));
    }

    #[test]
    fn code_must_be_three_characters() {
        assert!(!is_country_row(&row("", "2000")));
        assert!(!is_country_row(&row("IN", "2000")));
        assert!(!is_country_row(&row("OWID_WRL", "2000")));
        assert!(is_country_row(&row("CHN", "2000")));
    }

    #[test]
    fn non_integer_year_is_excluded() {
        assert!(!is_country_row(&row("IND", "")));
        assert!(!is_country_row(&row("IND", "2000.5")));
        assert!(!is_country_row(&row("IND", "twenty")));
    }

    #[test]
    fn missing_columns_fail() {
        assert!(!is_country_row(&Row::default()));
    }

    #[test]
    fn filter_keeps_order() {
        let rows = vec![
            row("BRA", "2001"),
            row("WLD1", "2001"),
            row("ARG", "1985"),
            row("ARG", "1999"),
        ];
        let kept = filter_rows(rows);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].code(), Some("BRA"));
        assert_eq!(kept[1].code(), Some("ARG"));
    }
}
