use super::model::Row;

// ---------------------------------------------------------------------------
// Line-oriented CSV parser
// ---------------------------------------------------------------------------

/// Output of [`parse_csv`]: header names plus the rows that matched them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// Parse comma-separated text whose first line is the header row.
///
/// Data fields may be wrapped in double quotes to protect embedded commas.
/// Rows whose field count differs from the header count are dropped without
/// error. Doubled quotes (`""`) inside a quoted field are not treated as an
/// escaped quote; they simply toggle quoting twice.
pub fn parse_csv(text: &str) -> ParsedCsv {
    let mut lines = text.trim().lines();

    let headers: Vec<String> = match lines.next() {
        Some(line) if !line.trim().is_empty() => line.split(',').map(clean_field).collect(),
        _ => return ParsedCsv::default(),
    };

    let rows = lines
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let values = split_record(line);
            (values.len() == headers.len()).then(|| Row::from_pairs(&headers, values))
        })
        .collect();

    ParsedCsv { headers, rows }
}

/// Split one record on commas that are not inside double quotes.
fn split_record(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(clean_field(&std::mem::take(&mut current))),
            other => current.push(other),
        }
    }
    values.push(clean_field(&current));
    values
}

fn clean_field(raw: &str) -> String {
    raw.trim().replace('"', "")
}
