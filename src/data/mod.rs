/// Data layer: CSV parsing, filtering, and series reshaping.
///
/// Architecture:
/// ```text
///   dpeda_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read + UTF-8 decode → text
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  text → header-keyed Rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  3-letter code, year ≥ 1990 → Dataset
///   └──────────┘
///        │   (per selection change)
///        ▼
///   ┌──────────┐
///   │  series   │  extract ×2 → align → Axis
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod metric;
pub mod model;
pub mod parser;
pub mod series;
