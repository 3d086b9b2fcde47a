//! Writes a synthetic `dpeda_data.csv` for trying the dashboard without the real dataset.
//!
//! Usage: `generate-sample [OUTPUT]` (default `data/dpeda_data.csv`).

use std::path::PathBuf;

use anyhow::{Context, Result};

const HEADER: [&str; 8] = [
    "Entity",
    "Code",
    "Year",
    "undernourishment_rate(%)",
    "Global Hunger Index (2021)",
    "calorie_supply_per_person(kcal/person/day)",
    "stunting_rate(%)",
    "agri_employment_share(%)",
];

/// Name, code, and starting levels for
/// (undernourishment %, hunger index, kcal, stunting %, agri employment %).
const ENTITIES: &[(&str, &str, [f64; 5])] = &[
    ("India", "IND", [21.0, 38.0, 2250.0, 52.0, 62.0]),
    ("China", "CHN", [23.0, 25.0, 2550.0, 32.0, 55.0]),
    ("Brazil", "BRA", [14.0, 15.0, 2800.0, 19.0, 22.0]),
    ("Nigeria", "NGA", [9.0, 40.0, 2200.0, 44.0, 48.0]),
    ("Korea, South", "KOR", [2.5, 5.0, 3000.0, 4.0, 17.0]),
    ("Cote d'Ivoire", "CIV", [18.0, 33.0, 2350.0, 35.0, 50.0]),
    // aggregates: filtered out by the dashboard
    ("World", "OWID_WRL", [15.0, 20.0, 2600.0, 33.0, 40.0]),
    ("Sub-Saharan Africa", "", [28.0, 35.0, 2150.0, 42.0, 60.0]),
];

/// Annual drift applied to each starting level.
const TRENDS: [f64; 5] = [-0.35, -0.6, 12.0, -0.7, -0.8];

const FIRST_YEAR: i32 = 1985;
const LAST_YEAR: i32 = 2020;

/// Probability that a metric cell is left blank.
const BLANK_RATE: f64 = 0.12;

/// Small deterministic generator (SplitMix64) so reruns produce identical files.
struct SplitMix {
    state: u64,
}

impl SplitMix {
    fn new(seed: u64) -> Self {
        SplitMix { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in [0, 1).
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in [-1, 1).
    fn jitter(&mut self) -> f64 {
        self.unit() * 2.0 - 1.0
    }
}

fn format_metric(index: usize, value: f64) -> String {
    match index {
        2 => format!("{value:.0}"),
        _ => format!("{:.1}", value.max(0.0)),
    }
}

fn main() -> Result<()> {
    let out: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/dpeda_data.csv"));

    if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut writer = csv::Writer::from_path(&out)
        .with_context(|| format!("creating {}", out.display()))?;
    writer.write_record(HEADER).context("writing header")?;

    let mut rng = SplitMix::new(42);
    let mut rows = 0usize;

    for (entity, code, start) in ENTITIES {
        for year in FIRST_YEAR..=LAST_YEAR {
            let elapsed = (year - FIRST_YEAR) as f64;
            let mut record = vec![entity.to_string(), code.to_string(), year.to_string()];

            for (i, (&base, &trend)) in start.iter().zip(TRENDS.iter()).enumerate() {
                // the hunger index is only published every few years
                let sparse = i == 1 && year % 5 != 0;
                if sparse || rng.unit() < BLANK_RATE {
                    record.push(String::new());
                    continue;
                }
                let noise = rng.jitter() * base.abs() * 0.02;
                record.push(format_metric(i, base + trend * elapsed + noise));
            }

            writer
                .write_record(&record)
                .with_context(|| format!("writing {entity} {year}"))?;
            rows += 1;
        }
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {rows} rows to {}", out.display());
    Ok(())
}
