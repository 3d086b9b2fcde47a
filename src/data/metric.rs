use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Metric catalogue
// ---------------------------------------------------------------------------

/// The statistics the dashboard can compare.
///
/// The serde identifier is stable and independent of both the CSV column
/// name and the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    Undernourishment,
    HungerIndex,
    CalorieSupply,
    Stunting,
    AgriEmployment,
}

/// How a metric value is rendered in tooltips and tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// One decimal place followed by `%`.
    Percent,
    /// One decimal place.
    Decimal,
    /// Rounded to an integer followed by ` kcal`.
    Kilocalories,
}

impl ValueFormat {
    /// Halves round away from zero (`12.25` → `12.3`), not to the even digit.
    pub fn apply(self, value: f64) -> String {
        let tenths = (value * 10.0).round() / 10.0;
        match self {
            ValueFormat::Percent => format!("{tenths:.1}%"),
            ValueFormat::Decimal => format!("{tenths:.1}"),
            ValueFormat::Kilocalories => format!("{:.0} kcal", value.round()),
        }
    }
}

impl Metric {
    /// Every metric, in dropdown order.
    pub const ALL: [Metric; 5] = [
        Metric::Undernourishment,
        Metric::HungerIndex,
        Metric::CalorieSupply,
        Metric::Stunting,
        Metric::AgriEmployment,
    ];

    /// Source CSV column.
    pub fn column(self) -> &'static str {
        match self {
            Metric::Undernourishment => "undernourishment_rate(%)",
            Metric::HungerIndex => "Global Hunger Index (2021)",
            Metric::CalorieSupply => "calorie_supply_per_person(kcal/person/day)",
            Metric::Stunting => "stunting_rate(%)",
            Metric::AgriEmployment => "agri_employment_share(%)",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Undernourishment => "Prevalence of Undernourishment (%)",
            Metric::HungerIndex => "Global Hunger Index Score",
            Metric::CalorieSupply => "Daily Calorie Supply (kcal)",
            Metric::Stunting => "Child Stunting Rate (%)",
            Metric::AgriEmployment => "Agricultural Employment Share (%)",
        }
    }

    pub fn value_format(self) -> ValueFormat {
        match self {
            Metric::HungerIndex => ValueFormat::Decimal,
            Metric::CalorieSupply => ValueFormat::Kilocalories,
            Metric::Undernourishment | Metric::Stunting | Metric::AgriEmployment => {
                ValueFormat::Percent
            }
        }
    }

    pub fn format_value(self, value: f64) -> String {
        self.value_format().apply(value)
    }
}
