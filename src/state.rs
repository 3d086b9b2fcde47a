use crate::config::AppConfig;
use crate::data::loader::LoadError;
use crate::data::metric::Metric;
use crate::data::model::{Axis, Dataset, Series};
use crate::data::series::{align, extract_series};

/// Shown in place of the chart when the dataset could not be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading data.";

// ---------------------------------------------------------------------------
// Selection + comparison model
// ---------------------------------------------------------------------------

/// Lifecycle of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing loaded yet, or the load failed.
    Uninitialized,
    /// Dataset present, chart not built yet.
    Loaded,
    /// Chart built; selection changes update it in place.
    Rendered,
}

/// What the three dropdowns currently point at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub metric: Metric,
    pub primary: String,
    pub compare: String,
}

/// Everything the chart needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub metric: Metric,
    pub title: String,
    pub primary: Series,
    pub compare: Series,
    pub axis: Axis,
}

impl Comparison {
    fn build(dataset: &Dataset, selection: &Selection) -> Self {
        let mut comparison = Comparison {
            metric: selection.metric,
            title: String::new(),
            primary: Series::default(),
            compare: Series::default(),
            axis: Axis::default(),
        };
        comparison.update(dataset, selection);
        comparison
    }

    /// Re-extract both series for the new selection.
    fn update(&mut self, dataset: &Dataset, selection: &Selection) {
        let column = selection.metric.column();
        self.metric = selection.metric;
        self.primary = extract_series(dataset, &selection.primary, column);
        self.compare = extract_series(dataset, &selection.compare, column);
        self.axis = align(&self.primary, &self.compare);
        self.title = format!(
            "{} Comparison: {} vs {}",
            selection.metric.label(),
            selection.primary,
            selection.compare
        );
    }

    pub fn y_label(&self) -> &'static str {
        self.metric.label()
    }

    /// Series worth drawing; empty ones are left out of the chart.
    pub fn visible_series(&self) -> impl Iterator<Item = (Slot, &Series)> {
        [(Slot::Primary, &self.primary), (Slot::Compare, &self.compare)]
            .into_iter()
            .filter(|(_, s)| !s.is_empty())
    }

    /// One table row per axis year; `None` marks a gap.
    pub fn aligned_rows(&self) -> Vec<(i32, Option<f64>, Option<f64>)> {
        self.axis
            .years
            .iter()
            .map(|&y| (y, self.primary.value_at(y), self.compare.value_at(y)))
            .collect()
    }
}

/// `"{series}: {formatted value}"`, formatted for `metric`.
pub fn tooltip_text(metric: Metric, series_label: &str, value: f64) -> String {
    format!("{series_label}: {}", metric.format_value(value))
}

/// Which side of the comparison a series belongs to (drives its colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Primary,
    Compare,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    pub phase: Phase,

    /// Loaded dataset (None until the load finishes). Never mutated afterwards.
    pub dataset: Option<Dataset>,

    pub selection: Selection,

    /// The chart model, created once by [`AppState::render`].
    pub comparison: Option<Comparison>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether the initial load is still running.
    pub loading: bool,

    /// Show the aligned year-by-year table under the chart.
    pub show_table: bool,

    /// Set when the chart should refit its bounds on the next frame.
    pub bounds_dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let selection = Selection {
            metric: config.default_metric,
            ..Selection::default()
        };
        Self {
            config,
            phase: Phase::Uninitialized,
            dataset: None,
            selection,
            comparison: None,
            status_message: None,
            loading: false,
            show_table: false,
            bounds_dirty: false,
        }
    }

    /// Ingest the loaded dataset and pick the default countries.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        let primary = if dataset.has_country(&self.config.primary_country) {
            Some(self.config.primary_country.as_str())
        } else {
            dataset.nth_country(0)
        };
        let compare = if dataset.has_country(&self.config.compare_country) {
            Some(self.config.compare_country.as_str())
        } else {
            dataset.nth_country(1).or_else(|| dataset.nth_country(0))
        };
        self.selection.primary = primary.unwrap_or_default().to_string();
        self.selection.compare = compare.unwrap_or_default().to_string();

        log::info!(
            "Loaded {} rows covering {} countries",
            dataset.len(),
            dataset.countries.len()
        );
        if dataset.is_empty() {
            log::warn!("No country rows left after filtering");
        }
        for metric in Metric::ALL {
            if !dataset.columns.iter().any(|c| c == metric.column()) {
                log::warn!("Column '{}' not found; {metric:?} will be empty", metric.column());
            }
        }

        self.dataset = Some(dataset);
        self.phase = Phase::Loaded;
        self.status_message = None;
        self.loading = false;
    }

    /// Record a failed load. The state stays uninitialised; there is no retry.
    pub fn load_failed(&mut self, error: &LoadError) {
        log::error!("Data loading error: {error}");
        self.phase = Phase::Uninitialized;
        self.status_message = Some(LOAD_ERROR_MESSAGE.to_string());
        self.loading = false;
    }

    /// Build the initial chart. Only acts in [`Phase::Loaded`].
    pub fn render(&mut self) {
        if self.phase != Phase::Loaded {
            return;
        }
        if let Some(ds) = &self.dataset {
            self.comparison = Some(Comparison::build(ds, &self.selection));
            self.phase = Phase::Rendered;
            self.bounds_dirty = true;
        }
    }

    /// Recompute the chart model after a selection change.
    fn refresh(&mut self) {
        log::debug!("Selection changed: {:?}", self.selection);
        if self.phase != Phase::Rendered {
            return;
        }
        if let (Some(ds), Some(cmp)) = (&self.dataset, &mut self.comparison) {
            cmp.update(ds, &self.selection);
            self.bounds_dirty = true;
        }
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.selection.metric = metric;
        self.refresh();
    }

    pub fn set_primary(&mut self, country: String) {
        self.selection.primary = country;
        self.refresh();
    }

    pub fn set_compare(&mut self, country: String) {
        self.selection.compare = country;
        self.refresh();
    }

    /// Clear and return the refit flag.
    pub fn take_bounds_dirty(&mut self) -> bool {
        std::mem::take(&mut self.bounds_dirty)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::data::loader::load_text;

    const CSV: &str = "\
Entity,Code,Year,undernourishment_rate(%),stunting_rate(%),calorie_supply_per_person(kcal/person/day)
India,IND,1990,21.0,50.1,2200
India,IND,2000,18.5,,2300
India,IND,2010,,38.0,2450
China,CHN,1995,12.0,30.2,2600
China,CHN,2000,10.1,20.0,2900
Brazil,BRA,2000,5.0,7.0,3000
World,OWID_WRL,2000,13.0,30.0,2800
";

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(load_text(CSV));
        state
    }

    fn io_error() -> LoadError {
        LoadError::Read {
            path: PathBuf::from("data/dpeda_data.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        }
    }

    #[test]
    fn load_failure_stays_uninitialized() {
        let mut state = AppState::default();
        state.loading = true;
        state.load_failed(&io_error());
        assert_eq!(state.phase, Phase::Uninitialized);
        assert_eq!(state.status_message.as_deref(), Some(LOAD_ERROR_MESSAGE));
        assert!(!state.loading);

        state.render();
        assert!(state.comparison.is_none());
        state.set_metric(Metric::Stunting);
        assert!(state.comparison.is_none());
    }

    #[test]
    fn load_then_render() {
        let mut state = loaded();
        assert_eq!(state.phase, Phase::Loaded);
        assert_eq!(state.selection.primary, "India");
        assert_eq!(state.selection.compare, "China");
        assert!(state.comparison.is_none());

        state.render();
        assert_eq!(state.phase, Phase::Rendered);
        assert!(state.take_bounds_dirty());
        assert!(!state.take_bounds_dirty());

        let cmp = state.comparison.as_ref().unwrap();
        assert_eq!(
            cmp.title,
            "Prevalence of Undernourishment (%) Comparison: India vs China"
        );
        assert_eq!(cmp.primary.years().collect::<Vec<_>>(), vec![1990, 2000]);
        assert_eq!(cmp.axis.years, vec![1990, 1995, 2000]);
    }

    #[test]
    fn selection_change_updates_in_place() {
        let mut state = loaded();
        state.render();
        state.take_bounds_dirty();

        state.set_metric(Metric::Stunting);
        state.set_compare("Brazil".to_string());
        assert_eq!(state.phase, Phase::Rendered);
        assert!(state.bounds_dirty);

        let cmp = state.comparison.as_ref().unwrap();
        assert_eq!(cmp.metric, Metric::Stunting);
        assert_eq!(cmp.y_label(), "Child Stunting Rate (%)");
        assert_eq!(cmp.primary.years().collect::<Vec<_>>(), vec![1990, 2010]);
        assert_eq!(cmp.compare.label, "Brazil");
        assert_eq!(cmp.axis.years, vec![1990, 2000, 2010]);
        assert_eq!(
            cmp.aligned_rows(),
            vec![
                (1990, Some(50.1), None),
                (2000, None, Some(7.0)),
                (2010, Some(38.0), None),
            ]
        );
    }

    #[test]
    fn empty_series_are_hidden() {
        let mut state = loaded();
        state.render();
        state.set_compare("World".to_string());

        let cmp = state.comparison.as_ref().unwrap();
        let slots: Vec<Slot> = cmp.visible_series().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec![Slot::Primary]);
    }

    #[test]
    fn defaults_fall_back_to_sorted_countries() {
        let config = AppConfig {
            primary_country: "Atlantis".into(),
            compare_country: "Lemuria".into(),
            ..AppConfig::default()
        };
        let mut state = AppState::new(config);
        state.set_dataset(load_text(CSV));
        assert_eq!(state.selection.primary, "Brazil");
        assert_eq!(state.selection.compare, "China");
    }

    #[test]
    fn single_country_is_used_twice() {
        let mut state = AppState::new(AppConfig {
            primary_country: "Nowhere".into(),
            compare_country: "Nowhere".into(),
            ..AppConfig::default()
        });
        state.set_dataset(load_text("Entity,Code,Year\nPeru,PER,2000\n"));
        assert_eq!(state.selection.primary, "Peru");
        assert_eq!(state.selection.compare, "Peru");
    }

    #[test]
    fn empty_dataset_selects_nothing() {
        let mut state = AppState::default();
        state.set_dataset(load_text(""));
        assert_eq!(state.selection.primary, "");
        state.render();
        let cmp = state.comparison.as_ref().unwrap();
        assert_eq!(cmp.visible_series().count(), 0);
        assert!(cmp.axis.is_empty());
    }

    #[test]
    fn tooltip_uses_metric_format() {
        let mut state = loaded();
        state.set_metric(Metric::CalorieSupply);
        state.render();
        let cmp = state.comparison.as_ref().unwrap();
        assert_eq!(tooltip_text(cmp.metric, "India", 2449.6), "India: 2450 kcal");
        assert_eq!(cmp.primary.points.len(), 3);
    }
}
