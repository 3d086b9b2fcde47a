use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui;

use crate::color::Theme;
use crate::config::AppConfig;
use crate::data::loader::{self, LoadError};
use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

type LoadResult = Result<Dataset, LoadError>;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HungerCompareApp {
    pub state: AppState,
    pub theme: Theme,
    /// Receives the dataset from the loader thread; dropped once it arrives.
    pending: Option<Receiver<LoadResult>>,
}

impl HungerCompareApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let theme = Theme::neon();
        apply_theme(&cc.egui_ctx, &theme);

        let mut app = Self {
            state: AppState::new(config),
            theme,
            pending: None,
        };
        app.start_load(cc.egui_ctx.clone());
        app
    }

    /// Read the CSV off the UI thread. The result is picked up by [`Self::poll_load`].
    fn start_load(&mut self, ctx: egui::Context) {
        let path = self.state.config.data_path.clone();
        log::info!("Loading {}", path.display());

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // A closed receiver only means the window is already gone.
            let _ = tx.send(loader::load_file(&path));
            ctx.request_repaint();
        });

        self.state.loading = true;
        self.pending = Some(rx);
    }

    fn poll_load(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(LoadError::Interrupted),
        };
        self.pending = None;

        match result {
            Ok(dataset) => {
                self.state.set_dataset(dataset);
                self.state.render();
            }
            Err(e) => self.state.load_failed(&e),
        }
    }
}

fn apply_theme(ctx: &egui::Context, theme: &Theme) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = theme.background;
    visuals.window_fill = theme.background;
    visuals.extreme_bg_color = theme.background;
    visuals.widgets.noninteractive.bg_stroke.color = theme.grid;
    ctx.set_visuals(visuals);
}

impl eframe::App for HungerCompareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        // ---- Top panel: toolbar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: selectors ----
        egui::SidePanel::left("selection_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, &self.theme);
            });

        // ---- Bottom panel: aligned table ----
        if self.state.show_table {
            egui::TopBottomPanel::bottom("aligned_table")
                .resizable(true)
                .default_height(220.0)
                .show(ctx, |ui| {
                    table::aligned_table(ui, &self.state, &self.theme);
                });
        }

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::comparison_plot(ui, &mut self.state, &self.theme);
        });
    }
}
