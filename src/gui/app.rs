// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use eframe::egui;

use crate::{
    catalog::{Catalog, CatalogEntry, Location, read_keywords, read_location},
    config::{
        options::Selector,
        state::AppState,
    },
};

use super::{
    components,
    model::CheckList,
    progress::{JobRow, locked},
    router::{self, Tab},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Google Maps Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub catalog: Catalog,
    pub categories: CheckList<CatalogEntry>,
    pub locations: CheckList<CatalogEntry>,

    /// Merged, de-duplicated keywords of the checked categories.
    pub keyword_preview: Vec<String>,

    /// Location whose details show in the info panel.
    pub focused_location: Option<usize>,
    pub location_info: Option<Result<Location, String>>,

    /// Result of the last submit of each "new ..." form, shown under that form.
    pub category_notice: Option<String>,
    pub location_notice: Option<String>,

    /// Run requested, waiting for the user to confirm.
    pub confirm_pending: bool,

    // workers write here
    pub log: Arc<Mutex<Vec<String>>>,
    pub jobs: Arc<Mutex<Vec<JobRow>>>,
    pub status: Arc<Mutex<String>>,
    pub running: Arc<AtomicBool>,
    pub cancel: Arc<AtomicBool>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let catalog = match Catalog::load(&state.options.root) {
            Ok(c) => c,
            Err(e) => {
                loge!("Init: Catalog load failed: {}", e);
                Catalog::default()
            }
        };

        let status = if catalog.categories.is_empty() || catalog.locations.is_empty() {
            format!(
                "Found {} categories and {} locations. Add some in the Categories / Locations tabs.",
                catalog.categories.len(),
                catalog.locations.len()
            )
        } else {
            s!("Idle")
        };

        logf!("Init: categories={}, locations={}, host={}",
            catalog.categories.len(), catalog.locations.len(), state.options.host);

        Self {
            categories: CheckList::new(catalog.categories.clone(), false),
            locations: CheckList::new(catalog.locations.clone(), false),
            catalog,
            state,
            keyword_preview: Vec::new(),
            focused_location: None,
            location_info: None,
            category_notice: None,
            location_notice: None,
            confirm_pending: false,
            log: Arc::new(Mutex::new(Vec::new())),
            jobs: Arc::new(Mutex::new(Vec::new())),
            status: Arc::new(Mutex::new(status)),
            running: Arc::new(AtomicBool::new(false)),
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_tab(&self) -> Tab { router::tab_at(self.state.gui.current_tab_index) }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_tab_index = idx; }

    #[inline]
    pub fn is_running(&self) -> bool { self.running.load(Ordering::Relaxed) }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *locked(&self.status) = msg.into();
    }

    pub fn status_text(&self) -> String {
        locked(&self.status).clone()
    }

    /// Planned job count for the current checkboxes.
    pub fn job_count(&self) -> usize {
        self.categories.checked_count() * self.locations.checked_count()
    }

    /// Mirror the checkboxes → options (1-based, as `Selector` expects).
    pub fn sync_selection_into_options(&mut self) {
        let to_selector = |ix: Vec<usize>| Selector::Indices(ix.into_iter().map(|i| i + 1).collect());
        self.state.options.categories = to_selector(self.categories.checked_indices());
        self.state.options.locations = to_selector(self.locations.checked_indices());
    }

    /// Re-read every checked category and merge the keywords, first occurrence wins.
    pub fn refresh_keyword_preview(&mut self) {
        let mut merged: Vec<String> = Vec::new();
        for entry in self.categories.checked_items() {
            match read_keywords(&entry.path) {
                Ok(kws) => {
                    for k in kws {
                        if !merged.contains(&k) { merged.push(k); }
                    }
                }
                Err(e) => loge!("UI: Can't read {}: {}", entry.path.display(), e),
            }
        }
        logd!("UI: Keyword preview rebuilt ({} keywords)", merged.len());
        self.keyword_preview = merged;
    }

    pub fn focus_location(&mut self, ix: usize) {
        self.focused_location = Some(ix);
        self.location_info = self
            .locations
            .get(ix)
            .map(|entry| read_location(&entry.path).map_err(|e| e.to_string()));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            components::tabs::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.is_running() {
                    ui.add(egui::widgets::Spinner::new().size(14.0));
                }
                ui.label(self.status_text());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.current_tab() {
            Tab::Config => components::config_panel::draw(ui, self),
            Tab::Categories => components::categories_panel::draw(ui, self),
            Tab::Locations => components::locations_panel::draw(ui, self),
            Tab::Execution => components::execution_panel::draw(ui, self),
        });

        if self.confirm_pending {
            components::execution_panel::draw_confirm(ctx, self);
        }
    }
}
