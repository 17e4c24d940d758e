// src/config/state.rs
use super::consts::*;
use super::options::BatchOptions;

/// Draft for the "new category" form.
#[derive(Clone, Debug, Default)]
pub struct CategoryDraft {
    pub name: String,
    /// One keyword per line, as typed.
    pub keywords: String,
}

/// Draft for the "new location" form.
#[derive(Clone, Debug)]
pub struct LocationDraft {
    pub name: String,
    pub zoom: u32,
    pub lat: String,
    pub lon: String,
}

impl Default for LocationDraft {
    fn default() -> Self {
        Self { name: s!(), zoom: 12, lat: s!(), lon: s!() }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::TABS
    pub current_tab_index: usize,

    /// Minutes; converted into `PollConfig` at run time.
    pub wait_time_min: u64,

    pub category_draft: CategoryDraft,
    pub location_draft: LocationDraft,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_tab_index: 0,
            wait_time_min: DEFAULT_WAIT_TIME_MIN,
            category_draft: CategoryDraft::default(),
            location_draft: LocationDraft::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: BatchOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: BatchOptions::for_gui(),
            gui: GuiState::default(),
        }
    }
}
