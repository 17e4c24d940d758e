// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself. Switching to the
// Execution tab re-syncs the checkboxes into the options so its summary is current.

use eframe::egui;
use crate::gui::{app::App, router::{self, Tab}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.state.gui.current_tab_index;

        for (idx, tab) in router::all_tabs().iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, tab.title()).clicked() && !selected {
                let prev = app.current_tab();
                app.set_current_index(idx);
                logf!("UI: Tab switch {:?} → {:?}", prev, tab);

                if *tab == Tab::Execution {
                    app.sync_selection_into_options();
                }
            }
        }
    });
}
