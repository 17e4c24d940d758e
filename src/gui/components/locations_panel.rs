// src/gui/components/locations_panel.rs

use eframe::egui::{self, DragValue};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let running = app.is_running();
    let mut changed = false;

    ui.columns(2, |cols| {
        let ui = &mut cols[0];
        ui.heading(format!("Locations ({})", app.locations.len()));

        ui.horizontal(|ui| {
            if ui.add_enabled(!running, egui::Button::new("All")).clicked() {
                app.locations.set_all(true);
                changed = true;
            }
            if ui.add_enabled(!running, egui::Button::new("None")).clicked() {
                app.locations.set_all(false);
                changed = true;
            }
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("locations_scroll")
            .show(ui, |ui| {
                if app.locations.is_empty() {
                    ui.label("No location files found.");
                }
                for ix in 0..app.locations.len() {
                    let Some(entry) = app.locations.get(ix) else { continue };
                    let name = format!("{}. {}", ix + 1, entry.name);
                    ui.horizontal(|ui| {
                        let mut checked = app.locations.is_checked(ix);
                        if ui.add_enabled(!running, egui::Checkbox::without_text(&mut checked)).changed() {
                            app.locations.set(ix, checked);
                            changed = true;
                        }
                        let focused = app.focused_location == Some(ix);
                        if ui.selectable_label(focused, name).clicked() {
                            app.focus_location(ix);
                        }
                    });
                }
            });

        let ui = &mut cols[1];
        ui.heading("Details");
        match &app.location_info {
            None => { ui.label("Click a location to see its coordinates."); }
            Some(Ok(loc)) => {
                egui::Grid::new("location_info").num_columns(2).show(ui, |ui| {
                    ui.label("Zoom:");
                    ui.label(loc.zoom.to_string());
                    ui.end_row();
                    ui.label("Latitude:");
                    ui.label(&loc.lat);
                    ui.end_row();
                    ui.label("Longitude:");
                    ui.label(&loc.lon);
                    ui.end_row();
                });
            }
            Some(Err(e)) => { ui.colored_label(egui::Color32::LIGHT_RED, e); }
        }

        ui.separator();
        ui.heading("New location");
        let draft = &mut app.state.gui.location_draft;
        egui::Grid::new("new_location").num_columns(2).show(ui, |ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut draft.name);
            ui.end_row();
            ui.label("Zoom:");
            ui.add(DragValue::new(&mut draft.zoom).range(0..=21));
            ui.end_row();
            ui.label("Latitude:");
            ui.text_edit_singleline(&mut draft.lat);
            ui.end_row();
            ui.label("Longitude:");
            ui.text_edit_singleline(&mut draft.lon);
            ui.end_row();
        });
        if ui.add_enabled(!running, egui::Button::new("Create location")).clicked() {
            actions::catalog::add_location(app);
        }
        if let Some(n) = &app.location_notice {
            ui.label(n);
        }
    });

    if changed {
        logf!("UI: Locations checked {}/{}", app.locations.checked_count(), app.locations.len());
    }
}
