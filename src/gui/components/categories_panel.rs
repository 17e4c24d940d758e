// src/gui/components/categories_panel.rs
//
// Checkbox list on the left, merged keyword preview and the "new category"
// form on the right. Clicks go straight into `app.categories`.

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let running = app.is_running();
    let mut changed = false;

    ui.columns(2, |cols| {
        let ui = &mut cols[0];
        ui.heading(format!("Categories ({})", app.categories.len()));

        ui.horizontal(|ui| {
            if ui.add_enabled(!running, egui::Button::new("All")).clicked() {
                app.categories.set_all(true);
                changed = true;
            }
            if ui.add_enabled(!running, egui::Button::new("None")).clicked() {
                app.categories.set_all(false);
                changed = true;
            }
            if ui.add_enabled(!running, egui::Button::new("Reload")).clicked() {
                actions::catalog::reload(app);
                changed = true;
            }
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("categories_scroll")
            .show(ui, |ui| {
                if app.categories.is_empty() {
                    ui.label("No keyword files found.");
                }
                for ix in 0..app.categories.len() {
                    let Some(entry) = app.categories.get(ix) else { continue };
                    let label = format!("{}. {}", ix + 1, entry.name);
                    let mut checked = app.categories.is_checked(ix);
                    if ui.add_enabled(!running, egui::Checkbox::new(&mut checked, label)).changed() {
                        app.categories.set(ix, checked);
                        changed = true;
                    }
                }
            });

        let ui = &mut cols[1];
        ui.heading(format!("Selected keywords ({})", app.keyword_preview.len()));
        egui::ScrollArea::vertical()
            .id_salt("keyword_preview_scroll")
            .max_height(220.0)
            .show(ui, |ui| {
                for k in &app.keyword_preview {
                    ui.label(k);
                }
            });

        ui.separator();
        ui.heading("New category");
        let draft = &mut app.state.gui.category_draft;
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut draft.name);
        });
        ui.label("Keywords (one per line):");
        ui.add(egui::TextEdit::multiline(&mut draft.keywords).desired_rows(6));
        if ui.add_enabled(!running, egui::Button::new("Create category")).clicked() {
            actions::catalog::add_category(app);
            changed = true;
        }
        if let Some(n) = &app.category_notice {
            ui.label(n);
        }
    });

    if changed {
        app.refresh_keyword_preview();
        logf!("UI: Categories checked {}/{}", app.categories.checked_count(), app.categories.len());
    }
}
