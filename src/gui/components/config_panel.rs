// src/gui/components/config_panel.rs

use eframe::egui::{self, DragValue};
use crate::{config::options::WaitMode, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Configuration");
    ui.add_space(6.0);

    let running = app.is_running();
    let opts = &mut app.state.options;
    let gui = &mut app.state.gui;

    ui.add_enabled_ui(!running, |ui| {
        egui::Grid::new("config_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("API host:");
                ui.add(egui::TextEdit::singleline(&mut opts.host).desired_width(280.0));
                ui.end_row();

                ui.label("Job name prefix:");
                ui.add(egui::TextEdit::singleline(&mut opts.job_prefix)
                    .hint_text("Job")
                    .desired_width(200.0));
                ui.end_row();

                ui.label("Radius (m):");
                ui.add(DragValue::new(&mut opts.params.radius).range(100..=100_000).speed(100));
                ui.end_row();

                ui.label("Depth:");
                ui.add(DragValue::new(&mut opts.params.depth).range(1..=100));
                ui.end_row();

                ui.label("Max time on server (min):");
                ui.add(DragValue::new(&mut opts.params.max_time).range(1..=600));
                ui.end_row();

                ui.label("Wait per job (min):");
                ui.add(DragValue::new(&mut gui.wait_time_min).range(1..=600));
                ui.end_row();

                ui.label("Language:");
                ui.add(egui::TextEdit::singleline(&mut opts.params.lang).desired_width(60.0));
                ui.end_row();

                ui.label("");
                ui.checkbox(&mut opts.params.fast_mode, "Fast mode");
                ui.end_row();

                ui.label("");
                ui.checkbox(&mut opts.params.email, "Extract emails");
                ui.end_row();

                ui.label("After submitting:");
                ui.vertical(|ui| {
                    ui.radio_value(&mut opts.wait_mode, WaitMode::QuickCheck, "Check once and move on");
                    ui.radio_value(&mut opts.wait_mode, WaitMode::Full, "Wait for the result and save it");
                });
                ui.end_row();
            });
    });

    ui.add_space(8.0);
    ui.label(format!("Results go to {}", opts.results_dir().display()));
}
