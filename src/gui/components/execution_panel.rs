// src/gui/components/execution_panel.rs
//
// Summary of what a run would do, run/cancel, the live log and the table of
// submitted jobs. The log and table are read from the worker's shared buffers.

use eframe::egui::{self, widgets::Spinner};
use egui_extras::{Column, TableBuilder};
use crate::{
    config::options::WaitMode,
    gui::{actions, app::App, progress::locked},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Execution");
    draw_summary(ui, app);

    ui.add_space(6.0);
    let running = app.is_running();
    ui.horizontal(|ui| {
        if ui.add_enabled(!running, egui::Button::new("Run batch")).clicked() {
            request_run(app);
        }
        if ui.add_enabled(running, egui::Button::new("Cancel")).clicked() {
            actions::run::cancel(app);
        }
        if ui.add_enabled(!running, egui::Button::new("Clear log")).clicked() {
            locked(&app.log).clear();
            locked(&app.jobs).clear();
        }
        if running {
            ui.add(Spinner::new().size(16.0));
        }
    });

    ui.separator();
    let avail = ui.available_height();

    ui.label("Log");
    egui::ScrollArea::vertical()
        .id_salt("exec_log_scroll")
        .max_height(avail * 0.5)
        .stick_to_bottom(true)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for line in locked(&app.log).iter() {
                ui.monospace(line);
            }
        });

    ui.separator();
    ui.label("Submitted jobs");
    draw_jobs_table(ui, app);
}

fn draw_summary(ui: &mut egui::Ui, app: &App) {
    let cats = app.categories.checked_count();
    let locs = app.locations.checked_count();
    let opts = &app.state.options;
    let mode = match opts.wait_mode {
        WaitMode::QuickCheck => "check once per job",
        WaitMode::Full => "wait for every result",
    };

    ui.label(format!("Categories: {cats}   Locations: {locs}"));
    ui.label(format!("{cats} categories x {locs} locations = {} jobs", app.job_count()));
    ui.label(format!(
        "Host: {}   Radius: {}m   Depth: {}   Max time: {} min   Mode: {}",
        opts.host, opts.params.radius, opts.params.depth, opts.params.max_time, mode
    ));
}

fn request_run(app: &mut App) {
    if app.categories.checked_count() == 0 {
        app.status("Select at least one category");
        return;
    }
    if app.locations.checked_count() == 0 {
        app.status("Select at least one location");
        return;
    }
    app.confirm_pending = true;
}

/// Modal-ish confirmation before a run starts.
pub fn draw_confirm(ctx: &egui::Context, app: &mut App) {
    let mut answer: Option<bool> = None;
    egui::Window::new("Confirm")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!(
                "Run {} jobs ({} categories x {} locations)?",
                app.job_count(),
                app.categories.checked_count(),
                app.locations.checked_count()
            ));
            ui.horizontal(|ui| {
                if ui.button("Run").clicked() { answer = Some(true); }
                if ui.button("Cancel").clicked() { answer = Some(false); }
            });
        });

    match answer {
        Some(true) => {
            app.confirm_pending = false;
            actions::run::start(app, ctx);
        }
        Some(false) => {
            app.confirm_pending = false;
            logd!("UI: Run declined");
        }
        None => {}
    }
}

fn draw_jobs_table(ui: &mut egui::Ui, app: &App) {
    let rows = locked(&app.jobs).clone();

    TableBuilder::new(ui)
        .id_salt("jobs_table")
        .striped(true)
        .column(Column::exact(70.0))
        .column(Column::initial(320.0).resizable(true).clip(true))
        .column(Column::initial(220.0).resizable(true).clip(true))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for title in ["Time", "Job", "ID", "Status"] {
                header.col(|ui| { ui.strong(title); });
            }
        })
        .body(|mut body| {
            for r in &rows {
                body.row(20.0, |mut row| {
                    row.col(|ui| { ui.label(&r.time); });
                    row.col(|ui| { ui.label(&r.name); });
                    row.col(|ui| { ui.monospace(&r.id); });
                    row.col(|ui| { ui.label(&r.status); });
                });
            }
        });
}
