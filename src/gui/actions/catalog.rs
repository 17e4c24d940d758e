// src/gui/actions/catalog.rs
//
// Reload and the two "new ..." forms. Every change goes to disk first, then the
// catalog is re-read and the check lists rebuilt from it.

use crate::{
    catalog::{Catalog, Location, create_keyword_file, create_location_file, parse_keywords},
    config::state::{CategoryDraft, LocationDraft},
    gui::app::App,
};

pub fn reload(app: &mut App) {
    match Catalog::load(&app.state.options.root) {
        Ok(catalog) => {
            app.categories.rebuild_with(catalog.categories.clone(), |e| e.name.clone());
            app.locations.rebuild_with(catalog.locations.clone(), |e| e.name.clone());
            app.status(format!(
                "Loaded {} categories, {} locations",
                catalog.categories.len(),
                catalog.locations.len()
            ));
            app.catalog = catalog;

            // Indices may have shifted.
            app.focused_location = None;
            app.location_info = None;
            app.refresh_keyword_preview();
        }
        Err(e) => {
            loge!("UI: Reload failed: {}", e);
            app.status(format!("Reload failed: {e}"));
        }
    }
}

pub fn add_category(app: &mut App) {
    let draft = &app.state.gui.category_draft;
    let keywords = parse_keywords(&draft.keywords);

    match create_keyword_file(&app.state.options.keywords_dir(), &draft.name, &keywords) {
        Ok(entry) => {
            app.category_notice = Some(format!("Created {}", entry.file_name()));
            app.state.gui.category_draft = CategoryDraft::default();
            reload(app);
        }
        Err(e) => {
            loge!("UI: New category failed: {}", e);
            app.category_notice = Some(format!("Could not create category: {e}"));
        }
    }
}

pub fn add_location(app: &mut App) {
    let draft = &app.state.gui.location_draft;
    let location = Location {
        zoom: draft.zoom,
        lat: s!(draft.lat.trim()),
        lon: s!(draft.lon.trim()),
    };

    match create_location_file(&app.state.options.location_dir(), &draft.name, &location) {
        Ok(entry) => {
            app.location_notice = Some(format!("Created {}", entry.file_name()));
            app.state.gui.location_draft = LocationDraft::default();
            reload(app);
        }
        Err(e) => {
            loge!("UI: New location failed: {}", e);
            app.location_notice = Some(format!("Could not create location: {e}"));
        }
    }
}
