// src/batch/plan.rs
use crate::{
    catalog::{Catalog, CatalogEntry, Location, read_keywords, read_location},
    config::options::BatchOptions,
    selection::resolve,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedCategory {
    pub entry: CatalogEntry,
    /// After the keyword filter.
    pub keywords: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedLocation {
    pub entry: CatalogEntry,
    pub location: Location,
}

/// Everything a run needs, read from disk up front.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchPlan {
    pub categories: Vec<PlannedCategory>,
    pub locations: Vec<PlannedLocation>,
    /// 1-based indices from the options that matched nothing.
    pub rejected_categories: Vec<usize>,
    pub rejected_locations: Vec<usize>,
    /// Human-readable reasons for entries that dropped out.
    pub notes: Vec<String>,
}

impl BatchPlan {
    pub fn build(catalog: &Catalog, opts: &BatchOptions) -> Self {
        let mut plan = BatchPlan::default();

        let cats = resolve(&opts.categories, &catalog.categories);
        plan.rejected_categories = cats.rejected;

        let locs = resolve(&opts.locations, &catalog.locations);
        plan.rejected_locations = locs.rejected;

        for entry in cats.items {
            let all = match read_keywords(&entry.path) {
                Ok(k) => k,
                Err(e) => {
                    loge!("Plan: Can't read {}: {}", entry.path.display(), e);
                    plan.notes.push(format!("Skipping category {}: {e}", entry.name));
                    continue;
                }
            };
            let keywords = opts.keywords.apply(&all);
            if keywords.is_empty() {
                let why = if all.is_empty() {
                    format!("Category {} has no keywords", entry.name)
                } else {
                    format!("No keywords matching '{}' in category {}", opts.keywords.describe(), entry.name)
                };
                logd!("Plan: {}", why);
                plan.notes.push(why);
                continue;
            }
            plan.categories.push(PlannedCategory { entry, keywords });
        }

        for entry in locs.items {
            match read_location(&entry.path) {
                Ok(location) => plan.locations.push(PlannedLocation { entry, location }),
                Err(e) => {
                    loge!("Plan: {}", e);
                    plan.notes.push(format!("Skipping location {}: {e}", entry.name));
                }
            }
        }

        logf!(
            "Plan: {} categories x {} locations = {} jobs ({} notes)",
            plan.categories.len(),
            plan.locations.len(),
            plan.job_count(),
            plan.notes.len()
        );
        plan
    }

    pub fn job_count(&self) -> usize {
        self.categories.len() * self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.job_count() == 0
    }
}
