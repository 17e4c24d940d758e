// src/cli/single.rs
//! One job, every choice asked for interactively.

use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::atomic::AtomicBool;

use crate::{
    Error, Result,
    api::{JobApi, PollOutcome, wait_for_completion},
    catalog::{Catalog, read_keywords, read_location},
    config::{
        consts::*,
        options::PollConfig,
    },
    core::timestamp,
    job::{JobParams, JobRequest},
    progress::Progress,
    prompt::Prompter,
    store,
};

/// Routes progress lines into the prompter's output.
struct PromptProgress<'a, R: BufRead, W: Write>(&'a mut Prompter<R, W>);

impl<R: BufRead, W: Write> Progress for PromptProgress<'_, R, W> {
    fn log(&mut self, msg: &str) {
        let _ = self.0.say(msg);
    }
}

/// `connect` builds the API client from the host the user typed.
pub fn run_single<R, W, A, F>(p: &mut Prompter<R, W>, default_host: &str, root: &Path, connect: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    A: JobApi,
    F: FnOnce(&str) -> Result<A>,
{
    p.say("===== GOOGLE MAPS SCRAPER: SINGLE JOB =====")?;

    let host = p.ask_default("API host", default_host)?;
    let name = p.ask_default("Job name", &format!("{DEFAULT_JOB_STEM}_{}", timestamp()))?;

    let catalog = Catalog::load(root)?;
    if catalog.categories.is_empty() {
        return Err(Error::Invalid(format!("No keyword files under {}", root.join(KEYWORDS_DIR).display())));
    }
    if catalog.locations.is_empty() {
        return Err(Error::Invalid(format!("No location files under {}", root.join(LOCATION_DIR).display())));
    }

    let cat_ix = p.choose_one("Keyword categories", &catalog.category_names())?;
    let category = &catalog.categories[cat_ix];
    let available = read_keywords(&category.path)?;
    if available.is_empty() {
        return Err(Error::Invalid(format!("Category {} has no keywords", category.name)));
    }

    p.say("\nKeywords in this category:")?;
    let keywords: Vec<String> = p
        .choose_many(&available)?
        .into_iter()
        .map(|i| available[i].clone())
        .collect();
    p.say(&format!("\nSelected {} keywords", keywords.len()))?;

    let loc_ix = p.choose_one("Locations", &catalog.location_names())?;
    let loc_entry = &catalog.locations[loc_ix];
    let location = read_location(&loc_entry.path)?;

    let defaults = JobParams::default();
    let params = JobParams {
        radius: p.ask_number_default("\nSearch radius in metres", defaults.radius)?,
        depth: p.ask_number_default("Search depth", defaults.depth)?,
        max_time: p.ask_number_default("Max time in minutes", defaults.max_time)?,
        ..defaults
    };

    let request = JobRequest::new(name, keywords, &location, &params);

    p.say("\nRequest summary:")?;
    p.say(&format!("Name: {}", request.name))?;
    p.say(&format!("Category: {}", category.name))?;
    p.say(&format!("Keywords: {}", request.keywords_preview(5)))?;
    p.say(&format!("Total keywords: {}", request.keywords.len()))?;
    p.say(&format!("Location: {}", loc_entry.name))?;
    p.say(&format!("Coordinates: Lat {}, Lon {}", location.lat, location.lon))?;
    p.say(&format!("Zoom: {}", location.zoom))?;
    p.say(&format!("Radius: {} metres", request.radius))?;
    p.say(&format!("Depth: {}", request.depth))?;
    p.say(&format!("Max time: {} minutes", request.max_time))?;

    if !p.confirm("\nSubmit this job?")? {
        p.say("Cancelled")?;
        return Ok(());
    }

    let api = connect(&host)?;
    let id = match api.submit(&request) {
        Ok(id) => id,
        Err(e) => {
            loge!("CLI: Single job submit failed: {}", e);
            p.say("Could not create the job")?;
            return Err(e);
        }
    };
    logf!("CLI: Single job {} created ({})", id, request.name);
    p.say(&format!("\nJob created with ID: {id}"))?;

    if !p.confirm("Monitor the job status?")? {
        return Ok(());
    }

    let cancel = AtomicBool::new(false);
    let poll = PollConfig::default();
    let outcome = {
        let mut progress = PromptProgress(&mut *p);
        wait_for_completion(&api, &id, &poll, &cancel, &mut progress)
    };

    match outcome {
        PollOutcome::Completed(status) => {
            let result = status.result.unwrap_or_default();
            let path = store::save_job_result(
                &root.join(RESULTS_DIR),
                &loc_entry.name,
                &store::keywords_tag(&request.keywords),
                &timestamp(),
                &result,
            )?;
            p.say(&format!("Results saved to: {}", path.display()))?;
        }
        PollOutcome::Failed { .. } => {}
        PollOutcome::TimedOut => {
            p.say(&format!(
                "Stopped waiting after {} minutes; the job keeps running on the server",
                poll.timeout.as_secs() / 60
            ))?;
        }
        PollOutcome::Cancelled => p.say("Monitoring stopped")?,
    }
    Ok(())
}
