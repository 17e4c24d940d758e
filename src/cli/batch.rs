// src/cli/batch.rs
use std::io::{BufRead, Write};
use std::sync::atomic::AtomicBool;

use crate::{
    Error, Result,
    batch::{self, BatchPlan},
    catalog::Catalog,
    config::options::{BatchOptions, Selector},
    progress::ConsoleProgress,
    prompt::Prompter,
};

/// Non-interactive batch: show what will run, confirm, run, report.
pub fn run_batch_mode<R: BufRead, W: Write>(opts: &BatchOptions, prompter: &mut Prompter<R, W>) -> Result<()> {
    let catalog = Catalog::load(&opts.root)?;
    if catalog.categories.is_empty() {
        return Err(Error::Invalid(format!("No keyword files in {}", opts.keywords_dir().display())));
    }
    if catalog.locations.is_empty() {
        return Err(Error::Invalid(format!("No location files in {}", opts.location_dir().display())));
    }

    let plan = BatchPlan::build(&catalog, opts);
    print_plan(prompter, &catalog, &plan)?;

    if plan.is_empty() {
        return Err(Error::Selection(s!("nothing to run: no usable category or location selected")));
    }

    print_config(prompter, opts, &plan)?;

    if !opts.dry_run && !opts.assume_yes && !prompter.confirm("\nContinue with the batch?")? {
        prompter.say("Cancelled")?;
        logf!("CLI: Batch cancelled at confirmation");
        return Ok(());
    }

    let cancel = AtomicBool::new(false);
    let mut progress = ConsoleProgress::default();
    let (summary, path) = batch::execute(&plan, opts, &cancel, &mut progress)?;

    prompter.say("")?;
    prompter.say("BATCH COMPLETED")?;
    prompter.say(&format!("Total jobs: {}", summary.total_jobs))?;
    prompter.say(&format!("Submitted: {}", summary.submitted_jobs()))?;
    prompter.say(&format!("Successful: {}", summary.successful_jobs))?;
    prompter.say(&format!("Failed: {}", summary.failed_jobs))?;
    prompter.say(&format!("Summary: {}", path.display()))?;
    Ok(())
}

fn print_plan<R: BufRead, W: Write>(p: &mut Prompter<R, W>, catalog: &Catalog, plan: &BatchPlan) -> Result<()> {
    p.say(&format!("Categories selected ({} of {}):", plan.categories.len(), catalog.categories.len()))?;
    for cat in &plan.categories {
        p.say(&format!("  - {} ({} keywords)", cat.entry.name, cat.keywords.len()))?;
    }
    p.say(&format!("Locations selected ({} of {}):", plan.locations.len(), catalog.locations.len()))?;
    for loc in &plan.locations {
        p.say(&format!("  - {}", loc.entry.name))?;
    }

    for ix in &plan.rejected_categories {
        p.say(&format!("Ignoring category index {ix} (1-{} available)", catalog.categories.len()))?;
    }
    for ix in &plan.rejected_locations {
        p.say(&format!("Ignoring location index {ix} (1-{} available)", catalog.locations.len()))?;
    }
    for note in &plan.notes {
        p.say(note)?;
    }
    Ok(())
}

fn print_config<R: BufRead, W: Write>(p: &mut Prompter<R, W>, opts: &BatchOptions, plan: &BatchPlan) -> Result<()> {
    let sel = |s: &Selector| match s {
        Selector::All => s!("all"),
        Selector::Indices(ix) => ix.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(","),
    };
    let params = &opts.params;

    p.say("\nConfiguration:")?;
    p.say(&format!("  API host: {}", opts.host))?;
    p.say(&format!("  Categories: {}  Locations: {}", sel(&opts.categories), sel(&opts.locations)))?;
    p.say(&format!("  Keyword filter: {}", opts.keywords.describe()))?;
    p.say(&format!("  Radius: {}m  Depth: {}  Max time: {} min", params.radius, params.depth, params.max_time))?;
    p.say(&format!("  Language: {}  Fast mode: {}  Email: {}", params.lang, params.fast_mode, params.email))?;
    p.say(&format!(
        "  Wait per job: {} min, checking every {} s",
        opts.poll.timeout.as_secs() / 60,
        opts.poll.interval.as_secs()
    ))?;
    if !opts.job_prefix.is_empty() {
        p.say(&format!("  Job prefix: {}", opts.job_prefix))?;
    }
    p.say(&format!(
        "  Total jobs: {} ({} categories x {} locations)",
        plan.job_count(),
        plan.categories.len(),
        plan.locations.len()
    ))?;
    if opts.dry_run {
        p.say("  DRY RUN: nothing will be submitted")?;
    }
    Ok(())
}
