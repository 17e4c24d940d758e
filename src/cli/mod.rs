// src/cli/mod.rs
use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{
    Error, Result,
    api::ApiClient,
    catalog::{Catalog, read_keywords},
    config::{
        consts::*,
        options::{BatchOptions, KeywordFilter, PollConfig},
    },
    prompt::Prompter,
    selection::parse_selector,
};

mod batch;
mod single;

pub use batch::run_batch_mode;
pub use single::run_single;

pub const HELP: &str = include_str!("../cli_help.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Batch(BatchOptions),
    Single { host: String, root: PathBuf },
    List { root: PathBuf },
    Help,
}

pub fn run() -> Result<()> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", HELP);
            Ok(())
        }
        Command::List { root } => list(&root, &mut io::stdout()),
        Command::Batch(opts) => run_batch_mode(&opts, &mut Prompter::stdio()),
        Command::Single { host, root } => {
            run_single(&mut Prompter::stdio(), &host, &root, |h| ApiClient::new(h))
        }
    }
}

/// Mode word first (`batch`, `single`, `list`; batch when omitted), then flags.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command> {
    let mut args = args.into_iter().peekable();

    let has_mode = matches!(args.peek().map(String::as_str), Some("batch" | "single" | "list"));
    let mode = if has_mode { args.next() } else { None };

    let mut opts = BatchOptions::default();
    let mut wait_min = DEFAULT_WAIT_TIME_MIN;
    let mut interval_secs = POLL_INTERVAL_SECS;
    let mut batch_only: Option<String> = None;

    while let Some(a) = args.next() {
        match a.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--host" => opts.host = next_value(&mut args, &a)?,
            "--root" => opts.root = PathBuf::from(next_value(&mut args, &a)?),
            flag => {
                batch_only.get_or_insert_with(|| s!(flag));
                match flag {
                    "--categories" => opts.categories = parse_selector(&next_value(&mut args, flag)?)?,
                    "--locations" => opts.locations = parse_selector(&next_value(&mut args, flag)?)?,
                    "--keywords" => opts.keywords = KeywordFilter::parse(&next_value(&mut args, flag)?),
                    "--radius" => opts.params.radius = next_parsed(&mut args, flag)?,
                    "--depth" => opts.params.depth = next_parsed(&mut args, flag)?,
                    "--max-time" => opts.params.max_time = next_parsed(&mut args, flag)?,
                    "--wait-time" => wait_min = next_parsed(&mut args, flag)?,
                    "--interval" => interval_secs = next_parsed(&mut args, flag)?,
                    "--job-prefix" => opts.job_prefix = next_value(&mut args, flag)?,
                    "--lang" => opts.params.lang = next_value(&mut args, flag)?,
                    "--no-fast-mode" => opts.params.fast_mode = false,
                    "--no-email" => opts.params.email = false,
                    "--yes" | "-y" => opts.assume_yes = true,
                    "--dry-run" => opts.dry_run = true,
                    other => return Err(Error::Usage(format!("Unknown arg: {other}"))),
                }
            }
        }
    }

    if interval_secs == 0 {
        return Err(Error::Usage(s!("--interval must be at least 1 second")));
    }
    if wait_min > MAX_WAIT_TIME_MIN {
        return Err(Error::Usage(format!("--wait-time must be at most {MAX_WAIT_TIME_MIN} minutes")));
    }
    opts.poll = PollConfig::from_minutes(wait_min, interval_secs);

    match mode.as_deref() {
        Some("single") | Some("list") if batch_only.is_some() => Err(Error::Usage(format!(
            "{} is only valid in batch mode",
            batch_only.unwrap_or_default()
        ))),
        Some("single") => Ok(Command::Single { host: opts.host, root: opts.root }),
        Some("list") => Ok(Command::List { root: opts.root }),
        _ => Ok(Command::Batch(opts)),
    }
}

fn next_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| Error::Usage(format!("Missing value for {flag}")))
}

fn next_parsed<T: FromStr, I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<T> {
    let v = next_value(args, flag)?;
    v.trim()
        .parse()
        .map_err(|_| Error::Usage(format!("Invalid value for {flag}: {v}")))
}

/// Numbered categories (with keyword counts) and locations under `root`.
pub fn list<W: Write>(root: &Path, out: &mut W) -> Result<()> {
    let catalog = Catalog::load(root)?;

    writeln!(out, "Categories ({}):", catalog.categories.len())?;
    for (i, entry) in catalog.categories.iter().enumerate() {
        match read_keywords(&entry.path) {
            Ok(k) => writeln!(out, "  {}. {} ({} keywords)", i + 1, entry.name, k.len())?,
            Err(e) => writeln!(out, "  {}. {} (unreadable: {e})", i + 1, entry.name)?,
        }
    }

    writeln!(out, "Locations ({}):", catalog.locations.len())?;
    for (i, entry) in catalog.locations.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, entry.name)?;
    }
    Ok(())
}
