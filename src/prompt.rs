// src/prompt.rs
//! Line-based questions for the interactive CLI mode.
//!
//! Generic over the reader and writer so the flows can be driven from a
//! `Cursor` in tests.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::{Error, Result, selection::parse_index_list};

pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    out: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn say(&mut self, msg: &str) -> Result<()> {
        writeln!(self.out, "{msg}")?;
        Ok(())
    }

    /// Print `question`, read one line, return it trimmed.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.out, "{question}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(s!(line.trim()))
    }

    /// Like [`ask`](Self::ask), with `default` shown in brackets and used on blank input.
    pub fn ask_default(&mut self, question: &str, default: &str) -> Result<String> {
        let answer = self.ask(&format!("{question} [{default}]: "))?;
        Ok(if answer.is_empty() { s!(default) } else { answer })
    }

    /// Blank or unparsable input keeps `default`.
    pub fn ask_number_default<T>(&mut self, question: &str, default: T) -> Result<T>
    where
        T: FromStr + ToString + Copy,
    {
        let answer = self.ask(&format!("{question} [{}]: ", default.to_string()))?;
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse() {
            Ok(v) => Ok(v),
            Err(_) => {
                self.say(&format!("Not a valid number, using {}", default.to_string()))?;
                Ok(default)
            }
        }
    }

    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(&format!("{question} (y/n): "))?;
        Ok(is_yes(&answer))
    }

    /// Numbered list, then ask until a valid 1-based index comes back.
    /// Returns the 0-based index.
    pub fn choose_one(&mut self, title: &str, names: &[String]) -> Result<usize> {
        if names.is_empty() {
            return Err(Error::Selection(format!("nothing to choose from: {title}")));
        }
        self.say(&format!("\n{title}:"))?;
        for (i, name) in names.iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, name))?;
        }
        loop {
            let answer = self.ask(&format!("Select (1-{}): ", names.len()))?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=names.len()).contains(&n) => return Ok(n - 1),
                _ => self.say("Invalid option, try again")?,
            }
        }
    }

    /// `all` (or blank) picks everything, otherwise an index list such as `1,3,5-7`.
    /// Garbage falls back to the first item; out-of-range indices are reported and dropped.
    /// Returns 0-based indices.
    pub fn choose_many(&mut self, names: &[String]) -> Result<Vec<usize>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        for (i, name) in names.iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, name))?;
        }
        let answer = self.ask("Select ('all' or numbers like 1,3,5-7): ")?;
        if answer.is_empty() || answer.eq_ignore_ascii_case("all") {
            return Ok((0..names.len()).collect());
        }

        let indices = match parse_index_list(&answer) {
            Ok(ix) => ix,
            Err(e) => {
                logd!("Prompt: {}", e);
                self.say("Invalid selection, using the first item")?;
                return Ok(vec![0]);
            }
        };

        let (valid, rejected): (Vec<usize>, Vec<usize>) =
            indices.into_iter().partition(|ix| (1..=names.len()).contains(ix));
        match rejected.len() {
            0 => {}
            1..=5 => {
                let list: Vec<String> = rejected.iter().map(|ix| ix.to_string()).collect();
                self.say(&format!("Ignoring {}: out of range", list.join(", ")))?;
            }
            n => self.say(&format!("Ignoring {n} indices: out of range"))?,
        }

        let mut picked: Vec<usize> = valid.into_iter().map(|ix| ix - 1).collect();
        if picked.is_empty() {
            self.say("Nothing valid selected, using the first item")?;
            picked.push(0);
        }
        Ok(picked)
    }
}

/// English and Spanish yes.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "s" | "si" | "sí")
}
