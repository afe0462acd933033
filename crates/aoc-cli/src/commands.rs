//! The `aoc` subcommands.
//!
//! Each command writes user-facing text to `out` so the binary can pass
//! stdout and tests can pass a buffer. Fetching and converting are split so
//! the conversion half can be exercised without a network.

use std::io::Write;
use std::path::Path;

use aoc_markdown::{puzzle_part, response_article, MarkdownTranscoder};

use crate::client::Client;
use crate::error::Result;
use crate::output::{write_file, OutputMode};
use crate::puzzle::Puzzle;
use crate::session::{looks_like_key, SessionStore};
use crate::submission::SubmissionOutcome;

/// Store `key`, or show the stored key when none (or a blank one) is given.
pub fn session(store: &SessionStore, key: Option<&str>, out: &mut dyn Write) -> Result<()> {
    match key.map(str::trim).filter(|key| !key.is_empty()) {
        Some(key) => {
            if !looks_like_key(key) {
                writeln!(out, "Warning: That does not look like a key! Storing anyway.")?;
            }
            store.store(key)?;
            writeln!(out, "Stored session key.")?;
        }
        None => match store.load()? {
            Some(key) => writeln!(out, "Session Key: {key}")?,
            None => writeln!(out, "No session key has been set.")?,
        },
    }
    Ok(())
}

/// Markdown for part `part` of a puzzle page.
pub fn task_markdown(page: &str, part: u32, transcoder: &MarkdownTranscoder) -> Result<String> {
    let article = puzzle_part(page, part as usize)?;
    Ok(transcoder.convert(&article))
}

/// Fetch a puzzle description and write one part of it to `mode`.
pub fn task(
    client: &Client,
    transcoder: &MarkdownTranscoder,
    puzzle: &Puzzle,
    part: u32,
    mode: &OutputMode,
    out: &mut dyn Write,
) -> Result<()> {
    let page = client.description(puzzle)?;
    let markdown = task_markdown(&page, part, transcoder)?;
    mode.write(&markdown, out)
}

/// Fetch the puzzle input into `output`, or print it verbatim.
pub fn input(
    client: &Client,
    puzzle: &Puzzle,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let text = client.input(puzzle)?;
    match output {
        Some(path) => write_file(path, &text)?,
        None => {
            out.write_all(text.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}

/// Markdown and outcome of an answer-submission response page.
pub fn submission_markdown(
    page: &str,
    transcoder: &MarkdownTranscoder,
) -> Result<(String, SubmissionOutcome)> {
    let article = response_article(page)?;
    let outcome = SubmissionOutcome::classify(&article.text_content());
    Ok((transcoder.convert(&article), outcome))
}

/// Submit an answer and print the site's response.
pub fn submit(
    client: &Client,
    transcoder: &MarkdownTranscoder,
    puzzle: &Puzzle,
    part: u32,
    answer: &str,
    out: &mut dyn Write,
) -> Result<SubmissionOutcome> {
    let page = client.submit(puzzle, part, answer)?;
    let (markdown, outcome) = submission_markdown(&page, transcoder)?;
    tracing::info!(year = puzzle.year, day = puzzle.day, part, ?outcome, "answer submitted");
    out.write_all(markdown.as_bytes())?;
    out.flush()?;
    Ok(outcome)
}
