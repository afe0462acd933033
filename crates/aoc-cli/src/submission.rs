//! Classification of answer-submission responses.

use once_cell::sync::Lazy;
use regex::Regex;

static WAIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)you have (?P<wait>[0-9hms ]+?) left to wait").expect("valid wait regex")
});

/// What the site said about a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Correct,
    Incorrect,
    /// Rate limited; `wait` is the remaining time as the site phrased it
    TooSoon { wait: Option<String> },
    /// The part was already solved or is locked
    AlreadyComplete,
    Unknown,
}

impl SubmissionOutcome {
    /// Classify the text of a response article.
    pub fn classify(text: &str) -> Self {
        if text.contains("That's the right answer") {
            SubmissionOutcome::Correct
        } else if text.contains("That's not the right answer") {
            SubmissionOutcome::Incorrect
        } else if text.contains("You gave an answer too recently") {
            let wait = WAIT
                .captures(text)
                .and_then(|caps| caps.name("wait").map(|m| m.as_str().to_string()));
            SubmissionOutcome::TooSoon { wait }
        } else if text.contains("You don't seem to be solving the right level") {
            SubmissionOutcome::AlreadyComplete
        } else {
            SubmissionOutcome::Unknown
        }
    }
}
