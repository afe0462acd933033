//! Blocking HTTP client for the puzzle site.

use aoc_config::SiteConfig;
use reqwest::blocking::{Client as HttpClient, ClientBuilder, RequestBuilder};
use reqwest::header::COOKIE;
use reqwest::StatusCode;

use crate::error::{AocError, Result};
use crate::puzzle::Puzzle;

/// One request per call; the session cookie is attached when present.
pub struct Client {
    http: HttpClient,
    base_url: String,
    session: Option<String>,
}

impl Client {
    pub fn new(site: &SiteConfig, session: Option<String>) -> Result<Self> {
        let http = http_builder(site).build()?;
        Ok(Self::from_parts(http, site, session))
    }

    fn from_parts(http: HttpClient, site: &SiteConfig, session: Option<String>) -> Self {
        Self {
            http,
            base_url: site.base_url.clone(),
            session,
        }
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// The puzzle description page.
    pub fn description(&self, puzzle: &Puzzle) -> Result<String> {
        let url = puzzle.url(&self.base_url);
        self.send(self.http.get(&url), &url)
    }

    /// The personal puzzle input.
    pub fn input(&self, puzzle: &Puzzle) -> Result<String> {
        let url = puzzle.input_url(&self.base_url);
        self.send(self.http.get(&url), &url)
    }

    /// Post an answer; returns the response page.
    pub fn submit(&self, puzzle: &Puzzle, part: u32, answer: &str) -> Result<String> {
        let url = puzzle.answer_url(&self.base_url);
        let form = [("level", part.to_string()), ("answer", answer.to_string())];
        self.send(self.http.post(&url).form(&form), &url)
    }

    fn send(&self, request: RequestBuilder, url: &str) -> Result<String> {
        let request = match &self.session {
            Some(key) => request.header(COOKIE, format!("session={key}")),
            None => request,
        };

        let response = request.send()?;
        let status = response.status();
        tracing::info!(%url, status = status.as_u16(), "request finished");
        check_status(status, url)?;
        Ok(response.text()?)
    }
}

fn http_builder(site: &SiteConfig) -> ClientBuilder {
    HttpClient::builder().user_agent(&site.user_agent)
}

/// 404 means the puzzle is not unlocked yet; other failures carry the status.
pub fn check_status(status: StatusCode, url: &str) -> Result<()> {
    if status == StatusCode::NOT_FOUND {
        Err(AocError::NotYetAvailable)
    } else if !status.is_success() {
        Err(AocError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    } else {
        Ok(())
    }
}
