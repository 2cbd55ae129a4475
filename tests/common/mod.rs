#![allow(dead_code)]

use std::collections::VecDeque;

use volley_calendar::fetcher::PageFetcher;
use volley_calendar::{Config, Layout, ScheduleError};

/// Serves canned responses in order; anything past the script is a 404.
pub struct ScriptedFetcher {
    responses: VecDeque<Result<String, ScheduleError>>,
    pub requested: Vec<u32>,
}

impl ScriptedFetcher {
    pub fn new(responses: Vec<Result<String, ScheduleError>>) -> Self {
        Self { responses: responses.into(), requested: Vec::new() }
    }

    pub fn pages(pages: &[String]) -> Self {
        Self::new(pages.iter().cloned().map(Ok).collect())
    }
}

impl PageFetcher for ScriptedFetcher {
    fn fetch_page(&mut self, page: u32) -> Result<String, ScheduleError> {
        self.requested.push(page);
        self.responses.pop_front().unwrap_or(Err(ScheduleError::Status { page, code: 404 }))
    }
}

pub fn transport_error(page: u32) -> Result<String, ScheduleError> {
    Err(ScheduleError::Transport { page, message: "connection reset".to_string() })
}

/// A one-round page in the container layout.
pub fn round_page(label: &str, date: &str, venue: &str, home: &str, away: &str) -> String {
    format!(
        r#"<html><body>
<h2>{label}</h2>
<div class="partido">
  <span class="fecha">{date}</span>
  <span class="pabellon">{venue}</span>
  <table><tr><td>{home}</td><td>{away}</td><td></td></tr></table>
</div>
<div class="partido">
  <span class="fecha">{date}</span>
  <span class="pabellon">PALMA ESPORTS</span>
  <table><tr><td>PALMA ESPORTS</td><td>RAFAL VELL</td><td></td></tr></table>
</div>
</body></html>"#
    )
}

pub fn empty_page() -> String {
    include_str!("../fixtures/jornada_vacia.html").to_string()
}

pub fn tables_page() -> String {
    include_str!("../fixtures/calendario_tablas.html").to_string()
}

pub fn test_config(layout: Layout) -> Config {
    Config { layout, request_delay_ms: 0, uid_namespace: "test".to_string(), ..Config::default() }
}

/// Undo RFC 5545 line folding so assertions can match whole property values.
pub fn unfold(ics: &str) -> String {
    ics.replace("\r\n ", "").replace("\r\n\t", "")
}
