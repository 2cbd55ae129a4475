use std::thread;
use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::config::{Config, Layout};
use crate::error::ScheduleError;
use crate::fetcher::PageFetcher;
use crate::model::MatchRecord;
use crate::parser::PageParser;
use crate::records::RecordBuilder;

/// Why the page loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    EmptyPage,
    Status(u16),
    IndexComplete,
    TooManyFailures,
    PageLimit,
}

#[derive(Debug, Clone)]
pub struct PaginationOutcome {
    pub records: Vec<MatchRecord>,
    pub fetches: u32,
    pub failed_pages: Vec<u32>,
    pub termination: Termination,
}

/// Walks page indices upward from 1 until the source runs dry.
#[derive(Debug, Clone)]
pub struct PaginationController {
    max_pages: u32,
    delay: Duration,
    max_consecutive_failures: u32,
}

impl PaginationController {
    pub fn new(max_pages: u32, delay: Duration, max_consecutive_failures: u32) -> Self {
        Self { max_pages: max_pages.max(1), delay, max_consecutive_failures: max_consecutive_failures.max(1) }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_pages, config.request_delay(), config.max_consecutive_failures)
    }

    /// Pages are fetched and folded strictly in order. A transport failure skips
    /// the page, except on page 1 where it means the host cannot be reached.
    #[instrument(level = "info", skip_all, fields(max_pages = self.max_pages))]
    pub fn run<F: PageFetcher>(
        &self,
        fetcher: &mut F,
        parser: &PageParser,
        builder: &RecordBuilder,
    ) -> Result<PaginationOutcome, ScheduleError> {
        let mut records = Vec::new();
        let mut failed_pages = Vec::new();
        let mut fetches = 0;
        let mut consecutive_failures = 0;
        let mut next_round = 1;
        let mut termination = Termination::PageLimit;

        for page in 1..=self.max_pages {
            if page > 1 && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }

            fetches += 1;
            let markup = match fetcher.fetch_page(page) {
                Ok(markup) => markup,
                Err(ScheduleError::Status { code, .. }) => {
                    info!(page, code, "Stopping at non-success page");
                    termination = Termination::Status(code);
                    break;
                }
                Err(e) if page == 1 => return Err(ScheduleError::Unreachable(e.to_string())),
                Err(e) => {
                    warn!(error = %e, page, "Skipping page after failed fetch");
                    failed_pages.push(page);
                    consecutive_failures += 1;
                    if consecutive_failures >= self.max_consecutive_failures {
                        termination = Termination::TooManyFailures;
                        break;
                    }
                    continue;
                }
            };
            consecutive_failures = 0;

            // Round pages are numbered by page so a skipped page never shifts later uids
            let parsed = parser.parse(&markup, next_round.max(page));
            if parsed.is_empty() {
                info!(page, "No match blocks on page, schedule complete");
                termination = Termination::EmptyPage;
                break;
            }

            next_round = next_round.max(page) + parsed.rounds;
            let page_records = builder.build(parsed.candidates);
            info!(page, rounds = parsed.rounds, records = page_records.len(), "Folded page");
            records.extend(page_records);

            if parser.layout() == Layout::Tables {
                termination = Termination::IndexComplete;
                break;
            }
        }

        info!(fetches, records = records.len(), failed = failed_pages.len(), ?termination, "Pagination finished");
        Ok(PaginationOutcome { records, fetches, failed_pages, termination })
    }
}
