use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::error::ScheduleError;
use crate::fetcher::PageFetcher;
use crate::ical::CalendarEmitter;
use crate::model::MatchRecord;
use crate::pagination::{PaginationController, PaginationOutcome};
use crate::parser::PageParser;
use crate::records::RecordBuilder;
use crate::snapshot::SnapshotEmitter;

/// Both output documents, fully rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub ics: String,
    pub json: String,
    pub matches: usize,
}

/// The whole ingest-and-emit run, assembled from one `Config`.
#[derive(Debug)]
pub struct Pipeline {
    parser: PageParser,
    builder: RecordBuilder,
    controller: PaginationController,
    calendar: CalendarEmitter,
    snapshot: SnapshotEmitter,
}

impl Pipeline {
    pub fn new(config: &Config) -> Result<Self, ScheduleError> {
        let calendar = CalendarEmitter::from_config(config);
        Ok(Self {
            parser: PageParser::new(config.layout)?,
            builder: RecordBuilder::from_config(config),
            controller: PaginationController::from_config(config),
            snapshot: SnapshotEmitter::new(calendar.clone()),
            calendar,
        })
    }

    pub fn collect<F: PageFetcher>(&self, fetcher: &mut F) -> Result<PaginationOutcome, ScheduleError> {
        self.controller.run(fetcher, &self.parser, &self.builder)
    }

    /// `None` when there is nothing to publish.
    pub fn render(
        &self,
        records: &[MatchRecord],
        generated_at: DateTime<Utc>,
    ) -> Result<Option<Artifacts>, ScheduleError> {
        if records.is_empty() {
            return Ok(None);
        }
        Ok(Some(Artifacts {
            ics: self.calendar.render(records, generated_at),
            json: self.snapshot.render(records)?,
            matches: records.len(),
        }))
    }

    #[instrument(level = "info", skip_all)]
    pub fn run<F: PageFetcher>(
        &self,
        fetcher: &mut F,
        generated_at: DateTime<Utc>,
    ) -> Result<Option<Artifacts>, ScheduleError> {
        let outcome = self.collect(fetcher)?;
        if !outcome.failed_pages.is_empty() {
            warn!(pages = ?outcome.failed_pages, "Some pages could not be fetched");
        }
        self.render(&outcome.records, generated_at)
    }
}

/// Writes both files next to their targets first, then renames them into place,
/// so a failure never leaves a half-written artifact behind.
pub fn write_artifacts(artifacts: &Artifacts, ics_path: &Path, json_path: &Path) -> Result<(), ScheduleError> {
    let ics_tmp = staging_path(ics_path);
    let json_tmp = staging_path(json_path);

    let staged = fs::write(&ics_tmp, &artifacts.ics).and_then(|_| fs::write(&json_tmp, &artifacts.json));
    if let Err(e) = staged {
        let _ = fs::remove_file(&ics_tmp);
        let _ = fs::remove_file(&json_tmp);
        return Err(e.into());
    }

    if let Err(e) = fs::rename(&ics_tmp, ics_path) {
        let _ = fs::remove_file(&ics_tmp);
        let _ = fs::remove_file(&json_tmp);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&json_tmp, json_path) {
        let _ = fs::remove_file(&json_tmp);
        return Err(e.into());
    }
    info!(ics = %ics_path.display(), json = %json_path.display(), matches = artifacts.matches, "Wrote calendar artifacts");
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
