use serde::{Deserialize, Serialize};

use crate::ical::CalendarEmitter;
use crate::model::MatchRecord;

/// One match in `matches.json`, the feed read by the calendar sync script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub name: String,
    pub home_team: String,
    pub away_team: String,
    /// `YYYY-MM-DD` when `all_day`, RFC 3339 UTC timestamp otherwise
    pub begin: String,
    pub all_day: bool,
    pub description: String,
    pub location: String,
    pub uid: String,
    pub round: String,
    #[serde(default)]
    pub result: String,
}

/// Serializes records to the JSON snapshot. Shares summary and description
/// wording with the calendar so both artifacts read the same.
#[derive(Debug, Clone)]
pub struct SnapshotEmitter {
    wording: CalendarEmitter,
}

impl SnapshotEmitter {
    pub fn new(wording: CalendarEmitter) -> Self {
        Self { wording }
    }

    pub fn entries(&self, records: &[MatchRecord]) -> Vec<SnapshotEntry> {
        records
            .iter()
            .map(|r| SnapshotEntry {
                name: self.wording.summary(r),
                home_team: r.home_team.clone(),
                away_team: r.away_team.clone(),
                begin: r.kickoff.to_iso8601(),
                all_day: r.is_all_day(),
                description: self.wording.description(r),
                location: r.location.clone(),
                uid: r.uid.clone(),
                round: r.round_label.clone(),
                result: r.result.clone().unwrap_or_default(),
            })
            .collect()
    }

    pub fn render(&self, records: &[MatchRecord]) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries(records))
    }
}
