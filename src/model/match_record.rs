use chrono::{DateTime, NaiveDate, Utc};

/// Start of a match: a bare calendar date or a UTC instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kickoff {
    AllDay(NaiveDate),
    Timed(DateTime<Utc>),
}

impl Kickoff {
    /// ISO-8601 rendering: `YYYY-MM-DD` for all-day, RFC 3339 with offset otherwise.
    pub fn to_iso8601(&self) -> String {
        match self {
            Kickoff::AllDay(date) => date.format("%Y-%m-%d").to_string(),
            Kickoff::Timed(dt) => dt.to_rfc3339(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    pub home_team: String,
    pub away_team: String,
    pub kickoff: Kickoff,
    pub location: String,
    pub round_label: String,
    pub round_index: u32,
    pub result: Option<String>,
    pub uid: String,
}

impl MatchRecord {
    pub fn is_all_day(&self) -> bool {
        matches!(self.kickoff, Kickoff::AllDay(_))
    }

    /// Round label followed by the result line when the match has been played.
    pub fn details(&self) -> String {
        match self.result.as_deref() {
            Some(result) if !result.is_empty() => format!("{}\nResultado: {}", self.round_label, result),
            _ => self.round_label.clone(),
        }
    }
}
