use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::ScheduleError;
use crate::model::Kickoff;

pub const DATE_FORMAT: &str = "%d/%m/%Y";
pub const TIME_FORMAT: &str = "%H:%M";

/// Turns the schedule's `dd/mm/yyyy [HH:MM]` text into a `Kickoff`.
#[derive(Debug, Clone, Copy)]
pub struct DateTimeNormalizer {
    tz: Tz,
}

impl DateTimeNormalizer {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Date alone gives an all-day kickoff; date plus time is read as wall-clock
    /// time in the reference zone and stored as UTC.
    pub fn normalize(&self, date: &str, time: Option<&str>) -> Result<Kickoff, ScheduleError> {
        let day = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
            .map_err(|_| ScheduleError::DateParse(date.to_string()))?;
        match time.map(str::trim).filter(|t| !t.is_empty()) {
            None => Ok(Kickoff::AllDay(day)),
            Some(t) => {
                let clock = NaiveTime::parse_from_str(t, TIME_FORMAT)
                    .map_err(|_| ScheduleError::DateParse(format!("{} {}", date, t)))?;
                self.to_utc(day.and_time(clock)).map(Kickoff::Timed)
            }
        }
    }

    /// Same as `normalize` for a single string such as `12/10/2025 - 12:00`.
    pub fn parse_raw(&self, raw: &str) -> Result<Kickoff, ScheduleError> {
        let (date, time) = split_date_time(raw).ok_or_else(|| ScheduleError::DateParse(raw.to_string()))?;
        self.normalize(date, time)
    }

    /// Resolves the zone's offset for that specific date. On the autumn
    /// fold the earlier instant is taken; times inside the spring gap do not exist.
    pub fn to_utc(&self, local: NaiveDateTime) -> Result<DateTime<Utc>, ScheduleError> {
        self.tz
            .from_local_datetime(&local)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| ScheduleError::Timezone(format!("{} does not exist in {}", local, self.tz)))
    }

    pub fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.tz).naive_local()
    }
}

/// Splits `date [-] [time]` into its positional parts. More than two
/// meaningful tokens is not a date.
pub fn split_date_time(raw: &str) -> Option<(&str, Option<&str>)> {
    let mut tokens = raw.split_whitespace().filter(|t| *t != "-");
    let date = tokens.next()?;
    let time = tokens.next();
    if tokens.next().is_some() {
        return None;
    }
    Some((date, time))
}

/// Pulls the trailing `dd/mm/yyyy` off a round heading like `Jornada 1 11/10/2025`.
pub fn date_in_label(label: &str) -> Option<&str> {
    label
        .split_whitespace()
        .rev()
        .find(|t| NaiveDate::parse_from_str(t, DATE_FORMAT).is_ok())
}
