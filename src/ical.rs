use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, Event, EventLike, Property};

use crate::config::Config;
use crate::model::{Kickoff, MatchRecord};

/// Renders match records as an iCalendar document.
#[derive(Debug, Clone)]
pub struct CalendarEmitter {
    calendar_name: String,
    duration: chrono::Duration,
    summary_prefix: String,
    description_footer: String,
}

impl CalendarEmitter {
    pub fn from_config(config: &Config) -> Self {
        Self {
            calendar_name: config.calendar_name.clone(),
            duration: config.event_duration(),
            summary_prefix: config.summary_prefix.clone(),
            description_footer: config.description_footer.clone(),
        }
    }

    /// One VEVENT per record, in record order. `generated_at` becomes every DTSTAMP
    /// so identical input renders identical output.
    pub fn build(&self, records: &[MatchRecord], generated_at: DateTime<Utc>) -> Calendar {
        let mut calendar = Calendar::new();
        calendar.append_property(Property::new("X-WR-CALNAME", &self.calendar_name));
        for record in records {
            calendar.push(self.event_for(record, generated_at));
        }
        calendar.done()
    }

    /// Folded, escaped iCalendar text.
    pub fn render(&self, records: &[MatchRecord], generated_at: DateTime<Utc>) -> String {
        self.build(records, generated_at).to_string()
    }

    pub fn summary(&self, record: &MatchRecord) -> String {
        format!("{}{} vs {}", self.summary_prefix, record.home_team, record.away_team)
    }

    pub fn description(&self, record: &MatchRecord) -> String {
        if self.description_footer.is_empty() {
            record.details()
        } else {
            format!("{}\n\n{}", record.details(), self.description_footer)
        }
    }

    fn event_for(&self, record: &MatchRecord, generated_at: DateTime<Utc>) -> Event {
        let mut event = Event::new();
        event
            .uid(&record.uid)
            .timestamp(generated_at)
            .summary(&self.summary(record))
            .description(&self.description(record))
            .location(&record.location);

        match record.kickoff {
            Kickoff::AllDay(date) => {
                event.starts(date);
                if let Some(next) = date.succ_opt() {
                    event.ends(next);
                }
            }
            Kickoff::Timed(start) => {
                event.starts(start).ends(start + self.duration);
            }
        }
        event.done()
    }
}
