//! Scrapes a volleyball league schedule, keeps one team's matches and
//! publishes them as an iCalendar file and a JSON snapshot.

pub mod config;
pub mod datetime;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod filter;
pub mod ical;
pub mod model;
pub mod pagination;
pub mod parser;
pub mod pipeline;
pub mod records;
pub mod snapshot;
pub mod venue;

pub use config::{Config, Layout};
pub use error::ScheduleError;
pub use pipeline::{write_artifacts, Artifacts, Pipeline};
