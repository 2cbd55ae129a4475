use std::path::PathBuf;
use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::venue::VenueDictionary;

/// Which markup variant the upstream serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One index page; every `table.calendario-completo` is a round headed by a `th`.
    Tables,
    /// One page per round; every `div.partido` holds date, venue and an inner table.
    Containers,
}

/// Run settings. `Default` reproduces the competition this tool was written for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub competition_param: String,
    pub competition_id: String,
    pub page_param: String,
    pub layout: Layout,
    pub team_keyword: String,
    pub timezone: Tz,
    pub event_duration_minutes: i64,
    pub request_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub max_pages: u32,
    pub max_consecutive_failures: u32,
    pub user_agent: String,
    pub referer: String,
    pub calendar_name: String,
    pub uid_namespace: String,
    pub summary_prefix: String,
    pub description_footer: String,
    pub fallback_location: String,
    pub ics_path: PathBuf,
    pub json_path: PathBuf,
    pub venues: VenueDictionary,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://www.voleibolib.net/JSON/get_calendario.asp".to_string(),
            competition_param: "id".to_string(),
            competition_id: "7946".to_string(),
            page_param: "jornada".to_string(),
            layout: Layout::Tables,
            team_keyword: "BUNYOLA".to_string(),
            timezone: chrono_tz::Europe::Madrid,
            event_duration_minutes: 120,
            request_delay_ms: 1_000,
            request_timeout_secs: 15,
            max_pages: 60,
            max_consecutive_failures: 3,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
            referer: "https://www.voleibolib.net/".to_string(),
            calendar_name: "Voleibol CV Bunyola".to_string(),
            uid_namespace: "cv-bunyola-7946".to_string(),
            summary_prefix: "🏐 ".to_string(),
            description_footer: "Actualizado autom.".to_string(),
            fallback_location: "Consultar web oficial".to_string(),
            ics_path: PathBuf::from("cv_bunyola.ics"),
            json_path: PathBuf::from("matches.json"),
            venues: VenueDictionary::default(),
        }
    }
}

impl Config {
    /// Parse a JSON config; missing keys keep their defaults.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn event_duration(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.event_duration_minutes)
    }
}
