use tracing::{error, info_span, warn};

use crate::config::Config;
use crate::error::ScheduleError;

/// Source of raw schedule markup, one page at a time.
pub trait PageFetcher {
    /// `Err(Status)` for a non-success response, `Err(Transport)` for anything
    /// that kept a response from arriving.
    fn fetch_page(&mut self, page: u32) -> Result<String, ScheduleError>;
}

/// Blocking HTTP fetcher for the federation's calendar endpoint.
pub struct HttpFetcher {
    agent: ureq::Agent,
    base_url: String,
    competition_param: String,
    competition_id: String,
    page_param: String,
    user_agent: String,
    referer: String,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.request_timeout()))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            base_url: config.base_url.clone(),
            competition_param: config.competition_param.clone(),
            competition_id: config.competition_id.clone(),
            page_param: config.page_param.clone(),
            user_agent: config.user_agent.clone(),
            referer: config.referer.clone(),
        }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_page(&mut self, page: u32) -> Result<String, ScheduleError> {
        let response = {
            let _span = info_span!("schedule_fetch", url = %self.base_url, page).entered();
            self.agent
                .get(&self.base_url)
                .query(&self.competition_param, &self.competition_id)
                .query(&self.page_param, page.to_string())
                .header("User-Agent", &self.user_agent)
                .header("Referer", &self.referer)
                .call()
        };

        let response = response.map_err(|e| {
            error!(error = %e, page, "Request failed");
            ScheduleError::Transport { page, message: e.to_string() }
        })?;

        let code = response.status().as_u16();
        if !(200..300).contains(&code) {
            warn!(code, page, "Non-success status");
            return Err(ScheduleError::Status { page, code });
        }

        response.into_body().read_to_string().map_err(|e| {
            error!(error = %e, page, "Failed to read response body");
            ScheduleError::Transport { page, message: e.to_string() }
        })
    }
}
