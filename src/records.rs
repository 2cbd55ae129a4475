use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::Config;
use crate::datetime::DateTimeNormalizer;
use crate::extract::RecordExtractor;
use crate::filter::TeamFilter;
use crate::model::{Candidate, MatchRecord};
use crate::venue::VenueResolver;

/// Filter, extract, resolve and normalize: candidates in, finished records out.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    filter: TeamFilter,
    extractor: RecordExtractor,
    resolver: VenueResolver,
    normalizer: DateTimeNormalizer,
    uid_namespace: String,
}

impl RecordBuilder {
    pub fn new(
        filter: TeamFilter,
        resolver: VenueResolver,
        normalizer: DateTimeNormalizer,
        uid_namespace: impl Into<String>,
    ) -> Self {
        Self { filter, extractor: RecordExtractor::new(), resolver, normalizer, uid_namespace: uid_namespace.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            TeamFilter::new(&config.team_keyword),
            VenueResolver::new(&config.venues, config.fallback_location.clone()),
            DateTimeNormalizer::new(config.timezone),
            config.uid_namespace.clone(),
        )
    }

    /// Candidates that fail at any step are logged and dropped.
    pub fn build(&self, candidates: Vec<Candidate>) -> Vec<MatchRecord> {
        let total = candidates.len();
        let tracked = self.filter.retain(candidates);
        debug!(total, tracked = tracked.len(), "Filtered candidates");

        let mut per_round: HashMap<u32, u32> = HashMap::new();
        let mut records = Vec::with_capacity(tracked.len());
        for candidate in &tracked {
            // Counted before anything can drop the row so a postponed match keeps its neighbours' uids
            let seen = per_round.entry(candidate.round_index).or_insert(0);
            *seen += 1;
            let ordinal = *seen;

            let Some(raw) = self.extractor.extract(candidate) else {
                continue;
            };
            let kickoff = match self.normalizer.normalize(&raw.date, raw.time.as_deref()) {
                Ok(k) => k,
                Err(e) => {
                    warn!(error = %e, round = raw.round_index, home = %raw.home_team, "Dropping match with unresolvable date");
                    continue;
                }
            };

            records.push(MatchRecord {
                location: self.resolver.resolve(&raw.venue).to_string(),
                uid: match_uid(&self.uid_namespace, raw.round_index, ordinal),
                home_team: raw.home_team,
                away_team: raw.away_team,
                kickoff,
                round_label: raw.round_label,
                round_index: raw.round_index,
                result: raw.result,
            });
        }
        records
    }
}

/// `{namespace}-jornada-{round}`, suffixed with the ordinal for a second match in one round.
pub fn match_uid(namespace: &str, round_index: u32, ordinal: u32) -> String {
    if ordinal <= 1 {
        format!("{}-jornada-{}", namespace, round_index)
    } else {
        format!("{}-jornada-{}-{}", namespace, round_index, ordinal)
    }
}
