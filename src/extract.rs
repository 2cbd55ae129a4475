use tracing::debug;

use crate::datetime::{date_in_label, split_date_time};
use crate::model::{Candidate, RawMatch};

/// Reads home, away and info cells out of a candidate by position.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordExtractor;

impl RecordExtractor {
    pub fn new() -> Self {
        Self
    }

    /// `None` when the block does not have the expected shape or no date can be found.
    pub fn extract(&self, candidate: &Candidate) -> Option<RawMatch> {
        let [home, away, info, ..] = candidate.cells.as_slice() else {
            debug!(round = candidate.round_index, cells = candidate.cells.len(), "Skipping candidate with fewer than three cells");
            return None;
        };

        let home_team = home.text.trim();
        let away_team = away.text.trim();
        if home_team.is_empty() || away_team.is_empty() {
            debug!(round = candidate.round_index, "Skipping candidate with an empty team cell");
            return None;
        }

        let result = info
            .result
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        // Scheduled date (emphasis or date span) first, round heading only for played matches
        let emphasis = info.emphasis.join(" ");
        let scheduled = if !info.emphasis.is_empty() {
            Some(emphasis.as_str())
        } else {
            candidate.date_hint.as_deref()
        };
        let (date, time) = match scheduled {
            Some(raw) => split_date_time(raw)?,
            None if result.is_some() => (date_in_label(&candidate.round_label)?, None),
            None => {
                debug!(round = candidate.round_index, "Skipping candidate without a date");
                return None;
            }
        };

        let venue = candidate
            .venue_hint
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(home_team);

        Some(RawMatch {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            date: date.to_string(),
            time: time.map(str::to_string),
            venue: venue.to_string(),
            result,
            round_label: candidate.round_label.clone(),
            round_index: candidate.round_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cell;

    fn played(label: &str, score: &str) -> Candidate {
        Candidate {
            round_index: 1,
            round_label: label.to_string(),
            text: String::new(),
            cells: vec![
                Cell::text("CV Rival"),
                Cell::text("CV Bunyola"),
                Cell { text: score.to_string(), emphasis: vec![], result: Some(score.to_string()) },
            ],
            date_hint: None,
            venue_hint: None,
        }
    }

    #[test]
    fn emphasis_date_and_time() {
        let c = Candidate {
            round_label: "Jornada 2".to_string(),
            cells: vec![
                Cell::text("C.V. BUNYOLA"),
                Cell::text("RAFAL VELL"),
                Cell { text: String::new(), emphasis: vec!["18/10/2025".into(), "17:30".into()], result: None },
            ],
            ..Candidate::default()
        };
        let m = RecordExtractor::new().extract(&c).expect("record");
        assert_eq!(m.date, "18/10/2025");
        assert_eq!(m.time.as_deref(), Some("17:30"));
        assert_eq!(m.venue, "C.V. BUNYOLA");
        assert!(m.result.is_none());
    }

    #[test]
    fn played_match_takes_date_from_label() {
        let m = RecordExtractor::new().extract(&played("Jornada 1 11/10/2025", "3 - 0")).expect("record");
        assert_eq!(m.date, "11/10/2025");
        assert_eq!(m.time, None);
        assert_eq!(m.result.as_deref(), Some("3 - 0"));
    }

    #[test]
    fn played_match_without_label_date_is_dropped() {
        assert!(RecordExtractor::new().extract(&played("Jornada 1", "3 - 0")).is_none());
    }

    #[test]
    fn too_few_cells_is_dropped() {
        let mut c = played("Jornada 1 11/10/2025", "3 - 0");
        c.cells.truncate(2);
        assert!(RecordExtractor::new().extract(&c).is_none());
    }

    #[test]
    fn venue_hint_overrides_home_team() {
        let mut c = played("Jornada 1 11/10/2025", "");
        c.date_hint = Some("12/10/2025 - 12:00".to_string());
        c.venue_hint = Some(" SCANNER CV SON FERRER ".to_string());
        let m = RecordExtractor::new().extract(&c).expect("record");
        assert_eq!(m.venue, "SCANNER CV SON FERRER");
        assert_eq!(m.time.as_deref(), Some("12:00"));
        assert!(m.result.is_none());
    }
}
