/// Structured but not yet normalized match, straight out of the extractor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawMatch {
    pub home_team: String,
    pub away_team: String,
    pub date: String,
    pub time: Option<String>,
    pub venue: String,
    pub result: Option<String>,
    pub round_label: String,
    pub round_index: u32,
}
