use thiserror::Error;

/// Everything that can go wrong between the first request and the last write.
///
/// Most variants are local to one page or one candidate and are logged and
/// dropped by the caller; only `Unreachable`, `Selector` and `Io` end a run.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("request for page {page} failed: {message}")]
    Transport { page: u32, message: String },

    #[error("page {page} returned HTTP {code}")]
    Status { page: u32, code: u16 },

    #[error("remote host unreachable on first page: {0}")]
    Unreachable(String),

    #[error("invalid selector `{0}`")]
    Selector(String),

    #[error("unparseable date `{0}`")]
    DateParse(String),

    #[error("timezone error: {0}")]
    Timezone(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
