pub mod candidate;
pub mod match_record;
pub mod raw_match;

pub use candidate::{Candidate, Cell};
pub use match_record::{Kickoff, MatchRecord};
pub use raw_match::RawMatch;
