/// One cell of a match row, reduced to the pieces the extractor looks at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    // Text nodes inside a <strong>, in document order (date, then time)
    pub emphasis: Vec<String>,
    pub result: Option<String>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }
}

/// A block of markup that may describe a match, detached from the DOM.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Candidate {
    pub round_index: u32,
    pub round_label: String,
    // Whitespace-joined text of the whole block, used by the team filter
    pub text: String,
    pub cells: Vec<Cell>,
    pub date_hint: Option<String>,
    pub venue_hint: Option<String>,
}
