use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

use crate::config::Layout;
use crate::error::ScheduleError;
use crate::model::{Candidate, Cell};

/// Candidates found on one page plus how many rounds they spanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    pub rounds: u32,
    pub candidates: Vec<Candidate>,
}

impl ParsedPage {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Finds match-candidate blocks in a schedule page.
#[derive(Debug)]
pub struct PageParser {
    layout: Layout,
    round_table: Selector,
    header: Selector,
    row: Selector,
    heading: Selector,
    container: Selector,
    date: Selector,
    venue: Selector,
    cell: Selector,
    strong: Selector,
    result: Selector,
}

fn selector(css: &str) -> Result<Selector, ScheduleError> {
    Selector::parse(css).map_err(|_| ScheduleError::Selector(css.to_string()))
}

impl PageParser {
    pub fn new(layout: Layout) -> Result<Self, ScheduleError> {
        Ok(Self {
            layout,
            round_table: selector("table.calendario-completo")?,
            header: selector("th")?,
            row: selector("tr")?,
            heading: selector("h1, h2, h3")?,
            container: selector("div.partido")?,
            date: selector("span.fecha")?,
            venue: selector("span.pabellon")?,
            cell: selector("td")?,
            strong: selector("strong")?,
            result: selector("span.resultado")?,
        })
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Parse one page. Rounds are numbered from `first_round` in document order.
    #[instrument(level = "debug", skip(self, markup), fields(bytes = markup.len()))]
    pub fn parse(&self, markup: &str, first_round: u32) -> ParsedPage {
        let document = Html::parse_document(markup);
        let page = match self.layout {
            Layout::Tables => self.parse_tables(&document, first_round),
            Layout::Containers => self.parse_containers(&document, first_round),
        };
        debug!(rounds = page.rounds, candidates = page.candidates.len(), "Parsed page");
        page
    }

    fn parse_tables(&self, document: &Html, first_round: u32) -> ParsedPage {
        let mut page = ParsedPage::default();
        for table in document.select(&self.round_table) {
            let round_index = first_round + page.rounds;
            page.rounds += 1;
            let round_label = table
                .select(&self.header)
                .next()
                .map(joined_text)
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| format!("Jornada {}", round_index));

            for row in table.select(&self.row) {
                if row.value().classes().any(|c| c == "jornada") {
                    continue;
                }
                let cells: Vec<Cell> = row.select(&self.cell).map(|td| self.cell_of(td)).collect();
                if cells.is_empty() {
                    continue;
                }
                page.candidates.push(Candidate {
                    round_index,
                    round_label: round_label.clone(),
                    text: joined_text(row),
                    cells,
                    date_hint: None,
                    venue_hint: None,
                });
            }
        }
        page
    }

    fn parse_containers(&self, document: &Html, first_round: u32) -> ParsedPage {
        let round_label = document
            .select(&self.heading)
            .next()
            .map(joined_text)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("Jornada {}", first_round));

        let candidates: Vec<Candidate> = document
            .select(&self.container)
            .map(|block| Candidate {
                round_index: first_round,
                round_label: round_label.clone(),
                text: joined_text(block),
                cells: block.select(&self.cell).map(|td| self.cell_of(td)).collect(),
                date_hint: block.select(&self.date).next().map(joined_text).filter(|t| !t.is_empty()),
                venue_hint: block.select(&self.venue).next().map(joined_text).filter(|t| !t.is_empty()),
            })
            .collect();

        ParsedPage { rounds: u32::from(!candidates.is_empty()), candidates }
    }

    fn cell_of(&self, td: ElementRef) -> Cell {
        let emphasis = td
            .select(&self.strong)
            .next()
            .map(|strong| strong.text().map(str::trim).filter(|t| !t.is_empty()).map(str::to_string).collect())
            .unwrap_or_default();
        Cell {
            text: joined_text(td),
            emphasis,
            result: td.select(&self.result).next().map(joined_text),
        }
    }
}

fn joined_text(element: ElementRef) -> String {
    element.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ")
}
