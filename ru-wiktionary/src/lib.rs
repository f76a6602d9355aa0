//! Scraping and parsing of Russian Wiktionary inflection tables.
//!
//! [`fetch`] downloads a page, [`page::WiktionaryPage`] detects the part of
//! speech and dispatches to the per-paradigm table parsers, and [`report`]
//! shapes the result for JSON or XML output.

pub mod fetch;
pub mod page;
pub mod report;

mod agreement_table;
mod noun_table;
mod pronoun_table;
mod verb_table;

pub use page::WiktionaryPage;
pub use report::InflectionReport;

/// Why a page could not be turned into an inflection paradigm.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("no inflection table found on the page")]
    NoInflectionTable,
    #[error("could not recognize the part of speech")]
    UnknownPartOfSpeech,
}
