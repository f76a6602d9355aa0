//! Noun declension table parser.

use ru_grammar::{GrammaticalNumber, Noun, NounCaseType};
use scraper::{Html, Selector};

use crate::page::{first_inflection_table, link_title};
use crate::ParseError;

// Case names as the table's row labels carry them in link titles. The
// peripheral cases keep the word "падеж" in their labels.
const CASE_NAMES: [(NounCaseType, &str); 8] = [
    (NounCaseType::Nominative, "именительный"),
    (NounCaseType::Genitive, "родительный"),
    (NounCaseType::Dative, "дательный"),
    (NounCaseType::Accusative, "винительный"),
    (NounCaseType::Instrumental, "творительный"),
    (NounCaseType::Prepositional, "предложный"),
    (NounCaseType::Locative, "местный падеж"),
    (NounCaseType::Vocative, "звательный падеж"),
];

/// Maps a Russian case label to the case it names.
pub(crate) fn case_from_russian(label: &str) -> Option<NounCaseType> {
    CASE_NAMES
        .iter()
        .find(|(_, name)| *name == label)
        .map(|(case, _)| *case)
}

/// Grammatical number of a declension-table column, by cell index.
pub(crate) fn column_number(cell_idx: usize) -> Option<GrammaticalNumber> {
    match cell_idx {
        1 => Some(GrammaticalNumber::Singular),
        2 => Some(GrammaticalNumber::Plural),
        _ => None,
    }
}

pub(crate) fn parse(document: &Html, lemma: &str) -> Result<Noun, ParseError> {
    let table = first_inflection_table(document).ok_or(ParseError::NoInflectionTable)?;
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let mut noun = Noun::new(lemma);
    for row in table.select(&row_selector).skip(1) {
        let cells: Vec<_> = row.select(&cell_selector).collect();
        let Some(case) = cells
            .first()
            .and_then(|cell| link_title(*cell))
            .as_deref()
            .and_then(case_from_russian)
        else {
            continue;
        };
        for (cell_idx, cell) in cells.iter().enumerate().skip(1) {
            let Some(number) = column_number(cell_idx) else {
                continue;
            };
            // Alternate forms are separated by <br/>, so each text node in
            // the cell is one form.
            let forms: Vec<String> = cell
                .text()
                .map(str::trim)
                .filter(|form| !form.is_empty())
                .map(str::to_string)
                .collect();
            noun.add_form(case, number, &forms);
        }
    }
    Ok(noun)
}
