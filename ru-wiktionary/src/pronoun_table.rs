//! Declension table parser for plain pronouns, which decline like nouns
//! but carry a single form per case.

use ru_grammar::Pronoun;
use scraper::{Html, Selector};

use crate::noun_table::case_from_russian;
use crate::page::{direct_text, first_inflection_table, link_title};
use crate::ParseError;

pub(crate) fn parse(document: &Html, lemma: &str) -> Result<Pronoun, ParseError> {
    let table = first_inflection_table(document).ok_or(ParseError::NoInflectionTable)?;
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let mut pronoun = Pronoun::new(lemma);
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
        if let Some(form) = cells.get(1).copied().and_then(direct_text) {
            pronoun.add_form(case, &form);
        }
    }
    Ok(pronoun)
}
