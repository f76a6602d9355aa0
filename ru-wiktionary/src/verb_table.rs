//! Conjugation table parser.
//!
//! The table's first six body rows form a person/number grid whose second
//! column is either the present or the future tense, announced by the
//! header row. Past tense and imperative forms sit in the third and fourth
//! columns of the same rows. Everything after row six is a labeled extra
//! row: participles, and for imperfective verbs the periphrastic future.

use itertools::Itertools;
use ru_grammar::{GrammaticalNumber, Person, Verb, VerbPastSlot, VerbTenseKind};
use scraper::{ElementRef, Html, Selector};

use crate::page::{direct_text, first_inflection_table};
use crate::ParseError;

// The auxiliary conjugation prefixed to the lemma for the periphrastic
// future of imperfective verbs, in grid order.
const FUTURE_AUXILIARIES: [&str; 6] = ["бу́ду", "бу́дешь", "бу́дет", "бу́дем", "бу́дете", "бу́дут"];

const ROW_LABELS: [(&str, VerbTenseKind); 2] = [
    ("настоящее время", VerbTenseKind::Present),
    ("будущее время", VerbTenseKind::Future),
];

pub(crate) fn parse(document: &Html, lemma: &str) -> Result<Verb, ParseError> {
    let table = first_inflection_table(document).ok_or(ParseError::NoInflectionTable)?;
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let mut verb = Verb::new(lemma);
    let mut base_tense: Option<VerbTenseKind> = None;
    for (idx, row) in table.select(&row_selector).enumerate() {
        if idx == 0 {
            base_tense = detect_base_tense(row);
            continue;
        }
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        if (1..=6).contains(&idx) {
            parse_grid_row(&mut verb, idx, &cells, base_tense);
        } else {
            parse_extra_row(&mut verb, &cells);
        }
    }
    Ok(verb)
}

/// Reads the header row's link titles to learn whether the grid column
/// holds the present or the future tense. An undetermined header leaves
/// the grid forms unrecorded.
fn detect_base_tense(row: ElementRef<'_>) -> Option<VerbTenseKind> {
    let header_selector = Selector::parse("th").unwrap();
    let link_selector = Selector::parse("a").unwrap();
    for header in row.select(&header_selector).skip(1) {
        let Some(title) = header
            .select(&link_selector)
            .next()
            .and_then(|link| link.value().attr("title"))
        else {
            continue;
        };
        if let Some((_, tense)) = ROW_LABELS.iter().find(|(label, _)| *label == title) {
            return Some(*tense);
        }
    }
    None
}

fn parse_grid_row(
    verb: &mut Verb,
    row_idx: usize,
    cells: &[ElementRef],
    base_tense: Option<VerbTenseKind>,
) {
    let number = if row_idx < 4 {
        GrammaticalNumber::Singular
    } else {
        GrammaticalNumber::Plural
    };
    let Some(person) = Person::from_index(match number {
        GrammaticalNumber::Singular => row_idx as u8,
        GrammaticalNumber::Plural => (row_idx - 3) as u8,
    }) else {
        return;
    };

    if let Some(form) = cells.get(1).copied().and_then(direct_text) {
        match base_tense {
            Some(VerbTenseKind::Present) => verb.present.add_form(number, person, &form),
            Some(VerbTenseKind::Future) => verb.future.add_form(number, person, &form),
            None => {}
        }
    }

    if let Some(past_cell) = cells.get(2) {
        let texts: Vec<&str> = past_cell
            .text()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .collect();
        for (text_idx, text) in texts.iter().enumerate() {
            match (number, person) {
                (GrammaticalNumber::Singular, Person::First) => {
                    // First item is masculine, the rest feminine.
                    if text_idx == 0 {
                        verb.add_past_form(VerbPastSlot::Masculine, text);
                    } else {
                        verb.add_past_form(VerbPastSlot::Feminine, text);
                    }
                }
                (GrammaticalNumber::Singular, Person::Third) => {
                    if text_idx == 2 {
                        verb.add_past_form(VerbPastSlot::Neuter, text);
                    }
                }
                (GrammaticalNumber::Plural, Person::First) => {
                    verb.add_past_form(VerbPastSlot::Plural, text);
                }
                _ => {}
            }
        }
    }

    if person == Person::Second {
        if let Some(form) = cells.get(3).copied().and_then(direct_text) {
            match number {
                GrammaticalNumber::Singular => verb.imperative.singular = Some(form),
                GrammaticalNumber::Plural => verb.imperative.plural = Some(form),
            }
        }
    }
}

/// Handles the labeled rows after the person/number grid: participles and
/// the periphrastic future.
fn parse_extra_row(verb: &mut Verb, cells: &[ElementRef]) {
    let Some(label_cell) = cells.first() else {
        return;
    };
    let Some(label) = row_label(*label_cell) else {
        return;
    };

    if label == "будущее время" {
        // Imperfective future is periphrastic: auxiliary plus infinitive.
        let forms: Vec<String> = FUTURE_AUXILIARIES
            .iter()
            .map(|aux| format!("{aux} {}", verb.lemma))
            .collect();
        verb.future.add_form_list(&forms);
        return;
    }

    let Some(forms_cell) = cells.get(1) else {
        return;
    };
    for form in link_texts(*forms_cell) {
        match label.as_str() {
            "действительное причастие настоящего времени" => {
                verb.present_active_participle = Some(form);
            }
            "действительное причастие прошедшего времени" => {
                verb.past_active_participle = Some(form);
            }
            "деепричастие настоящее время" => verb.present_adverbial_participle = Some(form),
            "деепричастие прошедшее время" => verb.past_adverbial_participle.push(form),
            "страдательное причастие настоящего времени" => {
                verb.present_passive_participle = Some(form);
            }
            "страдательное причастие прошедшего времени" => {
                verb.past_passive_participle = Some(form);
            }
            _ => {}
        }
    }
}

/// Joins the label cell's link titles into one phrase. Labels are often
/// split across several links with overlapping titles, so the joined words
/// are deduplicated while keeping their order.
fn row_label(cell: ElementRef<'_>) -> Option<String> {
    let link_selector = Selector::parse("a").unwrap();
    let titles: Vec<&str> = cell
        .select(&link_selector)
        .filter_map(|link| link.value().attr("title"))
        .collect();
    if titles.is_empty() {
        return None;
    }
    let phrase = titles
        .join(" ")
        .split_whitespace()
        .unique()
        .join(" ");
    Some(phrase)
}

fn link_texts(cell: ElementRef<'_>) -> Vec<String> {
    let link_selector = Selector::parse("a").unwrap();
    cell.select(&link_selector)
        .filter_map(|link| {
            let text = link.text().map(str::trim).join("");
            (!text.is_empty()).then_some(text)
        })
        .collect()
}
