//! Declension table parser for adjectives and the pronouns that decline
//! like them.

use ru_grammar::{AdjectiveInflection, AdjectiveLike, AgreementKind, AgreementSlot};
use scraper::{ElementRef, Html, Selector};

use crate::page::{direct_text, first_inflection_table, full_text};
use crate::ParseError;

// Table rows in layout order, after the two header rows.
const ROW_SLOTS: [AgreementSlot; 8] = [
    AgreementSlot::Nominative,
    AgreementSlot::Genitive,
    AgreementSlot::Dative,
    AgreementSlot::AccusativeAnimate,
    AgreementSlot::AccusativeInanimate,
    AgreementSlot::Instrumental,
    AgreementSlot::Prepositional,
    AgreementSlot::ShortForm,
];

pub(crate) fn parse(
    document: &Html,
    lemma: &str,
    kind: AgreementKind,
) -> Result<AdjectiveLike, ParseError> {
    let table = first_inflection_table(document).ok_or(ParseError::NoInflectionTable)?;
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let mut word = AdjectiveLike::new(lemma, kind);
    for (idx, row) in table.select(&row_selector).enumerate() {
        if idx < 2 {
            continue;
        }
        let Some(slot) = ROW_SLOTS.get(idx - 2).copied() else {
            break;
        };
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        let forms = match slot {
            // The accusative animate row carries an extra animacy label
            // cell between the case label and the forms.
            AgreementSlot::AccusativeAnimate => row_forms(&cells, 2, direct_text),
            // The inanimate row only lists masculine and plural; the table
            // leaves the neuter and feminine cells out because they do not
            // vary by animacy. Copy them over from the animate row.
            AgreementSlot::AccusativeInanimate => {
                let animate = &word.accusative_animate;
                [
                    cells.get(1).copied().and_then(direct_text),
                    animate.neuter.clone(),
                    animate.feminine.clone(),
                    cells.get(2).copied().and_then(direct_text),
                ]
            }
            // The feminine instrumental cell nests its second alternate
            // form inside a child element, so read the cell's full text.
            AgreementSlot::Instrumental => row_forms(&cells, 1, full_text),
            _ => row_forms(&cells, 1, direct_text),
        };
        *word.slot_mut(slot) = AdjectiveInflection::from_row(forms);
    }
    Ok(word)
}

/// Reads four form cells starting at `first`, in the table's column order
/// [masculine, neuter, feminine, plural].
fn row_forms(
    cells: &[ElementRef],
    first: usize,
    read: fn(ElementRef) -> Option<String>,
) -> [Option<String>; 4] {
    std::array::from_fn(|offset| cells.get(first + offset).copied().and_then(read))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parsed(file: &str, lemma: &str, kind: AgreementKind) -> AdjectiveLike {
        let html = fs::read_to_string(format!("src/wiktionary-examples/rus/{file}"))
            .expect("Failed to read fixture");
        let document = Html::parse_document(&html);
        parse(&document, lemma, kind).expect("Failed to parse agreement table")
    }

    #[test]
    fn parses_an_adjective_declension() {
        let adj = parsed("adj_horoshij.html", "хороший", AgreementKind::Adjective);
        assert_eq!(adj.nominative.masculine.as_deref(), Some("хоро́ший"));
        assert_eq!(adj.nominative.neuter.as_deref(), Some("хоро́шее"));
        assert_eq!(adj.nominative.feminine.as_deref(), Some("хоро́шая"));
        assert_eq!(adj.nominative.plural.as_deref(), Some("хоро́шие"));
        assert_eq!(adj.genitive.masculine.as_deref(), Some("хоро́шего"));
        assert_eq!(adj.dative.plural.as_deref(), Some("хоро́шим"));
        assert_eq!(adj.prepositional.feminine.as_deref(), Some("хоро́шей"));
    }

    #[test]
    fn accusative_rows_differ_only_where_animacy_matters() {
        let adj = parsed("adj_horoshij.html", "хороший", AgreementKind::Adjective);
        assert_eq!(adj.accusative_animate.masculine.as_deref(), Some("хоро́шего"));
        assert_eq!(adj.accusative_inanimate.masculine.as_deref(), Some("хоро́ший"));
        assert_eq!(adj.accusative_animate.plural.as_deref(), Some("хоро́ших"));
        assert_eq!(adj.accusative_inanimate.plural.as_deref(), Some("хоро́шие"));
        // Neuter and feminine are copied from the animate row verbatim.
        assert_eq!(
            adj.accusative_inanimate.feminine,
            adj.accusative_animate.feminine
        );
        assert_eq!(adj.accusative_inanimate.feminine.as_deref(), Some("хоро́шую"));
        assert_eq!(
            adj.accusative_inanimate.neuter,
            adj.accusative_animate.neuter
        );
    }

    #[test]
    fn short_forms_come_from_the_last_row() {
        let adj = parsed("adj_horoshij.html", "хороший", AgreementKind::Adjective);
        assert_eq!(adj.short_form.masculine.as_deref(), Some("хоро́ш"));
        assert_eq!(adj.short_form.feminine.as_deref(), Some("хороша́"));
        assert_eq!(adj.short_form.neuter.as_deref(), Some("хорошо́"));
        assert_eq!(adj.short_form.plural.as_deref(), Some("хороши́"));
    }

    #[test]
    fn parses_a_possessive_pronoun() {
        let poss = parsed("poss_svoj.html", "свой", AgreementKind::PossessivePronoun);
        assert_eq!(poss.kind, AgreementKind::PossessivePronoun);
        assert_eq!(poss.nominative.masculine.as_deref(), Some("свой"));
        assert_eq!(poss.nominative.feminine.as_deref(), Some("своя́"));
        assert_eq!(poss.genitive.neuter.as_deref(), Some("своего́"));
        assert_eq!(poss.accusative_inanimate.masculine.as_deref(), Some("свой"));
    }

    #[test]
    fn nested_instrumental_alternates_are_joined() {
        let poss = parsed("poss_svoj.html", "свой", AgreementKind::PossessivePronoun);
        assert_eq!(
            poss.instrumental.feminine.as_deref(),
            Some("свое́й свое́ю")
        );
        assert_eq!(poss.instrumental.masculine.as_deref(), Some("свои́м"));
    }

    #[test]
    fn parses_a_demonstrative_pronoun() {
        let dem = parsed("dem_etot.html", "этот", AgreementKind::DemonstrativePronoun);
        assert_eq!(dem.kind, AgreementKind::DemonstrativePronoun);
        assert_eq!(dem.nominative.masculine.as_deref(), Some("э́тот"));
        assert_eq!(dem.nominative.feminine.as_deref(), Some("э́та"));
        assert_eq!(dem.nominative.neuter.as_deref(), Some("э́то"));
        assert_eq!(dem.nominative.plural.as_deref(), Some("э́ти"));
        assert_eq!(dem.genitive.masculine.as_deref(), Some("э́того"));
        assert_eq!(dem.genitive.plural.as_deref(), Some("э́тих"));
    }
}
