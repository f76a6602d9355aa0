//! Page-level parsing: part-of-speech detection and dispatch to the
//! paradigm-specific table parsers.

use itertools::Itertools;
use ru_grammar::{AgreementKind, GrammarWord, SpeechPart};
use scraper::{ElementRef, Html, Selector};

use crate::{agreement_table, noun_table, pronoun_table, verb_table, ParseError};

/// A parsed dictionary page for one lemma.
pub struct WiktionaryPage {
    lemma: String,
    document: Html,
}

impl WiktionaryPage {
    pub fn from_html(lemma: &str, html: &str) -> WiktionaryPage {
        WiktionaryPage {
            lemma: lemma.to_string(),
            document: Html::parse_document(html),
        }
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// Detects the part of speech from the page's descriptive paragraph.
    ///
    /// The paragraph names the part of speech in running Russian text, so
    /// detection is substring matching with the more specific names tried
    /// first ("притяжательное местоимение" before "местоимение").
    pub fn part_of_speech(&self) -> Option<SpeechPart> {
        let text = self.description_paragraph()?;
        const MATCHES: [(&str, SpeechPart); 10] = [
            ("притяжательное местоимение", SpeechPart::PronounPossessive),
            ("указательное местоимение", SpeechPart::PronounDemonstrative),
            ("существительное", SpeechPart::Noun),
            ("прилагательное", SpeechPart::Adjective),
            ("наречие", SpeechPart::Adverb),
            ("предлог", SpeechPart::Preposition),
            ("союз", SpeechPart::Conjunction),
            ("числительное", SpeechPart::Numeral),
            ("местоимение", SpeechPart::Pronoun),
            ("глагол", SpeechPart::Verb),
        ];
        MATCHES
            .iter()
            .find(|(name, _)| text.contains(name))
            .map(|(_, pos)| *pos)
    }

    fn description_paragraph(&self) -> Option<String> {
        let selector = Selector::parse("#mw-content-text > div > p").unwrap();
        let mut paragraphs = self.document.select(&selector);
        let second = paragraphs.next().and_then(|_| paragraphs.next())?;
        let text = paragraph_text(second);
        // Short closed-class entries repeat the headword in the second
        // paragraph and describe the word in the third.
        if text == self.lemma.to_lowercase() {
            return paragraphs.next().map(paragraph_text);
        }
        Some(text)
    }

    /// Parses the page's first inflection table into a paradigm model.
    ///
    /// Returns `Ok(None)` for recognized but uninflected parts of speech
    /// (adverbs, prepositions, numerals, conjunctions).
    pub fn parse(&self) -> Result<Option<GrammarWord>, ParseError> {
        let pos = self
            .part_of_speech()
            .ok_or(ParseError::UnknownPartOfSpeech)?;
        let word = match pos {
            SpeechPart::Noun => Some(GrammarWord::Noun(noun_table::parse(
                &self.document,
                &self.lemma,
            )?)),
            SpeechPart::Adjective => Some(GrammarWord::AdjectiveLike(agreement_table::parse(
                &self.document,
                &self.lemma,
                AgreementKind::Adjective,
            )?)),
            SpeechPart::PronounPossessive => Some(GrammarWord::AdjectiveLike(
                agreement_table::parse(&self.document, &self.lemma, AgreementKind::PossessivePronoun)?,
            )),
            SpeechPart::PronounDemonstrative => {
                Some(GrammarWord::AdjectiveLike(agreement_table::parse(
                    &self.document,
                    &self.lemma,
                    AgreementKind::DemonstrativePronoun,
                )?))
            }
            SpeechPart::Pronoun => Some(GrammarWord::Pronoun(pronoun_table::parse(
                &self.document,
                &self.lemma,
            )?)),
            SpeechPart::Verb => Some(GrammarWord::Verb(verb_table::parse(
                &self.document,
                &self.lemma,
            )?)),
            SpeechPart::Adverb
            | SpeechPart::Preposition
            | SpeechPart::Numeral
            | SpeechPart::Conjunction => None,
        };
        Ok(word)
    }
}

fn paragraph_text(paragraph: ElementRef<'_>) -> String {
    paragraph
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .join(" ")
        .to_lowercase()
}

/// The first Russian morphology table on the page. Pages for words that
/// exist in several languages carry one table per language; only the first
/// (Russian) one is relevant.
pub(crate) fn first_inflection_table(document: &Html) -> Option<ElementRef<'_>> {
    let selector = Selector::parse("table.morfotable.ru").unwrap();
    document.select(&selector).next()
}

/// The first non-empty text chunk of a cell, trimmed.
pub(crate) fn direct_text(cell: ElementRef<'_>) -> Option<String> {
    cell.text()
        .map(str::trim)
        .find(|piece| !piece.is_empty())
        .map(str::to_string)
}

/// All text of a cell, including nested elements, joined with spaces.
pub(crate) fn full_text(cell: ElementRef<'_>) -> Option<String> {
    let joined = cell
        .text()
        .flat_map(str::split_whitespace)
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}

/// The `title` attribute of the first link inside a cell.
pub(crate) fn link_title(cell: ElementRef<'_>) -> Option<String> {
    let selector = Selector::parse("a").unwrap();
    cell.select(&selector)
        .next()?
        .value()
        .attr("title")
        .map(str::to_string)
}
