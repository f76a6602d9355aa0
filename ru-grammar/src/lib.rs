//! Grammatical data model for Russian inflection paradigms.
//!
//! Each part of speech with a modeled paradigm (noun, adjective-like,
//! plain pronoun, verb) gets its own type holding the inflected forms
//! scraped from a dictionary page. [`GrammarWord`] ties them together and
//! flattens any of them into `(form, code)` pairs against the
//! [`codes::InflectionCodes`] taxonomy.

pub mod adjective;
pub mod codes;
pub mod noun;
pub mod pronoun;
pub mod verb;

pub use adjective::{
    AdjectiveInflection, AdjectiveLike, AgreementCase, AgreementGender, AgreementKind,
    AgreementSlot,
};
pub use codes::InflectionCodes;
pub use noun::{Noun, NounCaseType, NounInflection};
pub use pronoun::Pronoun;
pub use verb::{
    ParticipleKind, Verb, VerbImperativeTense, VerbPastSlot, VerbPastTense, VerbTense,
    VerbTenseKind, VerbTensePlurality,
};

/// Grammatical number, as distinguished by every paradigm here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammaticalNumber {
    Singular,
    Plural,
}

/// Grammatical person within a verb tense column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    /// Person from a 1-based index, as the conjugation grid numbers them.
    pub fn from_index(idx: u8) -> Option<Person> {
        match idx {
            1 => Some(Person::First),
            2 => Some(Person::Second),
            3 => Some(Person::Third),
            _ => None,
        }
    }
}

/// Russian part of speech, as announced by the descriptive paragraph of a
/// dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeechPart {
    Noun,
    Adjective,
    Verb,
    Adverb,
    PronounPossessive,
    Preposition,
    Numeral,
    Pronoun,
    PronounDemonstrative,
    Conjunction,
}

impl SpeechPart {
    /// The universal POS (UPOS) tag for this part of speech, if one is
    /// defined.
    pub fn to_upos(self) -> Option<&'static str> {
        match self {
            SpeechPart::Noun => Some("NOUN"),
            SpeechPart::Adjective => Some("ADJ"),
            SpeechPart::Verb => Some("VERB"),
            SpeechPart::Adverb => Some("ADV"),
            SpeechPart::PronounPossessive => Some("PRON"),
            SpeechPart::Preposition => Some("ADP"),
            SpeechPart::Numeral => Some("NUM"),
            SpeechPart::Pronoun => Some("PRON"),
            SpeechPart::PronounDemonstrative => Some("PRON"),
            SpeechPart::Conjunction => Some("CCONJ"),
        }
    }
}

impl std::fmt::Display for SpeechPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            SpeechPart::Noun => "noun",
            SpeechPart::Adjective => "adjective",
            SpeechPart::Verb => "verb",
            SpeechPart::Adverb => "adverb",
            SpeechPart::PronounPossessive => "possessive pronoun",
            SpeechPart::Preposition => "preposition",
            SpeechPart::Numeral => "numeral",
            SpeechPart::Pronoun => "pronoun",
            SpeechPart::PronounDemonstrative => "demonstrative pronoun",
            SpeechPart::Conjunction => "conjunction",
        };
        write!(f, "{word}")
    }
}

/// Returns the UPOS tag for a raw Russian part-of-speech name.
pub fn rupos2upos(rupos: &str) -> Option<&'static str> {
    match rupos {
        "существительное" => Some("NOUN"),
        "имя собственное" => Some("PROPN"),
        "прилагательное" => Some("ADJ"),
        "наречие" => Some("ADV"),
        "глагол" => Some("VERB"),
        "междометие" => Some("INTJ"),
        "предлог" => Some("ADP"),
        "союз" => Some("CCONJ"),
        "местоимение" => Some("PRON"),
        "частица" => Some("PART"),
        "числительное" => Some("NUM"),
        _ => None,
    }
}

/// A fully parsed word: the lemma plus every inflected form one page parse
/// produced. Immutable once the parse that built it returns.
#[derive(Debug, Clone)]
pub enum GrammarWord {
    Noun(Noun),
    AdjectiveLike(AdjectiveLike),
    Pronoun(Pronoun),
    Verb(Verb),
}

impl GrammarWord {
    pub fn lemma(&self) -> &str {
        match self {
            GrammarWord::Noun(noun) => &noun.lemma,
            GrammarWord::AdjectiveLike(adj) => &adj.lemma,
            GrammarWord::Pronoun(pronoun) => &pronoun.lemma,
            GrammarWord::Verb(verb) => &verb.lemma,
        }
    }

    pub fn speech_part(&self) -> SpeechPart {
        match self {
            GrammarWord::Noun(_) => SpeechPart::Noun,
            GrammarWord::AdjectiveLike(adj) => adj.kind.speech_part(),
            GrammarWord::Pronoun(_) => SpeechPart::Pronoun,
            GrammarWord::Verb(_) => SpeechPart::Verb,
        }
    }

    /// Flattens every populated slot into ordered `(form, code)` pairs.
    ///
    /// Slots that were never populated are omitted; multi-form slots emit
    /// one pair per form, all sharing the slot's code. The operation is
    /// pure: calling it twice yields identical sequences.
    pub fn to_code_list(&self, codes: &InflectionCodes) -> Vec<(String, u16)> {
        match self {
            GrammarWord::Noun(noun) => noun.to_code_list(codes),
            GrammarWord::AdjectiveLike(adj) => adj.to_code_list(codes),
            GrammarWord::Pronoun(pronoun) => pronoun.to_code_list(codes),
            GrammarWord::Verb(verb) => verb.to_code_list(codes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn russian_pos_names_map_to_upos() {
        assert_eq!(rupos2upos("существительное"), Some("NOUN"));
        assert_eq!(rupos2upos("глагол"), Some("VERB"));
        assert_eq!(rupos2upos("союз"), Some("CCONJ"));
        assert_eq!(rupos2upos("котлета"), None);
    }

    #[test]
    fn speech_parts_map_to_upos() {
        assert_eq!(SpeechPart::Noun.to_upos(), Some("NOUN"));
        assert_eq!(SpeechPart::Adjective.to_upos(), Some("ADJ"));
        assert_eq!(SpeechPart::Adverb.to_upos(), Some("ADV"));
        assert_eq!(SpeechPart::Verb.to_upos(), Some("VERB"));
        assert_eq!(SpeechPart::PronounPossessive.to_upos(), Some("PRON"));
        assert_eq!(SpeechPart::Pronoun.to_upos(), Some("PRON"));
        assert_eq!(SpeechPart::Preposition.to_upos(), Some("ADP"));
        assert_eq!(SpeechPart::Numeral.to_upos(), Some("NUM"));
    }

    #[test]
    fn flattening_is_idempotent() {
        let codes = InflectionCodes::embedded();
        let mut noun = Noun::new("волк");
        noun.add_form(
            NounCaseType::Nominative,
            GrammaticalNumber::Singular,
            &["волк".to_string()],
        );
        noun.add_form(
            NounCaseType::Instrumental,
            GrammaticalNumber::Singular,
            &["волком".to_string(), "во́лком".to_string()],
        );
        let word = GrammarWord::Noun(noun);
        assert_eq!(word.to_code_list(&codes), word.to_code_list(&codes));
    }
}
