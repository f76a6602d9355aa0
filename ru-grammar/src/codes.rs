//! The numeric inflection-code taxonomy.
//!
//! Every inflected form a parse can produce is assigned a stable integer
//! code. The assignment lives in `data/inflection_codes.json`, embedded at
//! compile time and deserialized into [`InflectionCodes`]. Ranges are
//! partitioned by part of speech: 0-99 noun, 200-230 adjective, 300-323
//! verb, 400-426 possessive pronoun, 500 adverb, 600 preposition, 700
//! numeral, 800-series plain pronoun. Gaps inside a range are deliberate.

use serde::Deserialize;

use crate::adjective::{AgreementCase, AgreementGender, AgreementKind};
use crate::noun::NounCaseType;
use crate::verb::{ParticipleKind, VerbPastSlot, VerbTenseKind};
use crate::{GrammaticalNumber, Person};

const EMBEDDED_TABLE: &str = include_str!("../data/inflection_codes.json");

/// An accusative cell's code, which may split by animacy.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum AccusativeCode {
    Plain(u16),
    ByAnimacy { animate: u16, inanimate: u16 },
}

impl AccusativeCode {
    fn animate(self) -> u16 {
        match self {
            AccusativeCode::Plain(code) => code,
            AccusativeCode::ByAnimacy { animate, .. } => animate,
        }
    }

    fn inanimate(self) -> u16 {
        match self {
            AccusativeCode::Plain(code) => code,
            AccusativeCode::ByAnimacy { inanimate, .. } => inanimate,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NounNumberCodes {
    nominative: u16,
    genitive: u16,
    accusative: u16,
    dative: u16,
    instrumental: u16,
    prepositional: u16,
    vocative: u16,
    locative: u16,
}

impl NounNumberCodes {
    fn case(self, case: NounCaseType) -> u16 {
        match case {
            NounCaseType::Nominative => self.nominative,
            NounCaseType::Genitive => self.genitive,
            NounCaseType::Dative => self.dative,
            NounCaseType::Accusative => self.accusative,
            NounCaseType::Instrumental => self.instrumental,
            NounCaseType::Prepositional => self.prepositional,
            NounCaseType::Locative => self.locative,
            NounCaseType::Vocative => self.vocative,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NounCodes {
    singular: NounNumberCodes,
    plural: NounNumberCodes,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AgreementSlotCodes {
    nominative: u16,
    genitive: u16,
    dative: u16,
    accusative: AccusativeCode,
    instrumental: u16,
    prepositional: u16,
}

impl AgreementSlotCodes {
    fn case(self, case: AgreementCase) -> u16 {
        match case {
            AgreementCase::Nominative => self.nominative,
            AgreementCase::Genitive => self.genitive,
            AgreementCase::Dative => self.dative,
            AgreementCase::AccusativeAnimate => self.accusative.animate(),
            AgreementCase::AccusativeInanimate => self.accusative.inanimate(),
            AgreementCase::Instrumental => self.instrumental,
            AgreementCase::Prepositional => self.prepositional,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ShortFormCodes {
    masculine: u16,
    feminine: u16,
    neuter: u16,
    plural: u16,
}

impl ShortFormCodes {
    fn gender(self, gender: AgreementGender) -> u16 {
        match gender {
            AgreementGender::Masculine => self.masculine,
            AgreementGender::Feminine => self.feminine,
            AgreementGender::Neuter => self.neuter,
            AgreementGender::Plural => self.plural,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AgreementCodes {
    masculine: AgreementSlotCodes,
    feminine: AgreementSlotCodes,
    neuter: AgreementSlotCodes,
    plural: AgreementSlotCodes,
    #[serde(default)]
    short: Option<ShortFormCodes>,
}

impl AgreementCodes {
    fn gender(&self, gender: AgreementGender) -> AgreementSlotCodes {
        match gender {
            AgreementGender::Masculine => self.masculine,
            AgreementGender::Feminine => self.feminine,
            AgreementGender::Neuter => self.neuter,
            AgreementGender::Plural => self.plural,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PersonCodes {
    first_person: u16,
    second_person: u16,
    third_person: u16,
}

impl PersonCodes {
    fn person(self, person: Person) -> u16 {
        match person {
            Person::First => self.first_person,
            Person::Second => self.second_person,
            Person::Third => self.third_person,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TenseCodes {
    singular: PersonCodes,
    plural: PersonCodes,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PastCodes {
    masculine: u16,
    feminine: u16,
    neuter: u16,
    plural: u16,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ImperativeCodes {
    singular: u16,
    plural: u16,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ParticiplePairCodes {
    present: u16,
    past: u16,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ParticipleCodes {
    active: ParticiplePairCodes,
    adverbial: ParticiplePairCodes,
    passive: ParticiplePairCodes,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VerbCodes {
    present: TenseCodes,
    future: TenseCodes,
    past: PastCodes,
    imperative: ImperativeCodes,
    participle: ParticipleCodes,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PronounCodes {
    nominative: u16,
    genitive: u16,
    dative: u16,
    accusative: u16,
    instrumental: u16,
    prepositional: u16,
}

/// The full code table, deserialized from the embedded JSON asset.
#[derive(Debug, Clone, Deserialize)]
pub struct InflectionCodes {
    noun: NounCodes,
    adj: AgreementCodes,
    pronoun_possessive: AgreementCodes,
    verb: VerbCodes,
    pron: PronounCodes,
}

impl InflectionCodes {
    /// Parses the table embedded in the binary. The asset is checked by the
    /// crate's tests, so a failure here means a broken build.
    pub fn embedded() -> InflectionCodes {
        serde_json::from_str(EMBEDDED_TABLE).expect("embedded inflection code table is well formed")
    }

    pub fn from_json(json: &str) -> serde_json::Result<InflectionCodes> {
        serde_json::from_str(json)
    }

    pub fn noun(&self, case: NounCaseType, number: GrammaticalNumber) -> u16 {
        match number {
            GrammaticalNumber::Singular => self.noun.singular.case(case),
            GrammaticalNumber::Plural => self.noun.plural.case(case),
        }
    }

    fn agreement_table(&self, kind: AgreementKind) -> &AgreementCodes {
        match kind {
            AgreementKind::Adjective => &self.adj,
            // Demonstratives decline like possessives and share their range.
            AgreementKind::PossessivePronoun | AgreementKind::DemonstrativePronoun => {
                &self.pronoun_possessive
            }
        }
    }

    pub fn agreement(&self, kind: AgreementKind, gender: AgreementGender, case: AgreementCase) -> u16 {
        self.agreement_table(kind).gender(gender).case(case)
    }

    /// Short-form code for an agreement paradigm, absent where the paradigm
    /// has no short forms.
    pub fn short_form(&self, kind: AgreementKind, gender: AgreementGender) -> Option<u16> {
        self.agreement_table(kind)
            .short
            .map(|short| short.gender(gender))
    }

    pub fn verb_person(
        &self,
        tense: VerbTenseKind,
        number: GrammaticalNumber,
        person: Person,
    ) -> u16 {
        let tense = match tense {
            VerbTenseKind::Present => self.verb.present,
            VerbTenseKind::Future => self.verb.future,
        };
        match number {
            GrammaticalNumber::Singular => tense.singular.person(person),
            GrammaticalNumber::Plural => tense.plural.person(person),
        }
    }

    pub fn verb_past(&self, slot: VerbPastSlot) -> u16 {
        match slot {
            VerbPastSlot::Masculine => self.verb.past.masculine,
            VerbPastSlot::Feminine => self.verb.past.feminine,
            VerbPastSlot::Neuter => self.verb.past.neuter,
            VerbPastSlot::Plural => self.verb.past.plural,
        }
    }

    pub fn verb_imperative(&self, number: GrammaticalNumber) -> u16 {
        match number {
            GrammaticalNumber::Singular => self.verb.imperative.singular,
            GrammaticalNumber::Plural => self.verb.imperative.plural,
        }
    }

    pub fn participle(&self, kind: ParticipleKind) -> u16 {
        match kind {
            ParticipleKind::PresentActive => self.verb.participle.active.present,
            ParticipleKind::PastActive => self.verb.participle.active.past,
            ParticipleKind::PresentAdverbial => self.verb.participle.adverbial.present,
            ParticipleKind::PastAdverbial => self.verb.participle.adverbial.past,
            ParticipleKind::PresentPassive => self.verb.participle.passive.present,
            ParticipleKind::PastPassive => self.verb.participle.passive.past,
        }
    }

    /// Case code for a plain pronoun, absent for the cases the paradigm
    /// does not record.
    pub fn pronoun(&self, case: NounCaseType) -> Option<u16> {
        match case {
            NounCaseType::Nominative => Some(self.pron.nominative),
            NounCaseType::Genitive => Some(self.pron.genitive),
            NounCaseType::Dative => Some(self.pron.dative),
            NounCaseType::Accusative => Some(self.pron.accusative),
            NounCaseType::Instrumental => Some(self.pron.instrumental),
            NounCaseType::Prepositional => Some(self.pron.prepositional),
            NounCaseType::Locative | NounCaseType::Vocative => None,
        }
    }
}

/// Returns the canonical English description for an inflection code, or
/// `None` for any code the taxonomy does not define.
pub fn describe(code: u16) -> Option<String> {
    match code {
        500 => return Some("adverb".to_string()),
        600 => return Some("preposition".to_string()),
        700 => return Some("numeral".to_string()),
        800 => return Some("pronoun".to_string()),
        _ => {}
    }

    let noun_case = |code: u16| -> Option<&'static str> {
        Some(match code {
            1 => "nominative singular",
            2 => "nominative plural",
            3 => "genitive singular",
            4 => "genitive plural",
            5 => "accusative singular",
            6 => "accusative plural",
            7 => "dative singular",
            8 => "dative plural",
            9 => "instrumental singular",
            11 => "instrumental plural",
            12 => "prepositional singular",
            14 => "prepositional plural",
            15 => "vocative",
            16 => "partitive",
            17 => "locative",
            _ => return None,
        })
    };

    // Offset within a seven-slot agreement column where accusative splits
    // by animacy.
    let animate_case = |offset: u16| -> Option<&'static str> {
        Some(match offset {
            0 => "nominative",
            1 => "genitive",
            2 => "dative",
            3 => "accusative, animate",
            4 => "accusative, inanimate",
            5 => "instrumental",
            6 => "prepositional",
            _ => return None,
        })
    };

    // Column with a plain accusative. The feminine run leaves a gap before
    // its prepositional code, the neuter run is contiguous.
    let inanimate_case = |offset: u16, gap_before_prep: bool| -> Option<&'static str> {
        Some(match (offset, gap_before_prep) {
            (0, _) => "nominative",
            (1, _) => "genitive",
            (2, _) => "dative",
            (3, _) => "accusative",
            (4, _) => "instrumental",
            (6, true) | (5, false) => "prepositional",
            _ => return None,
        })
    };

    let agreement_case = |part: &str, code: u16| -> Option<String> {
        let (gender, case) = match code {
            0..=6 => ("masculine", animate_case(code)?),
            7..=13 => ("feminine", inanimate_case(code - 7, true)?),
            14..=19 => ("neuter", inanimate_case(code - 14, false)?),
            20..=26 => ("plural", animate_case(code - 20)?),
            _ => return None,
        };
        Some(format!("{part}, {gender}, {case}"))
    };

    match code {
        0..=99 => noun_case(code).map(|case| format!("noun, {case}")),
        200..=226 => agreement_case("adjective", code - 200),
        227..=230 => {
            let gender = match code {
                227 => "masculine",
                228 => "feminine",
                229 => "neuter",
                _ => "plural",
            };
            Some(format!("adjective, short form, {gender}"))
        }
        300..=323 => {
            let slot = match code {
                300 => "imperative singular",
                301 => "imperative plural",
                302 => "past masculine",
                303 => "past feminine",
                304 => "past neuter",
                305 => "past plural",
                306 => "present first person singular",
                307 => "present second person singular",
                308 => "present third person singular",
                309 => "present first person plural",
                310 => "present second person plural",
                311 => "present third person plural",
                312 => "future first person singular",
                313 => "future second person singular",
                314 => "future third person singular",
                315 => "future first person plural",
                316 => "future second person plural",
                317 => "future third person plural",
                318 => "present active participle",
                319 => "past active participle",
                320 => "present adverbial participle",
                321 => "past adverbial participle",
                322 => "present passive participle",
                323 => "past passive participle",
                _ => unreachable!(),
            };
            Some(format!("verb, {slot}"))
        }
        400..=426 => agreement_case("possessive pronoun", code - 400),
        801..=806 => {
            let case = match code {
                801 => "nominative",
                802 => "genitive",
                803 => "dative",
                804 => "accusative",
                805 => "instrumental",
                _ => "prepositional",
            };
            Some(format!("pronoun, {case}"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_parses() {
        let codes = InflectionCodes::embedded();
        assert_eq!(
            codes.noun(NounCaseType::Nominative, GrammaticalNumber::Singular),
            1
        );
        assert_eq!(
            codes.noun(NounCaseType::Instrumental, GrammaticalNumber::Plural),
            11
        );
        assert_eq!(
            codes.verb_person(
                VerbTenseKind::Future,
                GrammaticalNumber::Plural,
                Person::Third
            ),
            317
        );
        assert_eq!(codes.pronoun(NounCaseType::Vocative), None);
    }

    #[test]
    fn accusative_splits_by_animacy_where_the_paradigm_does() {
        let codes = InflectionCodes::embedded();
        assert_eq!(
            codes.agreement(
                AgreementKind::Adjective,
                AgreementGender::Masculine,
                AgreementCase::AccusativeAnimate
            ),
            203
        );
        assert_eq!(
            codes.agreement(
                AgreementKind::Adjective,
                AgreementGender::Masculine,
                AgreementCase::AccusativeInanimate
            ),
            204
        );
        // Feminine has a single accusative; both animacy lookups collapse.
        assert_eq!(
            codes.agreement(
                AgreementKind::Adjective,
                AgreementGender::Feminine,
                AgreementCase::AccusativeAnimate
            ),
            210
        );
        assert_eq!(
            codes.agreement(
                AgreementKind::Adjective,
                AgreementGender::Feminine,
                AgreementCase::AccusativeInanimate
            ),
            210
        );
    }

    #[test]
    fn demonstratives_share_the_possessive_table() {
        let codes = InflectionCodes::embedded();
        assert_eq!(
            codes.agreement(
                AgreementKind::DemonstrativePronoun,
                AgreementGender::Plural,
                AgreementCase::Nominative
            ),
            420
        );
        assert_eq!(
            codes.short_form(AgreementKind::PossessivePronoun, AgreementGender::Masculine),
            None
        );
        assert_eq!(
            codes.short_form(AgreementKind::Adjective, AgreementGender::Feminine),
            Some(228)
        );
    }

    #[test]
    fn describes_noun_codes() {
        assert_eq!(describe(1).as_deref(), Some("noun, nominative singular"));
        assert_eq!(describe(4).as_deref(), Some("noun, genitive plural"));
        assert_eq!(describe(15).as_deref(), Some("noun, vocative"));
        assert_eq!(describe(16).as_deref(), Some("noun, partitive"));
        assert_eq!(describe(17).as_deref(), Some("noun, locative"));
    }

    #[test]
    fn describes_agreement_codes() {
        assert_eq!(
            describe(203).as_deref(),
            Some("adjective, masculine, accusative, animate")
        );
        assert_eq!(
            describe(213).as_deref(),
            Some("adjective, feminine, prepositional")
        );
        assert_eq!(
            describe(228).as_deref(),
            Some("adjective, short form, feminine")
        );
        assert_eq!(
            describe(401).as_deref(),
            Some("possessive pronoun, masculine, genitive")
        );
        assert_eq!(
            describe(405).as_deref(),
            Some("possessive pronoun, masculine, instrumental")
        );
        assert_eq!(
            describe(406).as_deref(),
            Some("possessive pronoun, masculine, prepositional")
        );
        assert_eq!(
            describe(424).as_deref(),
            Some("possessive pronoun, plural, accusative, inanimate")
        );
    }

    #[test]
    fn describes_verb_and_pronoun_codes() {
        assert_eq!(describe(302).as_deref(), Some("verb, past masculine"));
        assert_eq!(
            describe(312).as_deref(),
            Some("verb, future first person singular")
        );
        assert_eq!(
            describe(321).as_deref(),
            Some("verb, past adverbial participle")
        );
        assert_eq!(describe(800).as_deref(), Some("pronoun"));
        assert_eq!(describe(805).as_deref(), Some("pronoun, instrumental"));
    }

    #[test]
    fn gaps_in_the_taxonomy_are_absent() {
        for gap in [10, 13, 100, 212, 231, 299, 324, 412, 427, 807, 900] {
            assert_eq!(describe(gap), None, "code {gap} should be undefined");
        }
    }
}
