//! Agreement paradigms: adjectives plus the possessive and demonstrative
//! pronouns that decline the same way.

use crate::codes::InflectionCodes;
use crate::SpeechPart;

/// Which agreement paradigm a declension table belongs to. Possessive and
/// demonstrative pronouns share the adjective's table shape but draw codes
/// from the 400 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgreementKind {
    Adjective,
    PossessivePronoun,
    DemonstrativePronoun,
}

impl AgreementKind {
    pub fn speech_part(self) -> SpeechPart {
        match self {
            AgreementKind::Adjective => SpeechPart::Adjective,
            AgreementKind::PossessivePronoun => SpeechPart::PronounPossessive,
            AgreementKind::DemonstrativePronoun => SpeechPart::PronounDemonstrative,
        }
    }
}

/// Gender/number column of an agreement table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgreementGender {
    Masculine,
    Feminine,
    Neuter,
    Plural,
}

/// Case axis used for code lookup. Accusative is split by animacy because
/// masculine and plural columns carry distinct forms for the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgreementCase {
    Nominative,
    Genitive,
    Dative,
    AccusativeAnimate,
    AccusativeInanimate,
    Instrumental,
    Prepositional,
}

/// Row slot of an agreement table, including the short-form row that has no
/// case of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgreementSlot {
    Nominative,
    Genitive,
    Dative,
    AccusativeAnimate,
    AccusativeInanimate,
    Instrumental,
    Prepositional,
    ShortForm,
}

/// One case's four gender/number forms.
///
/// A slot holds at most one string; the feminine slot may carry two
/// space-separated alternates, split apart during flattening. The literal
/// "-" marks an inapplicable cell and is dropped during flattening.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjectiveInflection {
    pub masculine: Option<String>,
    pub feminine: Option<String>,
    pub neuter: Option<String>,
    pub plural: Option<String>,
}

impl AdjectiveInflection {
    /// Builds a case from its table cells, which arrive in source row order
    /// [masculine, neuter, feminine, plural]. The neuter/feminine swap
    /// between input position and field is the table's column order, not a
    /// mistake.
    pub fn from_row(row: [Option<String>; 4]) -> AdjectiveInflection {
        let [masculine, neuter, feminine, plural] = row;
        AdjectiveInflection {
            masculine,
            feminine,
            neuter,
            plural,
        }
    }
}

/// A fully declined agreement-paradigm word.
#[derive(Debug, Clone)]
pub struct AdjectiveLike {
    pub lemma: String,
    pub kind: AgreementKind,
    pub nominative: AdjectiveInflection,
    pub genitive: AdjectiveInflection,
    pub dative: AdjectiveInflection,
    pub accusative_animate: AdjectiveInflection,
    pub accusative_inanimate: AdjectiveInflection,
    pub instrumental: AdjectiveInflection,
    pub prepositional: AdjectiveInflection,
    pub short_form: AdjectiveInflection,
}

impl AdjectiveLike {
    pub fn new(lemma: &str, kind: AgreementKind) -> AdjectiveLike {
        AdjectiveLike {
            lemma: lemma.to_string(),
            kind,
            nominative: AdjectiveInflection::default(),
            genitive: AdjectiveInflection::default(),
            dative: AdjectiveInflection::default(),
            accusative_animate: AdjectiveInflection::default(),
            accusative_inanimate: AdjectiveInflection::default(),
            instrumental: AdjectiveInflection::default(),
            prepositional: AdjectiveInflection::default(),
            short_form: AdjectiveInflection::default(),
        }
    }

    pub fn slot_mut(&mut self, slot: AgreementSlot) -> &mut AdjectiveInflection {
        match slot {
            AgreementSlot::Nominative => &mut self.nominative,
            AgreementSlot::Genitive => &mut self.genitive,
            AgreementSlot::Dative => &mut self.dative,
            AgreementSlot::AccusativeAnimate => &mut self.accusative_animate,
            AgreementSlot::AccusativeInanimate => &mut self.accusative_inanimate,
            AgreementSlot::Instrumental => &mut self.instrumental,
            AgreementSlot::Prepositional => &mut self.prepositional,
            AgreementSlot::ShortForm => &mut self.short_form,
        }
    }

    const GENDERS: [AgreementGender; 4] = [
        AgreementGender::Masculine,
        AgreementGender::Feminine,
        AgreementGender::Neuter,
        AgreementGender::Plural,
    ];

    fn gender_form<'a>(
        inflection: &'a AdjectiveInflection,
        gender: AgreementGender,
    ) -> Option<&'a String> {
        match gender {
            AgreementGender::Masculine => inflection.masculine.as_ref(),
            AgreementGender::Feminine => inflection.feminine.as_ref(),
            AgreementGender::Neuter => inflection.neuter.as_ref(),
            AgreementGender::Plural => inflection.plural.as_ref(),
        }
    }

    pub(crate) fn to_code_list(&self, codes: &InflectionCodes) -> Vec<(String, u16)> {
        let case_slots = [
            (AgreementCase::Nominative, &self.nominative),
            (AgreementCase::Genitive, &self.genitive),
            (AgreementCase::Dative, &self.dative),
            (AgreementCase::AccusativeAnimate, &self.accusative_animate),
            (AgreementCase::AccusativeInanimate, &self.accusative_inanimate),
            (AgreementCase::Instrumental, &self.instrumental),
            (AgreementCase::Prepositional, &self.prepositional),
        ];
        let mut pairs = Vec::new();
        for (case, inflection) in case_slots {
            for gender in Self::GENDERS {
                let Some(form) = Self::gender_form(inflection, gender) else {
                    continue;
                };
                let code = codes.agreement(self.kind, gender, case);
                if gender == AgreementGender::Feminine {
                    // Alternate feminine forms arrive space-joined in one cell.
                    for alt in form.split_whitespace() {
                        if alt != "-" {
                            pairs.push((alt.to_string(), code));
                        }
                    }
                } else if form.as_str() != "-" {
                    pairs.push((form.clone(), code));
                }
            }
        }
        for gender in Self::GENDERS {
            let Some(code) = codes.short_form(self.kind, gender) else {
                continue;
            };
            let Some(form) = Self::gender_form(&self.short_form, gender) else {
                continue;
            };
            if form.as_str() != "-" {
                pairs.push((form.clone(), code));
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InflectionCodes;

    fn row(cells: [&str; 4]) -> [Option<String>; 4] {
        cells.map(|cell| Some(cell.to_string()))
    }

    #[test]
    fn from_row_remaps_neuter_and_feminine() {
        let inflection = AdjectiveInflection::from_row(row(["M", "N", "F", "P"]));
        assert_eq!(inflection.masculine.as_deref(), Some("M"));
        assert_eq!(inflection.feminine.as_deref(), Some("F"));
        assert_eq!(inflection.neuter.as_deref(), Some("N"));
        assert_eq!(inflection.plural.as_deref(), Some("P"));
    }

    #[test]
    fn flattening_covers_every_gender_and_case() {
        let codes = InflectionCodes::embedded();
        let mut adj = AdjectiveLike::new("хороший", AgreementKind::Adjective);
        adj.nominative =
            AdjectiveInflection::from_row(row(["хоро́ший", "хоро́шее", "хоро́шая", "хоро́шие"]));
        let pairs = adj.to_code_list(&codes);
        assert_eq!(
            pairs,
            vec![
                ("хоро́ший".to_string(), 200),
                ("хоро́шая".to_string(), 207),
                ("хоро́шее".to_string(), 214),
                ("хоро́шие".to_string(), 220),
            ]
        );
    }

    #[test]
    fn feminine_alternates_split_and_share_a_code() {
        let codes = InflectionCodes::embedded();
        let mut poss = AdjectiveLike::new("свой", AgreementKind::PossessivePronoun);
        poss.instrumental =
            AdjectiveInflection::from_row(row(["свои́м", "свои́м", "свое́й свое́ю", "свои́ми"]));
        let pairs = poss.to_code_list(&codes);
        assert!(pairs.contains(&("свое́й".to_string(), 411)));
        assert!(pairs.contains(&("свое́ю".to_string(), 411)));
        assert!(pairs.contains(&("свои́м".to_string(), 405)));
    }

    #[test]
    fn accusative_rows_use_animacy_specific_codes() {
        let codes = InflectionCodes::embedded();
        let mut adj = AdjectiveLike::new("хороший", AgreementKind::Adjective);
        adj.accusative_animate =
            AdjectiveInflection::from_row(row(["хоро́шего", "хоро́шее", "хоро́шую", "хоро́ших"]));
        adj.accusative_inanimate =
            AdjectiveInflection::from_row(row(["хоро́ший", "хоро́шее", "хоро́шую", "хоро́шие"]));
        let pairs = adj.to_code_list(&codes);
        assert!(pairs.contains(&("хоро́шего".to_string(), 203)));
        assert!(pairs.contains(&("хоро́ших".to_string(), 223)));
        assert!(pairs.contains(&("хоро́ший".to_string(), 204)));
        assert!(pairs.contains(&("хоро́шие".to_string(), 224)));
        // Feminine accusative has no animacy split; both rows yield 210.
        assert_eq!(
            pairs
                .iter()
                .filter(|(form, code)| form == "хоро́шую" && *code == 210)
                .count(),
            2
        );
    }

    #[test]
    fn short_forms_only_exist_for_adjectives() {
        let codes = InflectionCodes::embedded();
        let mut adj = AdjectiveLike::new("хороший", AgreementKind::Adjective);
        adj.short_form =
            AdjectiveInflection::from_row(row(["хоро́ш", "хорошо́", "хороша́", "хороши́"]));
        let pairs = adj.to_code_list(&codes);
        assert_eq!(
            pairs,
            vec![
                ("хоро́ш".to_string(), 227),
                ("хороша́".to_string(), 228),
                ("хорошо́".to_string(), 229),
                ("хороши́".to_string(), 230),
            ]
        );

        let mut poss = AdjectiveLike::new("свой", AgreementKind::PossessivePronoun);
        poss.short_form = adj.short_form.clone();
        assert!(poss.to_code_list(&codes).is_empty());
    }

    #[test]
    fn dash_cells_are_inapplicable() {
        let codes = InflectionCodes::embedded();
        let mut dem = AdjectiveLike::new("этот", AgreementKind::DemonstrativePronoun);
        dem.nominative = AdjectiveInflection::from_row(row(["э́тот", "э́то", "-", "э́ти"]));
        let pairs = dem.to_code_list(&codes);
        assert_eq!(
            pairs,
            vec![
                ("э́тот".to_string(), 400),
                ("э́то".to_string(), 414),
                ("э́ти".to_string(), 420),
            ]
        );
    }
}
