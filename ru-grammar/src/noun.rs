//! Noun declension paradigm.

use crate::codes::InflectionCodes;
use crate::GrammaticalNumber;

/// The cases a noun declension table can carry. Locative and vocative only
/// appear for the handful of nouns that still distinguish them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NounCaseType {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Prepositional,
    Locative,
    Vocative,
}

impl NounCaseType {
    /// Every case in flattening order.
    pub const ALL: [NounCaseType; 8] = [
        NounCaseType::Nominative,
        NounCaseType::Genitive,
        NounCaseType::Dative,
        NounCaseType::Accusative,
        NounCaseType::Instrumental,
        NounCaseType::Prepositional,
        NounCaseType::Locative,
        NounCaseType::Vocative,
    ];

    pub fn case_name(self) -> &'static str {
        match self {
            NounCaseType::Nominative => "nominative",
            NounCaseType::Genitive => "genitive",
            NounCaseType::Dative => "dative",
            NounCaseType::Accusative => "accusative",
            NounCaseType::Instrumental => "instrumental",
            NounCaseType::Prepositional => "prepositional",
            NounCaseType::Locative => "locative",
            NounCaseType::Vocative => "vocative",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One case's forms, singular and plural. Either list may hold several
/// alternates, or nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NounInflection {
    pub singular: Vec<String>,
    pub plural: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Noun {
    pub lemma: String,
    cases: [NounInflection; 8],
}

impl Noun {
    pub fn new(lemma: &str) -> Noun {
        Noun {
            lemma: lemma.to_string(),
            cases: std::array::from_fn(|_| NounInflection::default()),
        }
    }

    /// Appends forms to a case slot. Repeated calls accumulate alternates.
    pub fn add_form(&mut self, case: NounCaseType, number: GrammaticalNumber, forms: &[String]) {
        let slot = &mut self.cases[case.index()];
        let list = match number {
            GrammaticalNumber::Singular => &mut slot.singular,
            GrammaticalNumber::Plural => &mut slot.plural,
        };
        list.extend(forms.iter().cloned());
    }

    pub fn case(&self, case: NounCaseType) -> &NounInflection {
        &self.cases[case.index()]
    }

    pub(crate) fn to_code_list(&self, codes: &InflectionCodes) -> Vec<(String, u16)> {
        let mut pairs = Vec::new();
        for case in NounCaseType::ALL {
            let inflection = self.case(case);
            for (number, forms) in [
                (GrammaticalNumber::Singular, &inflection.singular),
                (GrammaticalNumber::Plural, &inflection.plural),
            ] {
                let code = codes.noun(case, number);
                for form in forms {
                    if form == "-" {
                        continue;
                    }
                    pairs.push((form.clone(), code));
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_accumulate_per_slot() {
        let mut noun = Noun::new("рука");
        noun.add_form(
            NounCaseType::Instrumental,
            GrammaticalNumber::Singular,
            &["руко́й".to_string()],
        );
        noun.add_form(
            NounCaseType::Instrumental,
            GrammaticalNumber::Singular,
            &["руко́ю".to_string()],
        );
        assert_eq!(
            noun.case(NounCaseType::Instrumental).singular,
            vec!["руко́й", "руко́ю"]
        );
        assert!(noun.case(NounCaseType::Instrumental).plural.is_empty());
    }

    #[test]
    fn flattening_orders_by_case_then_number() {
        let codes = InflectionCodes::embedded();
        let mut noun = Noun::new("рука");
        noun.add_form(
            NounCaseType::Nominative,
            GrammaticalNumber::Singular,
            &["рука́".to_string()],
        );
        noun.add_form(
            NounCaseType::Nominative,
            GrammaticalNumber::Plural,
            &["ру́ки".to_string()],
        );
        noun.add_form(
            NounCaseType::Genitive,
            GrammaticalNumber::Singular,
            &["руки́".to_string()],
        );
        assert_eq!(
            noun.to_code_list(&codes),
            vec![
                ("рука́".to_string(), 1),
                ("ру́ки".to_string(), 2),
                ("руки́".to_string(), 3),
            ]
        );
    }

    #[test]
    fn placeholder_dashes_are_dropped() {
        let codes = InflectionCodes::embedded();
        let mut noun = Noun::new("щец");
        noun.add_form(
            NounCaseType::Nominative,
            GrammaticalNumber::Singular,
            &["-".to_string()],
        );
        noun.add_form(
            NounCaseType::Genitive,
            GrammaticalNumber::Plural,
            &["щец".to_string()],
        );
        assert_eq!(noun.to_code_list(&codes), vec![("щец".to_string(), 4)]);
    }

    #[test]
    fn locative_and_vocative_share_codes_across_number() {
        let codes = InflectionCodes::embedded();
        let mut noun = Noun::new("лес");
        noun.add_form(
            NounCaseType::Locative,
            GrammaticalNumber::Singular,
            &["в лесу́".to_string()],
        );
        assert_eq!(
            noun.to_code_list(&codes),
            vec![("в лесу́".to_string(), 17)]
        );
    }
}
