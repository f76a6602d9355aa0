//! Plain pronoun declension, a single form per case.

use crate::codes::InflectionCodes;
use crate::noun::NounCaseType;

#[derive(Debug, Clone, Default)]
pub struct Pronoun {
    pub lemma: String,
    pub nominative: Option<String>,
    pub genitive: Option<String>,
    pub dative: Option<String>,
    pub accusative: Option<String>,
    pub instrumental: Option<String>,
    pub prepositional: Option<String>,
}

impl Pronoun {
    pub fn new(lemma: &str) -> Pronoun {
        Pronoun {
            lemma: lemma.to_string(),
            ..Pronoun::default()
        }
    }

    /// Records a case form. Cases the pronoun paradigm does not carry
    /// (vocative, locative) are ignored.
    pub fn add_form(&mut self, case: NounCaseType, form: &str) {
        let slot = match case {
            NounCaseType::Nominative => &mut self.nominative,
            NounCaseType::Genitive => &mut self.genitive,
            NounCaseType::Dative => &mut self.dative,
            NounCaseType::Accusative => &mut self.accusative,
            NounCaseType::Instrumental => &mut self.instrumental,
            NounCaseType::Prepositional => &mut self.prepositional,
            NounCaseType::Locative | NounCaseType::Vocative => return,
        };
        *slot = Some(form.to_string());
    }

    pub(crate) fn to_code_list(&self, codes: &InflectionCodes) -> Vec<(String, u16)> {
        let slots = [
            (NounCaseType::Nominative, &self.nominative),
            (NounCaseType::Genitive, &self.genitive),
            (NounCaseType::Dative, &self.dative),
            (NounCaseType::Accusative, &self.accusative),
            (NounCaseType::Instrumental, &self.instrumental),
            (NounCaseType::Prepositional, &self.prepositional),
        ];
        let mut pairs = Vec::new();
        for (case, form) in slots {
            let Some(form) = form else { continue };
            if form.as_str() == "-" {
                continue;
            }
            let Some(code) = codes.pronoun(case) else {
                continue;
            };
            pairs.push((form.clone(), code));
        }
        pairs
    }
}
