//! Verb conjugation paradigm: person/number grids for present and future,
//! gendered past tense, imperative, and participles.

use crate::codes::InflectionCodes;
use crate::{GrammaticalNumber, Person};

/// Which person/number grid a form belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbTenseKind {
    Present,
    Future,
}

/// Gender/number slot of the past tense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbPastSlot {
    Masculine,
    Feminine,
    Neuter,
    Plural,
}

impl VerbPastSlot {
    pub const ALL: [VerbPastSlot; 4] = [
        VerbPastSlot::Masculine,
        VerbPastSlot::Feminine,
        VerbPastSlot::Neuter,
        VerbPastSlot::Plural,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipleKind {
    PresentActive,
    PastActive,
    PresentAdverbial,
    PastAdverbial,
    PresentPassive,
    PastPassive,
}

/// The three persons of one number column.
#[derive(Debug, Clone, Default)]
pub struct VerbTensePlurality {
    pub p1: Option<String>,
    pub p2: Option<String>,
    pub p3: Option<String>,
}

impl VerbTensePlurality {
    fn person(&self, person: Person) -> Option<&String> {
        match person {
            Person::First => self.p1.as_ref(),
            Person::Second => self.p2.as_ref(),
            Person::Third => self.p3.as_ref(),
        }
    }

    fn person_mut(&mut self, person: Person) -> &mut Option<String> {
        match person {
            Person::First => &mut self.p1,
            Person::Second => &mut self.p2,
            Person::Third => &mut self.p3,
        }
    }
}

/// A person/number grid, present or future.
#[derive(Debug, Clone, Default)]
pub struct VerbTense {
    pub singular: VerbTensePlurality,
    pub plural: VerbTensePlurality,
}

impl VerbTense {
    fn column(&self, number: GrammaticalNumber) -> &VerbTensePlurality {
        match number {
            GrammaticalNumber::Singular => &self.singular,
            GrammaticalNumber::Plural => &self.plural,
        }
    }

    pub fn add_form(&mut self, number: GrammaticalNumber, person: Person, form: &str) {
        let column = match number {
            GrammaticalNumber::Singular => &mut self.singular,
            GrammaticalNumber::Plural => &mut self.plural,
        };
        *column.person_mut(person) = Some(form.to_string());
    }

    /// Fills the grid from six forms in order: singular 1st/2nd/3rd person,
    /// then plural 1st/2nd/3rd. Extra entries are ignored.
    pub fn add_form_list(&mut self, forms: &[String]) {
        for (idx, form) in forms.iter().take(6).enumerate() {
            let number = if idx < 3 {
                GrammaticalNumber::Singular
            } else {
                GrammaticalNumber::Plural
            };
            if let Some(person) = Person::from_index((idx % 3 + 1) as u8) {
                self.add_form(number, person, form);
            }
        }
    }
}

/// Past-tense forms, one per gender plus the plural.
#[derive(Debug, Clone, Default)]
pub struct VerbPastTense {
    pub masculine: Option<String>,
    pub feminine: Option<String>,
    pub neuter: Option<String>,
    pub plural: Option<String>,
}

impl VerbPastTense {
    pub fn slot_mut(&mut self, slot: VerbPastSlot) -> &mut Option<String> {
        match slot {
            VerbPastSlot::Masculine => &mut self.masculine,
            VerbPastSlot::Feminine => &mut self.feminine,
            VerbPastSlot::Neuter => &mut self.neuter,
            VerbPastSlot::Plural => &mut self.plural,
        }
    }

    fn slot(&self, slot: VerbPastSlot) -> Option<&String> {
        match slot {
            VerbPastSlot::Masculine => self.masculine.as_ref(),
            VerbPastSlot::Feminine => self.feminine.as_ref(),
            VerbPastSlot::Neuter => self.neuter.as_ref(),
            VerbPastSlot::Plural => self.plural.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct VerbImperativeTense {
    pub singular: Option<String>,
    pub plural: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Verb {
    pub lemma: String,
    pub present: VerbTense,
    pub future: VerbTense,
    pub past: VerbPastTense,
    pub imperative: VerbImperativeTense,
    pub present_active_participle: Option<String>,
    pub past_active_participle: Option<String>,
    pub present_adverbial_participle: Option<String>,
    /// Past adverbial participles commonly come in pairs (e.g. both the
    /// -в and -вши endings), so this slot is a list.
    pub past_adverbial_participle: Vec<String>,
    pub present_passive_participle: Option<String>,
    pub past_passive_participle: Option<String>,
}

impl Verb {
    pub fn new(lemma: &str) -> Verb {
        Verb {
            lemma: lemma.to_string(),
            present: VerbTense::default(),
            future: VerbTense::default(),
            past: VerbPastTense::default(),
            imperative: VerbImperativeTense::default(),
            present_active_participle: None,
            past_active_participle: None,
            present_adverbial_participle: None,
            past_adverbial_participle: Vec::new(),
            present_passive_participle: None,
            past_passive_participle: None,
        }
    }

    /// Records a past-tense form, keeping the first value written to a slot.
    pub fn add_past_form(&mut self, slot: VerbPastSlot, form: &str) {
        let target = self.past.slot_mut(slot);
        if target.is_none() {
            *target = Some(form.to_string());
        }
    }

    pub fn has_present_tense(&self) -> bool {
        self.present.singular.p1.is_some()
    }

    pub fn has_future_tense(&self) -> bool {
        self.future.singular.p1.is_some()
    }

    /// Tense presence by name, used by callers that carry the tense as text.
    pub fn has_tense_named(&self, name: &str) -> bool {
        match name {
            "present" => self.has_present_tense(),
            "future" => self.has_future_tense(),
            "past" => self.past.masculine.is_some(),
            "imperative" => self.imperative.singular.is_some(),
            _ => false,
        }
    }

    pub(crate) fn to_code_list(&self, codes: &InflectionCodes) -> Vec<(String, u16)> {
        let mut pairs = Vec::new();
        for (kind, tense) in [
            (VerbTenseKind::Present, &self.present),
            (VerbTenseKind::Future, &self.future),
        ] {
            for number in [GrammaticalNumber::Singular, GrammaticalNumber::Plural] {
                let column = tense.column(number);
                for person in [Person::First, Person::Second, Person::Third] {
                    if let Some(form) = column.person(person) {
                        pairs.push((form.clone(), codes.verb_person(kind, number, person)));
                    }
                }
            }
        }
        for slot in VerbPastSlot::ALL {
            if let Some(form) = self.past.slot(slot) {
                pairs.push((form.clone(), codes.verb_past(slot)));
            }
        }
        for (number, form) in [
            (GrammaticalNumber::Singular, &self.imperative.singular),
            (GrammaticalNumber::Plural, &self.imperative.plural),
        ] {
            if let Some(form) = form {
                pairs.push((form.clone(), codes.verb_imperative(number)));
            }
        }
        let scalar_participles = [
            (ParticipleKind::PresentActive, &self.present_active_participle),
            (ParticipleKind::PastActive, &self.past_active_participle),
            (ParticipleKind::PastPassive, &self.past_passive_participle),
            (
                ParticipleKind::PresentPassive,
                &self.present_passive_participle,
            ),
            (
                ParticipleKind::PresentAdverbial,
                &self.present_adverbial_participle,
            ),
        ];
        for (kind, form) in scalar_participles {
            if let Some(form) = form {
                pairs.push((form.clone(), codes.participle(kind)));
            }
        }
        for variant in &self.past_adverbial_participle {
            pairs.push((
                variant.clone(),
                codes.participle(ParticipleKind::PastAdverbial),
            ));
        }
        pairs
    }
}
