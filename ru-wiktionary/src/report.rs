//! Output shaping: the JSON and XML documents handed to the CLI and the
//! HTTP server.

use ru_grammar::{codes, InflectionCodes};
use serde::{Deserialize, Serialize};

use crate::page::WiktionaryPage;

const NOT_FOUND: &str = "Not found. Is this an uninflected form? Spelling?";

/// One inflected form with its taxonomy code and, when the taxonomy knows
/// the code, a human-readable description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflectionEntry {
    pub code: u16,
    pub form: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

/// The response document for one lemma lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflectionReport {
    #[serde(rename = "in")]
    pub lemma: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forms: Option<Vec<InflectionEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InflectionReport {
    /// The report for a lemma whose page could not be interpreted, spelled
    /// the same for a missing page and an unrecognized part of speech.
    pub fn not_found(lemma: &str) -> InflectionReport {
        InflectionReport {
            lemma: lemma.to_string(),
            pos: None,
            forms: None,
            error: Some(NOT_FOUND.to_string()),
        }
    }

    /// Builds the report for a parsed page. Uninflected parts of speech
    /// yield a report with a POS tag and no forms.
    pub fn from_page(page: &WiktionaryPage, codes: &InflectionCodes) -> InflectionReport {
        let Some(pos) = page.part_of_speech() else {
            return InflectionReport::not_found(page.lemma());
        };
        let mut report = InflectionReport {
            lemma: page.lemma().to_string(),
            pos: pos.to_upos().map(str::to_string),
            forms: None,
            error: None,
        };
        match page.parse() {
            Ok(Some(word)) => {
                let entries = word
                    .to_code_list(codes)
                    .into_iter()
                    .map(|(form, code)| InflectionEntry {
                        code,
                        form,
                        desc: codes::describe(code),
                    })
                    .collect();
                report.forms = Some(entries);
            }
            Ok(None) => {}
            Err(err) => {
                log::warn!("no paradigm for {:?}: {err}", page.lemma());
                // An inflecting part of speech without a usable table still
                // reports a form list, just an empty one.
                report.forms = Some(Vec::new());
            }
        }
        report
    }

    /// Forms carrying the given code, in report order.
    pub fn forms_with_code(&self, code: u16) -> Vec<&str> {
        self.forms
            .iter()
            .flatten()
            .filter(|entry| entry.code == code)
            .map(|entry| entry.form.as_str())
            .collect()
    }

    /// Renders the report as an XML document rooted at `<inflections>`.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<inflections>");
        push_tag(&mut xml, "in", &self.lemma);
        if let Some(pos) = &self.pos {
            push_tag(&mut xml, "pos", pos);
        }
        if let Some(error) = &self.error {
            push_tag(&mut xml, "error", error);
        }
        if let Some(forms) = &self.forms {
            xml.push_str("<forms>");
            for entry in forms {
                xml.push_str("<inflection>");
                push_tag(&mut xml, "code", &entry.code.to_string());
                push_tag(&mut xml, "form", &entry.form);
                xml.push_str("</inflection>");
            }
            xml.push_str("</forms>");
        }
        xml.push_str("</inflections>");
        xml
    }
}

fn push_tag(xml: &mut String, tag: &str, value: &str) {
    xml.push('<');
    xml.push_str(tag);
    xml.push('>');
    xml.push_str(&html_escape::encode_text(value));
    xml.push_str("</");
    xml.push_str(tag);
    xml.push('>');
}
