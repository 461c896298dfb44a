//! Pulls the four known sections out of raw model output.
//!
//! Models rarely return clean JSON, so each section is matched on its own:
//! `"<label>": "<text>"` where the text runs (lazily, across newlines) up to
//! the first quote followed by a comma, a newline or the end of the output.

use log::debug;
use regex::Regex;

use crate::common::models::{ExplanationResult, SectionContent, KNOWN_SECTIONS, SECTION_UNPARSED};

pub struct SectionExtractor {
    patterns: Vec<(&'static str, Regex)>,
}

impl SectionExtractor {
    pub fn new() -> Self {
        let patterns = KNOWN_SECTIONS
            .iter()
            .map(|label| {
                let pattern = format!(r#"(?s)"{}"\s*:\s*"(.+?)"(?:,|\n|$)"#, regex::escape(label));
                // Labels are escaped, so the pattern is always valid.
                let re = Regex::new(&pattern).expect("section pattern compiles");
                (*label, re)
            })
            .collect();
        Self { patterns }
    }

    pub fn extract(&self, output: &str) -> ExplanationResult {
        let mut result = ExplanationResult::default();
        for (label, re) in &self.patterns {
            let text = match re.captures(output).and_then(|c| c.get(1)) {
                Some(m) => m.as_str().trim().to_string(),
                None => {
                    debug!("Section '{}' not found in model output", label);
                    SECTION_UNPARSED.to_string()
                }
            };
            result.push(*label, SectionContent::Text(text));
        }
        result
    }
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new()
    }
}
