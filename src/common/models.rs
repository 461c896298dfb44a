use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Section labels every explanation is expected to carry, in display order.
pub const KNOWN_SECTIONS: [&str; 4] = ["History", "Why & How", "Layman Explanation", "Beginner Q&A"];

/// Placeholder used for every section when generation fails.
pub const GENERATION_FAILED: &str = "Could not generate content.";

/// Placeholder used by the server when a single section can't be extracted.
pub const SECTION_UNPARSED: &str = "Could not parse this section.";

pub const ERROR_KEY: &str = "error";

/// Body of `POST /api/topic`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRequest {
    pub topic: String,
}

/// Content of one labelled section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Text(String),
    Structured(Value),
}

impl From<Value> for SectionContent {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => SectionContent::Text(s),
            other => SectionContent::Structured(other),
        }
    }
}

impl SectionContent {
    fn to_value(&self) -> Value {
        match self {
            SectionContent::Text(s) => Value::String(s.clone()),
            SectionContent::Structured(v) => v.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub label: String,
    pub content: SectionContent,
}

/// Ordered label → content mapping returned by the explanation endpoint.
///
/// Sections keep the order in which the keys appeared in the response body.
/// Relies on `serde_json`'s `preserve_order` feature for `Map` iteration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExplanationResult {
    sections: Vec<Section>,
}

impl ExplanationResult {
    pub fn from_map(map: Map<String, Value>) -> Self {
        let sections = map
            .into_iter()
            .map(|(label, value)| Section { label, content: value.into() })
            .collect();
        Self { sections }
    }

    /// Fixed-shape payload shown when the remote call fails.
    pub fn fallback(error: impl Into<String>) -> Self {
        let mut sections: Vec<Section> = KNOWN_SECTIONS
            .iter()
            .map(|label| Section {
                label: label.to_string(),
                content: SectionContent::Text(GENERATION_FAILED.to_string()),
            })
            .collect();
        sections.push(Section {
            label: ERROR_KEY.to_string(),
            content: SectionContent::Text(error.into()),
        });
        Self { sections }
    }

    pub fn push(&mut self, label: impl Into<String>, content: SectionContent) {
        self.sections.push(Section { label: label.into(), content });
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.label.as_str())
    }

    pub fn get(&self, label: &str) -> Option<&SectionContent> {
        self.sections.iter().find(|s| s.label == label).map(|s| &s.content)
    }

    /// Failure message, present only on fallback payloads (or if the server sent one).
    pub fn error(&self) -> Option<&str> {
        match self.get(ERROR_KEY) {
            Some(SectionContent::Text(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Well-known labels that the payload doesn't contain.
    pub fn missing_known_sections(&self) -> Vec<&'static str> {
        KNOWN_SECTIONS
            .iter()
            .copied()
            .filter(|label| self.get(label).is_none())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for ExplanationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.label, &section.content.to_value())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ExplanationResult {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_map(map))
    }
}
