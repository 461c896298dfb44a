use crate::common::models::{ExplanationResult, SectionContent};

/// One rendered result card: a section label and the text shown under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub body: String,
}

/// Maps a result to display cards, one per section, in payload order.
pub fn render_cards(result: &ExplanationResult) -> Vec<Card> {
    result
        .sections()
        .iter()
        .map(|section| Card {
            title: section.label.clone(),
            body: render_content(&section.content),
        })
        .collect()
}

pub fn render_content(content: &SectionContent) -> String {
    match content {
        SectionContent::Text(text) => text.clone(),
        // Serializing a `Value` can't fail: every key is already a string.
        SectionContent::Structured(value) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
    }
}
