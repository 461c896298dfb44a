const TEMPLATE: &str = r#"
You are an educational AI that explains topics to beginners.

Given the topic: "{topic}", generate:

1. History of the topic (150 words)
2. Why & How it works (150 words)
3. Explain in Layman Language (100 words)
4. 5 Beginner Q&A related to it

Output format must be:
{
  "History": "...",
  "Why & How": "...",
  "Layman Explanation": "...",
  "Beginner Q&A": "..."
}
"#;

pub fn build_prompt(topic: &str) -> String {
    TEMPLATE.replace("{topic}", topic)
}
