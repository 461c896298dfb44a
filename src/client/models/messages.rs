use crate::common::models::ExplanationResult;

#[derive(Debug, Clone)]
pub enum Message {
    TopicChanged(String),
    Submit,
    /// Outcome of the fetch started by `Submit`. The error side carries the
    /// failure message that ends up in the fallback payload.
    ExplanationReceived(Result<ExplanationResult, String>),
    ThemeToggled,
    /// Delayed alert clear, tagged with the request that scheduled it.
    ClearLog(u64),
}
