pub mod explainer;
pub mod logger;
