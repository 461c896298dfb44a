use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::post;
use axum::{Json, Router};
use log::{error, info};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::common::models::{ExplanationResult, TopicRequest};
use crate::server::generator::ContentGenerator;
use crate::server::prompt::build_prompt;
use crate::server::sections::SectionExtractor;

pub struct AppState {
    pub generator: Arc<dyn ContentGenerator>,
    pub extractor: SectionExtractor,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self { generator, extractor: SectionExtractor::new() }
    }
}

/// Router exposing `POST /api/topic`, with CORS opened to a single origin.
pub fn build_router(state: AppState, allowed_origin: &str) -> anyhow::Result<Router> {
    let origin = HeaderValue::from_str(allowed_origin)
        .map_err(|e| anyhow::anyhow!("invalid ALLOWED_ORIGIN '{}': {}", allowed_origin, e))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Ok(Router::new()
        .route("/api/topic", post(generate_content))
        .layer(cors)
        .with_state(Arc::new(state)))
}

/// Always answers 200 with a JSON object; generation failures become the fallback payload.
async fn generate_content(State(state): State<SharedState>, Json(req): Json<TopicRequest>) -> Json<ExplanationResult> {
    info!("📚 Generating explanation for '{}' with {}", req.topic, state.generator.model_id());
    let prompt = build_prompt(&req.topic);

    match state.generator.generate(&prompt).await {
        Ok(output) => Json(state.extractor.extract(&output)),
        Err(e) => {
            error!("Generation failed for '{}': {}", req.topic, e);
            Json(ExplanationResult::fallback(e.to_string()))
        }
    }
}
