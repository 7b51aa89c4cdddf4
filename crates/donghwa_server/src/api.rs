//! HTTP API for the storybook service.

use crate::{pipeline, render};
use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use donghwa_core::{Illustrator, StoryTeller};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Shared handler state: the two generator backends.
///
/// Read-only after startup; requests share no mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Text-generation backend
    pub teller: Arc<dyn StoryTeller>,
    /// Image-generation backend
    pub illustrator: Arc<dyn Illustrator>,
}

impl AppState {
    /// Creates a new app state.
    pub fn new(teller: Arc<dyn StoryTeller>, illustrator: Arc<dyn Illustrator>) -> Self {
        Self { teller, illustrator }
    }
}

/// Form payload of `POST /generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateForm {
    /// The story topic
    pub prompt: String,
}

/// Creates the service router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Renders the topic input form.
#[instrument(skip_all)]
async fn index() -> Html<String> {
    Html(render::render_index())
}

/// Runs the story pipeline and renders the result or the error view.
///
/// Always answers 200 with an HTML body; failures become a rendered
/// message, never a bare 5xx.
#[instrument(skip_all)]
async fn generate(State(state): State<AppState>, Form(form): Form<GenerateForm>) -> Html<String> {
    match pipeline::generate_story(
        &form.prompt,
        state.teller.as_ref(),
        state.illustrator.as_ref(),
    )
    .await
    {
        Ok(story) => Html(render::render_story(&story)),
        Err(e) => {
            warn!(error = %e, "Story generation failed");
            Html(render::render_error(&e.user_message()))
        }
    }
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
