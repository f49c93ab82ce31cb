//! Router assembly and shared request state.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use zoooom_core::application::TemplateInteractor;

use crate::{config::PaginationConfig, controllers::template_controller};

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub interactor: Arc<TemplateInteractor>,
    pub pagination: PaginationConfig,
}

impl AppState {
    pub fn new(interactor: TemplateInteractor, pagination: PaginationConfig) -> Self {
        Self {
            interactor: Arc::new(interactor),
            pagination,
        }
    }
}

/// Mount the templates endpoints.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/templates",
            get(template_controller::index).post(template_controller::create),
        )
        .route("/templates/{uid}", get(template_controller::show))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
