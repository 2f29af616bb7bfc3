pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::enhancement::handlers as enhancement;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Result<Router> {
    let cors = cors_layer(&state.config.allowed_origins)?;

    Ok(Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/ai-enhance", post(enhancement::handle_enhance))
        .route("/save-resume", post(resumes::handle_save_resume))
        .route("/resumes", get(resumes::handle_list_resumes))
        .route("/resume/:id", get(resumes::handle_get_resume))
        .layer(cors)
        .with_state(state))
}

/// Allows only the configured origins, with credentials. Methods and headers
/// are mirrored from the preflight since wildcards are invalid with credentials.
fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
