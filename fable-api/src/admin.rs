use axum::{
    extract::State,
    routing::get,
    Json,
    Router,
};
use fable_pricing::{LibraryPricingSettings, PricingConfig};

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/admin/pricing/settings",
            get(get_pricing_settings).put(update_pricing_settings),
        )
        .route(
            "/v1/admin/library/pricing/settings",
            get(get_library_pricing_settings).put(update_library_pricing_settings),
        )
}

// ============================================================================
// Session & Package Pricing
// ============================================================================

/// GET /v1/admin/pricing/settings
async fn get_pricing_settings(
    State(state): State<AppState>,
) -> Result<Json<Option<PricingConfig>>, AppError> {
    Ok(Json(state.settings.pricing_config().await?))
}

/// PUT /v1/admin/pricing/settings
async fn update_pricing_settings(
    State(state): State<AppState>,
    Json(req): Json<PricingConfig>,
) -> Result<Json<PricingConfig>, AppError> {
    let saved = state.settings.update_pricing_config(req).await?;
    Ok(Json(saved))
}

// ============================================================================
// Library Pricing
// ============================================================================

/// GET /v1/admin/library/pricing/settings
async fn get_library_pricing_settings(
    State(state): State<AppState>,
) -> Result<Json<Option<LibraryPricingSettings>>, AppError> {
    Ok(Json(state.settings.library_pricing_settings().await?))
}

/// PUT /v1/admin/library/pricing/settings
async fn update_library_pricing_settings(
    State(state): State<AppState>,
    Json(req): Json<LibraryPricingSettings>,
) -> Result<Json<LibraryPricingSettings>, AppError> {
    let saved = state.settings.update_library_pricing_settings(req).await?;
    Ok(Json(saved))
}
