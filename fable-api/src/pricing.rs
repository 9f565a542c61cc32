use axum::{
    extract::State,
    routing::post,
    Json,
    Router,
};
use fable_pricing::{
    calculate_instructor_net, calculate_platform_margin, calculate_publisher_net, PriceBreakdown,
    ProductEconomics,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/pricing/preview", post(preview_service_price))
        .route("/v1/pricing/instructor-net", post(instructor_net))
        .route("/v1/library/pricing/preview", post(preview_library_price))
        .route("/v1/library/pricing/publisher-net", post(publisher_net))
        .route("/v1/library/products/economics", post(product_economics))
}

/// Reads a price typed into a form: numbers and numeric strings are accepted,
/// anything else counts as not entered.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let amount = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(amount.filter(|a| a.is_finite()))
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub net_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct InstructorNetRequest {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub customer_price: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct InstructorNetResponse {
    pub customer_price: f64,
    pub instructor_net: f64,
    pub platform_margin: f64,
}

#[derive(Debug, Deserialize)]
pub struct PublisherNetRequest {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_price: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct PublisherNetResponse {
    pub total_price: f64,
    pub publisher_net: f64,
    pub platform_margin: f64,
}

#[derive(Debug, Deserialize)]
pub struct EconomicsRequest {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub publisher_net: Option<f64>,
}

/// POST /v1/pricing/preview
async fn preview_service_price(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<PriceBreakdown>, AppError> {
    let config = state.settings.pricing_config().await?;
    let breakdown = PriceBreakdown::for_service(req.net_price, config.as_ref());

    tracing::debug!(
        net_price = breakdown.net_price,
        customer_price = breakdown.customer_price,
        configured = config.is_some(),
        "Service price preview"
    );
    Ok(Json(breakdown))
}

/// POST /v1/pricing/instructor-net
async fn instructor_net(
    State(state): State<AppState>,
    Json(req): Json<InstructorNetRequest>,
) -> Result<Json<InstructorNetResponse>, AppError> {
    let config = state.settings.pricing_config().await?;
    let customer_price = req.customer_price.unwrap_or(0.0);
    let instructor_net = calculate_instructor_net(req.customer_price, config.as_ref());

    Ok(Json(InstructorNetResponse {
        customer_price,
        instructor_net,
        platform_margin: calculate_platform_margin(customer_price, instructor_net),
    }))
}

/// POST /v1/library/pricing/preview
async fn preview_library_price(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<PriceBreakdown>, AppError> {
    let settings = state.settings.library_pricing_settings().await?;
    let breakdown = PriceBreakdown::for_library(req.net_price, settings.as_ref());

    tracing::debug!(
        net_price = breakdown.net_price,
        customer_price = breakdown.customer_price,
        configured = settings.is_some(),
        "Library price preview"
    );
    Ok(Json(breakdown))
}

/// POST /v1/library/pricing/publisher-net
async fn publisher_net(
    State(state): State<AppState>,
    Json(req): Json<PublisherNetRequest>,
) -> Result<Json<PublisherNetResponse>, AppError> {
    let settings = state.settings.library_pricing_settings().await?;
    let total_price = req.total_price.unwrap_or(0.0);
    let publisher_net = calculate_publisher_net(req.total_price, settings.as_ref());

    Ok(Json(PublisherNetResponse {
        total_price,
        publisher_net,
        platform_margin: calculate_platform_margin(total_price, publisher_net),
    }))
}

/// POST /v1/library/products/economics
async fn product_economics(Json(req): Json<EconomicsRequest>) -> Json<ProductEconomics> {
    let total_price = req.total_price.unwrap_or(0.0);
    Json(ProductEconomics::new(total_price, req.publisher_net))
}
