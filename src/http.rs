use crate::availability;
use crate::backend::BookingBackend;
use crate::catalog;
use crate::configuration::Configuration;
use crate::errors::ApiError;
use crate::types::{Booking, BookingRequest, TimeSlot};
use axum::body::Bytes;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[derive(Clone)]
pub struct AppState<B, C> {
    backend: B,
    configuration: C,
}

#[derive(Debug, Deserialize)]
struct TimeSlotQuery {
    date: Option<String>,
    #[serde(rename = "barberId")]
    barber_id: Option<String>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

pub fn create_app<B: BookingBackend, C: Configuration>(backend: B, configuration: C) -> Router {
    // The website is served from a different origin than this API.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState {
        backend,
        configuration,
    };

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/bookings",
            post(create_booking).fallback(method_not_allowed),
        )
        .route(
            "/api/timeslots",
            get(get_timeslots).fallback(method_not_allowed),
        )
        .route("/api/barbers", get(get_barbers).fallback(method_not_allowed))
        .route(
            "/api/services",
            get(get_services).fallback(method_not_allowed),
        )
        .route("/api/reviews", get(get_reviews).fallback(method_not_allowed))
        .with_state(state)
        .layer(cors)
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn create_booking<B: BookingBackend, C: Configuration>(
    State(state): State<AppState<B, C>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    // Bodies that fail to decode surface as 500, not 400. The deployed contract
    // pins this asymmetry; DESIGN.md records it.
    let request: BookingRequest = serde_json::from_slice(&body)
        .map_err(|err| ApiError::Internal(format!("undecodable booking payload: {err}")))?;

    let details = request.into_details()?;
    let booking = state.backend.create_booking(details);
    Ok((StatusCode::CREATED, Json(booking)))
}

async fn get_timeslots<B: BookingBackend, C: Configuration>(
    State(state): State<AppState<B, C>>,
    Query(query): Query<TimeSlotQuery>,
) -> Result<Json<Vec<TimeSlot>>, ApiError> {
    let (date, barber_id) = match (&query.date, &query.barber_id) {
        (Some(date), Some(barber_id)) if !date.is_empty() && !barber_id.is_empty() => {
            (date, barber_id)
        }
        _ => return Err(ApiError::Validation("Date and barberId are required")),
    };

    // The grid comes from the configured hours alone. Existing bookings are not
    // consulted, so every slot is reported available.
    info!(%date, %barber_id, "listing timeslots");
    Ok(Json(availability::day_slots(
        state.configuration.working_hours(),
    )))
}

async fn get_barbers() -> Json<&'static [catalog::Barber]> {
    Json(catalog::BARBERS)
}

async fn get_services() -> Json<&'static [catalog::Service]> {
    Json(catalog::SERVICES)
}

async fn get_reviews() -> Json<&'static [catalog::Review]> {
    Json(catalog::REVIEWS)
}
