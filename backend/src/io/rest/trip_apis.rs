//! # REST API for Trip Management
//!
//! Endpoints for creating, listing, updating and deleting trips.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::{CreateTripRequest, MessageResponse, Trip, UpdateTripRequest};
use tracing::{error, info};

use super::error_response;
use super::mappers::TripMapper;
use crate::AppState;

/// Create a router for trip related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trips", get(list_trips).post(create_trip))
        .route(
            "/trips/:trip_id",
            get(get_trip).put(update_trip).delete(delete_trip),
        )
}

/// List all trips, most recently updated first
async fn list_trips(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/trips");

    match state.trip_service.list_trips().await {
        Ok(trips) => {
            let response: Vec<Trip> = trips.into_iter().map(TripMapper::to_dto).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list trips: {}", e);
            error_response(e)
        }
    }
}

/// Create a new trip
async fn create_trip(
    State(state): State<AppState>,
    Json(request): Json<CreateTripRequest>,
) -> impl IntoResponse {
    info!("POST /api/trips - request: {:?}", request);

    let command = TripMapper::to_create_command(request);
    match state.trip_service.create_trip(command).await {
        Ok(trip) => (StatusCode::CREATED, Json(TripMapper::to_dto(trip))).into_response(),
        Err(e) => {
            error!("Failed to create trip: {}", e);
            error_response(e)
        }
    }
}

/// Get a trip with all of its expenses
async fn get_trip(State(state): State<AppState>, Path(trip_id): Path<i64>) -> impl IntoResponse {
    info!("GET /api/trips/{}", trip_id);

    match state.trip_service.get_trip(trip_id).await {
        Ok((trip, expenses)) => {
            (StatusCode::OK, Json(TripMapper::to_detail_dto(trip, expenses))).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Update a trip
async fn update_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<i64>,
    Json(request): Json<UpdateTripRequest>,
) -> impl IntoResponse {
    info!("PUT /api/trips/{} - request: {:?}", trip_id, request);

    let command = TripMapper::to_update_command(request);
    match state.trip_service.update_trip(trip_id, command).await {
        Ok(trip) => (StatusCode::OK, Json(TripMapper::to_dto(trip))).into_response(),
        Err(e) => {
            error!("Failed to update trip {}: {}", trip_id, e);
            error_response(e)
        }
    }
}

/// Delete a trip and its expenses
async fn delete_trip(State(state): State<AppState>, Path(trip_id): Path<i64>) -> impl IntoResponse {
    info!("DELETE /api/trips/{}", trip_id);

    match state.trip_service.delete_trip(trip_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Trip deleted".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
