use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, FieldErrors, HealthResponse, SearchField, SearchFlightsResponse, SearchRequest, SearchResultsResponse};
use crate::services::{SearchError, SearchService, SearchStatus};
use std::sync::Arc;

/// Shown to the user when a search cycle fails
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to load flights. Try again.";

/// Travelers is bounded by the form's 1..=10 select
pub const TRAVELERS_OUT_OF_RANGE: &str = "Travelers must be between 1 and 10";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchService>,
}

/// Configure all flight search routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/flights/search", web::post().to(search_flights))
        .route("/flights/results", web::get().to(latest_results));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Search flights endpoint
///
/// POST /api/v1/flights/search
///
/// Request body:
/// ```json
/// {
///   "tripType": "round-trip",
///   "travelers": 1,
///   "travelClass": "economy",
///   "origin": "NYC",
///   "destination": "LAX",
///   "departureDate": "2025-06-01",
///   "returnDate": "2025-06-10"
/// }
/// ```
async fn search_flights(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    // Report boundary errors together with the core's field errors
    if let Err(errors) = req.validate() {
        let mut field_errors = state.search.check(&req);
        field_errors.merge(boundary_errors(&errors));
        tracing::info!("Validation failed for search request: field_errors={}", field_errors);
        return validation_failed(field_errors);
    }

    let req = req.into_inner();
    tracing::info!(
        "Searching flights: {} -> {}, {:?}, class {:?}, travelers {}",
        req.origin,
        req.destination,
        req.trip_type,
        req.travel_class,
        req.travelers
    );

    match state.search.search(req).await {
        Ok(flights) => {
            let response = SearchFlightsResponse {
                search_id: uuid::Uuid::new_v4().to_string(),
                status: SearchStatus::Succeeded,
                total_results: flights.len(),
                flights,
            };

            tracing::info!(
                "Returning {} flights for search {}",
                response.total_results,
                response.search_id
            );

            HttpResponse::Ok().json(response)
        }
        Err(SearchError::Validation(field_errors)) => {
            tracing::info!("Validation failed for search request: field_errors={}", field_errors);
            validation_failed(field_errors)
        }
        Err(e) => {
            tracing::error!("Flight search failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Search failed".to_string(),
                message: SEARCH_FAILED_MESSAGE.to_string(),
                status_code: 500,
                field_errors: None,
            })
        }
    }
}

/// Latest search results
///
/// GET /api/v1/flights/results
async fn latest_results(state: web::Data<AppState>) -> impl Responder {
    let snapshot = state.search.store().snapshot().await;

    HttpResponse::Ok().json(SearchResultsResponse {
        status: snapshot.status,
        total_results: snapshot.flights.len(),
        flights: snapshot.flights,
    })
}

/// Map `validator` failures on the request DTO onto form fields
fn boundary_errors(errors: &validator::ValidationErrors) -> FieldErrors {
    let mut field_errors = FieldErrors::new();
    if errors.field_errors().contains_key("travelers") {
        field_errors.insert(SearchField::Travelers, TRAVELERS_OUT_OF_RANGE);
    }
    field_errors
}

fn validation_failed(field_errors: FieldErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: field_errors.to_string(),
        status_code: 400,
        field_errors: Some(field_errors),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_validation_failed_status() {
        let mut errors = FieldErrors::new();
        errors.insert(SearchField::Origin, "Origin is required");

        let response = validation_failed(errors);
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_boundary_errors_merge_with_core_errors() {
        let request = SearchRequest {
            travelers: 300,
            ..SearchRequest::default()
        };
        let errors = request.validate().unwrap_err();

        let mut field_errors = FieldErrors::new();
        field_errors.insert(SearchField::Origin, "Origin is required");
        field_errors.merge(boundary_errors(&errors));

        assert_eq!(field_errors.len(), 2);
        assert_eq!(field_errors.get(SearchField::Travelers), Some(TRAVELERS_OUT_OF_RANGE));
        assert_eq!(field_errors.get(SearchField::Origin), Some("Origin is required"));
    }
}
