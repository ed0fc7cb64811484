//! HTTP handlers for the user-activity feed
//!
//! The feed is a canned in-memory dataset pending a real event store;
//! the route shape and response envelope already match the rest of the
//! API so clients can integrate against it today.

use axum::{
    extract::Path,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{InternalServerErrorResponse, NotFoundResponse},
    ApiResponse, AppError,
};
use utoipa::OpenApi;

use crate::models::ActivityEvent;

/// Activities returned per page
const PAGE_SIZE: usize = 10;

/// OpenAPI documentation for the Activity API
#[derive(OpenApi)]
#[openapi(
    paths(get_user_activity),
    components(
        schemas(ActivityEvent),
        responses(NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "User Activity", description = "User activity feed endpoints")
    )
)]
pub struct ApiDoc;

/// Create the activity router
pub fn router() -> Router {
    Router::new().route("/{user_id}/{pagination}", get(get_user_activity))
}

/// Canned activity feed standing in for a real event store
fn sample_feed() -> Vec<ActivityEvent> {
    let user = "6541bccf70101a35308b8c8d";
    vec![
        ActivityEvent::new(user, "Viewed MacBook Pro", "2023-11-02T09:00:00Z"),
        ActivityEvent::new(user, "Added Dell XPS 13 to Cart", "2023-11-02T09:15:00Z"),
        ActivityEvent::new(user, "Purchased Logitech MX Master 3", "2023-11-02T09:30:00Z"),
        ActivityEvent::new(
            user,
            "Viewed Samsung 49-Inch Ultrawide Monitor",
            "2023-11-02T09:45:00Z",
        ),
        ActivityEvent::new(user, "Added Apple AirPods Pro to Cart", "2023-11-02T10:00:00Z"),
        ActivityEvent::new(
            user,
            "Removed HP Spectre x360 from Cart",
            "2023-11-02T10:15:00Z",
        ),
        ActivityEvent::new(user, "Logged In", "2023-11-02T10:30:00Z"),
        ActivityEvent::new(user, "Updated Profile", "2023-11-02T11:00:00Z"),
        ActivityEvent::new(user, "Scheduled Email Newsletter", "2023-11-02T11:15:00Z"),
    ]
}

/// Get one page of a user's activity feed, 10 events per page
#[utoipa::path(
    get,
    path = "/{user_id}/{pagination}",
    tag = "User Activity",
    params(
        ("user_id" = String, Path, description = "User identifier"),
        ("pagination" = u64, Path, description = "1-based page number")
    ),
    responses(
        (status = 200, description = "User activity events", body = ApiResponse<Vec<ActivityEvent>>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user_activity(
    Path((user_id, pagination)): Path<(String, u64)>,
) -> Result<Json<ApiResponse<Vec<ActivityEvent>>>, AppError> {
    let offset = pagination.saturating_sub(1) as usize * PAGE_SIZE;

    let events: Vec<ActivityEvent> = sample_feed()
        .into_iter()
        .filter(|event| event.user_id == user_id)
        .skip(offset)
        .take(PAGE_SIZE)
        .collect();

    if events.is_empty() {
        return Err(AppError::NotFound(format!(
            "No activity found for user {}",
            user_id
        )));
    }

    Ok(Json(ApiResponse::new(events)))
}
