use crate::core::{ActivityRegistry, ActivitySnapshot, Confirmation};
use crate::utils::error::{ActivityError, ErrorCategory};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Redirect,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub const INDEX_PATH: &str = "/static/index.html";

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn ActivityRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<dyn ActivityRegistry>) -> Self {
        Self { registry }
    }
}

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

type ApiError = (StatusCode, Json<Value>);

pub fn router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/health", get(health_handler))
        .route("/activities", get(list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(unregister_handler),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "activities": state.registry.len(),
    }))
}

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivitySnapshot> {
    Json(state.registry.list())
}

pub async fn signup_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<Value>, ApiError> {
    state
        .registry
        .enroll(&activity_name, &query.email)
        .map(confirmation_body)
        .map_err(error_response)
}

pub async fn unregister_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<Value>, ApiError> {
    state
        .registry
        .withdraw(&activity_name, &query.email)
        .map(confirmation_body)
        .map_err(error_response)
}

fn confirmation_body(confirmation: Confirmation) -> Json<Value> {
    Json(serde_json::json!({ "message": confirmation.to_string() }))
}

pub fn status_for(error: &ActivityError) -> StatusCode {
    match error {
        ActivityError::ActivityNotFound { .. } => StatusCode::NOT_FOUND,
        ActivityError::AlreadyEnrolled { .. } | ActivityError::NotEnrolled { .. } => {
            StatusCode::BAD_REQUEST
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: ActivityError) -> ApiError {
    let status = status_for(&error);
    let detail = match error.category() {
        ErrorCategory::Client => error.to_string(),
        _ => {
            tracing::error!(error = %error, "registry call failed");
            "Internal server error".to_string()
        }
    };

    (status, Json(serde_json::json!({ "detail": detail })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found = ActivityError::ActivityNotFound {
            activity: "Nope".to_string(),
        };
        assert_eq!(status_for(&not_found), StatusCode::NOT_FOUND);

        let already = ActivityError::AlreadyEnrolled {
            activity: "Soccer".to_string(),
            participant: "james@mergington.edu".to_string(),
        };
        assert_eq!(status_for(&already), StatusCode::BAD_REQUEST);

        let not_enrolled = ActivityError::NotEnrolled {
            activity: "Soccer".to_string(),
            participant: "x@mergington.edu".to_string(),
        };
        assert_eq!(status_for(&not_enrolled), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_body_uses_detail() {
        let (status, Json(body)) = error_response(ActivityError::ActivityNotFound {
            activity: "Nope".to_string(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Activity not found");
    }

    #[test]
    fn test_system_errors_are_not_leaked() {
        let (status, Json(body)) = error_response(ActivityError::ServerError {
            message: "socket closed at 10.0.0.3".to_string(),
        });
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Internal server error");
    }
}
