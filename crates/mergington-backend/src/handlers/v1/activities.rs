use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mergington::data::{ErrorDetail, MessageResponse};
use mergington::errors::DirectoryError;
use mergington::log;
use mergington::serde::Deserialize;

use crate::services::ActivityService;

#[derive(Debug, Deserialize)]
#[serde(crate = "mergington::serde")]
pub struct EmailQuery {
    pub email: String,
}

fn error_response(err: DirectoryError) -> Response {
    let status = match err {
        DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
        DirectoryError::AlreadySignedUp { .. } | DirectoryError::NotSignedUp { .. } => {
            StatusCode::BAD_REQUEST
        }
    };
    (status, Json(ErrorDetail::new(err.to_string()))).into_response()
}

fn rejection_response(rejection: QueryRejection) -> Response {
    log::warn!("Rejected query string: {}", rejection.body_text());
    (
        rejection.status(),
        Json(ErrorDetail::new(rejection.body_text())),
    )
        .into_response()
}

/// Handler to list every activity with its participants
pub async fn list(State(state): State<Arc<crate::AppState>>) -> Response {
    match state.activities.list().await {
        Ok(directory) => (StatusCode::OK, Json(directory)).into_response(),
        Err(err) => error_response(err),
    }
}

/// Handler to get a single activity by name
pub async fn get(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
) -> Response {
    match state.activities.get(&activity_name).await {
        Ok(activity) => (StatusCode::OK, Json(activity)).into_response(),
        Err(err) => error_response(err),
    }
}

/// Handler to sign a student up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Response {
    let Query(EmailQuery { email }) = match query {
        Ok(query) => query,
        Err(rejection) => return rejection_response(rejection),
    };
    match state.activities.sign_up(&activity_name, &email).await {
        Ok(_) => {
            log::info!("Signed up {} for {}", email, activity_name);
            Json(MessageResponse {
                message: format!("Signed up {email} for {activity_name}"),
            })
            .into_response()
        }
        Err(err) => {
            log::warn!(
                "Sign up of {} for {} rejected: {:?}",
                email,
                activity_name,
                err
            );
            error_response(err)
        }
    }
}

/// Handler to remove a student from an activity
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Response {
    let Query(EmailQuery { email }) = match query {
        Ok(query) => query,
        Err(rejection) => return rejection_response(rejection),
    };
    match state.activities.unregister(&activity_name, &email).await {
        Ok(_) => {
            log::info!("Removed {} from {}", email, activity_name);
            Json(MessageResponse {
                message: format!("Removed {email} from {activity_name}"),
            })
            .into_response()
        }
        Err(err) => {
            log::warn!(
                "Unregister of {} from {} rejected: {:?}",
                email,
                activity_name,
                err
            );
            error_response(err)
        }
    }
}
