//! User routes: registration, authentication, balance.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use financas_core::auth::Argon2Verifier;
use financas_core::ledger::LedgerService;
use financas_core::user::{NewUser, User, UserError, UserRegistry};
use financas_db::{EntryRepository, UserRepository};
use financas_shared::types::UserId;

use crate::AppState;

/// Creates the user routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register))
        .route("/users/authenticate", post(authenticate))
        .route("/users/{id}/balance", get(balance))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for registering a user.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Email address; must be unique.
    pub email: String,
    /// Raw secret; hashed before storage.
    pub password: String,
}

/// Request body for authenticating a user.
#[derive(Debug, Deserialize)]
pub struct AuthenticateRequest {
    /// Email address.
    pub email: String,
    /// Raw secret.
    pub password: String,
}

/// Response for a user. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_inner(),
            name: user.name,
            email: user.email,
        }
    }
}

/// Response for a user's balance.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// User ID.
    pub user: Uuid,
    /// Income minus expense over all of the user's entries.
    pub balance: Decimal,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/users` - Register a new user.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Response {
    let new_user = NewUser {
        name: payload.name,
        email: payload.email,
        secret: payload.password,
    };

    match registry(&state).register(new_user).await {
        Ok(user) => {
            info!(user_id = %user.id, "User registered");
            (StatusCode::CREATED, Json(UserResponse::from(user))).into_response()
        }
        Err(e) => user_error_response(&e),
    }
}

/// POST `/users/authenticate` - Authenticate by email and password.
async fn authenticate(
    State(state): State<AppState>,
    Json(payload): Json<AuthenticateRequest>,
) -> Response {
    match registry(&state)
        .authenticate(&payload.email, &payload.password)
        .await
    {
        Ok(user) => (StatusCode::OK, Json(UserResponse::from(user))).into_response(),
        Err(e) => {
            if matches!(e, UserError::InvalidCredentials) {
                info!(email = %payload.email, "Failed authentication attempt");
            }
            user_error_response(&e)
        }
    }
}

/// GET `/users/{id}/balance` - The user's current balance.
async fn balance(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let user_id = UserId::from_uuid(id);

    match registry(&state).load_by_id(user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "user_not_found",
                    "message": "No user with this id"
                })),
            )
                .into_response();
        }
        Err(e) => return user_error_response(&e),
    }

    let service = LedgerService::new(Arc::new(EntryRepository::new((*state.db).clone())));

    match service.balance_for_user(user_id).await {
        Ok(balance) => (
            StatusCode::OK,
            Json(BalanceResponse {
                user: user_id.into_inner(),
                balance,
            }),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to compute balance");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred"
                })),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Builds the user registry over the request's database handle.
pub(crate) fn registry(state: &AppState) -> UserRegistry<UserRepository, Argon2Verifier> {
    UserRegistry::new(
        Arc::new(UserRepository::new((*state.db).clone())),
        Argon2Verifier,
    )
}

/// Maps a [`UserError`] to an HTTP response.
pub(crate) fn user_error_response(err: &UserError) -> Response {
    match err {
        UserError::Database(msg) => {
            error!(error = %msg, "User storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred"
                })),
            )
                .into_response()
        }
        UserError::Credential(e) => {
            error!(error = %e, "Credential verification failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred"
                })),
            )
                .into_response()
        }
        _ => {
            let status = StatusCode::from_u16(err.http_status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                Json(json!({
                    "error": err.error_code().to_ascii_lowercase(),
                    "message": err.to_string()
                })),
            )
                .into_response()
        }
    }
}
