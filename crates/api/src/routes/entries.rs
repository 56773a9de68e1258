//! Ledger entry routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use financas_core::ledger::{
    Entry, EntryCategory, EntryDraft, EntryFilter, EntryStatus, LedgerError, LedgerService,
};
use financas_db::EntryRepository;
use financas_shared::types::{EntryId, UserId};

use crate::AppState;
use crate::routes::users::{registry, user_error_response};

/// Creates the entry routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/entries", get(search_entries).post(create_entry))
        .route(
            "/entries/{id}",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
        .route("/entries/{id}/status", put(update_entry_status))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for searching entries.
#[derive(Debug, Deserialize)]
pub struct SearchEntriesQuery {
    /// Substring to look for in the description, case-insensitive.
    pub description: Option<String>,
    /// Exact accounting month.
    pub month: Option<i32>,
    /// Exact accounting year.
    pub year: Option<i32>,
    /// Owning user. Required, and must exist.
    pub user: Uuid,
}

/// Request body for creating or updating an entry.
#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    /// What the entry is for.
    pub description: Option<String>,
    /// Accounting month, 1-12.
    pub month: Option<i32>,
    /// Accounting year, four digits.
    pub year: Option<i32>,
    /// Positive amount.
    pub amount: Option<Decimal>,
    /// "income" or "expense".
    pub category: Option<String>,
    /// "pending", "settled", or "cancelled".
    pub status: Option<String>,
    /// Owning user. Must exist.
    pub user: Uuid,
}

/// Request body for a status change.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    /// New status: "pending", "settled", or "cancelled".
    pub status: String,
}

/// Response for a single entry.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    /// Entry ID.
    pub id: Uuid,
    /// Description.
    pub description: String,
    /// Accounting month.
    pub month: i32,
    /// Accounting year.
    pub year: i32,
    /// Amount.
    pub amount: Decimal,
    /// Category.
    pub category: &'static str,
    /// Status.
    pub status: &'static str,
    /// Owning user ID.
    pub user: Uuid,
    /// Registration date (YYYY-MM-DD).
    pub registered_at: String,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id.into_inner(),
            description: entry.description,
            month: entry.month,
            year: entry.year,
            amount: entry.amount,
            category: entry.category.as_str(),
            status: entry.status.as_str(),
            user: entry.user_id.into_inner(),
            registered_at: entry.registered_at.to_string(),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/entries` - Search entries by example.
///
/// The `user` parameter is required and must reference an existing user.
async fn search_entries(
    State(state): State<AppState>,
    Query(query): Query<SearchEntriesQuery>,
) -> Response {
    let user_id = UserId::from_uuid(query.user);
    match registry(&state).load_by_id(user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return user_not_found_response(),
        Err(e) => return user_error_response(&e),
    }

    let filter = EntryFilter {
        description: query.description,
        month: query.month,
        year: query.year,
        user_id: Some(user_id),
    };

    match ledger(&state).search(&filter).await {
        Ok(entries) => {
            let items: Vec<EntryResponse> = entries.into_iter().map(EntryResponse::from).collect();
            (StatusCode::OK, Json(json!({ "entries": items }))).into_response()
        }
        Err(e) => ledger_error_response(&e),
    }
}

/// GET `/entries/{id}` - Load a single entry.
async fn get_entry(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match ledger(&state).load_by_id(EntryId::from_uuid(id)).await {
        Ok(Some(entry)) => (StatusCode::OK, Json(EntryResponse::from(entry))).into_response(),
        Ok(None) => entry_not_found_response(),
        Err(e) => ledger_error_response(&e),
    }
}

/// POST `/entries` - Create a new entry.
///
/// The entry is validated and always created as pending.
async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<EntryRequest>,
) -> Response {
    let draft = match to_draft(&state, payload).await {
        Ok(draft) => draft,
        Err(response) => return response,
    };

    match ledger(&state).create(draft).await {
        Ok(entry) => (StatusCode::CREATED, Json(EntryResponse::from(entry))).into_response(),
        Err(e) => ledger_error_response(&e),
    }
}

/// PUT `/entries/{id}` - Update an existing entry.
async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EntryRequest>,
) -> Response {
    let service = ledger(&state);

    let existing = match service.load_by_id(EntryId::from_uuid(id)).await {
        Ok(Some(entry)) => entry,
        Ok(None) => return entry_not_found_response(),
        Err(e) => return ledger_error_response(&e),
    };

    let mut draft = match to_draft(&state, payload).await {
        Ok(draft) => draft,
        Err(response) => return response,
    };
    draft.id = Some(existing.id);

    match service.update(draft).await {
        Ok(entry) => (StatusCode::OK, Json(EntryResponse::from(entry))).into_response(),
        Err(e) => ledger_error_response(&e),
    }
}

/// PUT `/entries/{id}/status` - Change an entry's status.
///
/// Any of the three statuses may replace any other.
async fn update_entry_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<StatusRequest>,
) -> Response {
    let Ok(status) = payload.status.parse::<EntryStatus>() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_status",
                "message": format!("Unknown status value: {}", payload.status)
            })),
        )
            .into_response();
    };

    let service = ledger(&state);

    let existing = match service.load_by_id(EntryId::from_uuid(id)).await {
        Ok(Some(entry)) => entry,
        Ok(None) => return entry_not_found_response(),
        Err(e) => return ledger_error_response(&e),
    };

    match service.change_status(existing, status).await {
        Ok(entry) => (StatusCode::OK, Json(EntryResponse::from(entry))).into_response(),
        Err(e) => ledger_error_response(&e),
    }
}

/// DELETE `/entries/{id}` - Delete an entry.
async fn delete_entry(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let service = ledger(&state);

    let existing = match service.load_by_id(EntryId::from_uuid(id)).await {
        Ok(Some(entry)) => entry,
        Ok(None) => return entry_not_found_response(),
        Err(e) => return ledger_error_response(&e),
    };

    match service.delete(&EntryDraft::from(existing)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => ledger_error_response(&e),
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn ledger(state: &AppState) -> LedgerService<EntryRepository> {
    LedgerService::new(Arc::new(EntryRepository::new((*state.db).clone())))
}

/// Converts a request body into a draft, resolving the user reference.
///
/// The referenced user must exist, as in the search endpoint.
async fn to_draft(state: &AppState, payload: EntryRequest) -> Result<EntryDraft, Response> {
    let user_id = UserId::from_uuid(payload.user);
    match registry(state).load_by_id(user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Err(user_not_found_response()),
        Err(e) => return Err(user_error_response(&e)),
    }

    let category = match payload.category.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<EntryCategory>() {
            Ok(category) => Some(category),
            Err(()) => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "invalid_category",
                        "message": format!("Unknown category value: {raw}")
                    })),
                )
                    .into_response());
            }
        },
    };

    let status = match payload.status.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<EntryStatus>() {
            Ok(status) => Some(status),
            Err(()) => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "invalid_status",
                        "message": format!("Unknown status value: {raw}")
                    })),
                )
                    .into_response());
            }
        },
    };

    Ok(EntryDraft {
        id: None,
        description: payload.description,
        month: payload.month,
        year: payload.year,
        amount: payload.amount,
        category,
        status,
        user_id: Some(user_id),
    })
}

fn entry_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "entry_not_found",
            "message": "No entry with this id"
        })),
    )
        .into_response()
}

fn user_not_found_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "user_not_found",
            "message": "No user with this id"
        })),
    )
        .into_response()
}

fn ledger_error_response(err: &LedgerError) -> Response {
    if let LedgerError::Database(msg) = err {
        error!(error = %msg, "Ledger storage failure");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "internal_error",
                "message": "An error occurred"
            })),
        )
            .into_response();
    }

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
