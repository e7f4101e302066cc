use std::sync::Arc;

use anyhow::Context;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;
use crate::models::Booking;
use crate::state::AppState;

const BOOKING_COLLECTION: &str = "booking";

#[derive(Serialize)]
pub struct BookingResponse {
    id: String,
    full_name: String,
    company: String,
    email: String,
    phone: Option<String>,
    role_title: String,
    hiring_need: String,
    candidates_needed: Option<i32>,
    preferred_date: Option<String>,
    preferred_time: Option<String>,
    timezone: Option<String>,
    message: Option<String>,
    status: String,
}

impl BookingResponse {
    fn from_booking(id: String, booking: Booking) -> Self {
        Self {
            id,
            full_name: booking.full_name,
            company: booking.company,
            email: booking.email,
            phone: booking.phone,
            role_title: booking.role_title,
            hiring_need: booking.hiring_need.as_str().to_string(),
            candidates_needed: booking.candidates_needed,
            preferred_date: booking.preferred_date,
            preferred_time: booking.preferred_time,
            timezone: booking.timezone,
            message: booking.message,
            status: booking.status.as_str().to_string(),
        }
    }

    /// Rebuild a response from a raw stored document, defaulting anything the
    /// document no longer carries instead of failing the whole listing.
    fn from_document(document: &serde_json::Value) -> Self {
        Self {
            id: text_field(document, "_id").unwrap_or_default(),
            full_name: text_field(document, "full_name").unwrap_or_default(),
            company: text_field(document, "company").unwrap_or_default(),
            email: text_field(document, "email").unwrap_or_default(),
            phone: text_field(document, "phone"),
            role_title: text_field(document, "role_title").unwrap_or_default(),
            hiring_need: text_field(document, "hiring_need").unwrap_or_default(),
            candidates_needed: document
                .get("candidates_needed")
                .and_then(serde_json::Value::as_i64)
                .and_then(|n| i32::try_from(n).ok()),
            preferred_date: text_field(document, "preferred_date"),
            preferred_time: text_field(document, "preferred_time"),
            timezone: text_field(document, "timezone"),
            message: text_field(document, "message"),
            status: text_field(document, "status").unwrap_or_else(|| "new".to_string()),
        }
    }
}

fn text_field(document: &serde_json::Value, key: &str) -> Option<String> {
    document
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

// POST /bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(booking): Json<Booking>,
) -> Result<Json<BookingResponse>, AppError> {
    booking.validate()?;

    let store = state.store.as_deref().ok_or(AppError::DatabaseUnavailable)?;
    let document = serde_json::to_value(&booking).context("failed to serialize booking")?;
    let id = store.insert_one(BOOKING_COLLECTION, &document)?;

    tracing::info!(id = %id, company = %booking.company, "booking created");

    Ok(Json(BookingResponse::from_booking(id, booking)))
}

// GET /bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub limit: Option<i64>,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let limit = query.limit.unwrap_or(50);

    let store = state.store.as_deref().ok_or(AppError::DatabaseUnavailable)?;
    let documents = store.find_many(BOOKING_COLLECTION, limit)?;

    let response: Vec<BookingResponse> = documents
        .iter()
        .map(BookingResponse::from_document)
        .collect();

    Ok(Json(response))
}
