//! Booking Resource
//!
//! Frontend bindings for the /bookings endpoints. The client only ever
//! creates bookings; editing and cancellation live elsewhere.

use super::ApiError;
use crate::models::{Booking, BookingDraft};

pub async fn list_bookings() -> Result<Vec<Booking>, ApiError> {
    super::get_json("/bookings").await
}

pub async fn create_booking(draft: &BookingDraft) -> Result<Booking, ApiError> {
    super::post_json("/bookings", draft).await
}
