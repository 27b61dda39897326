use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;

use crate::models::DashboardSummary;
use crate::services::dashboard;
use crate::state::AppState;

// GET /api/owner/dashboard
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardSummary> {
    let store = state.store.lock().unwrap();
    Json(dashboard::compute_summary(
        store.cars(),
        store.bookings(),
        Utc::now().naive_utc(),
    ))
}
