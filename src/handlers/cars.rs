use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Car;
use crate::services::fleet::{self, NewCar};
use crate::state::AppState;

// GET /api/cars
#[derive(Deserialize)]
pub struct CarsQuery {
    pub search: Option<String>,
}

pub async fn list_cars(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CarsQuery>,
) -> Json<Vec<Car>> {
    let store = state.store.lock().unwrap();
    let term = query.search.as_deref().unwrap_or("");
    Json(fleet::search_cars(&store, term))
}

// GET /api/cars/:id
pub async fn get_car(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Car>, AppError> {
    let store = state.store.lock().unwrap();
    Ok(Json(fleet::get_car(&store, &id)?))
}

// POST /api/owner/cars
pub async fn add_car(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewCar>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    let today = Utc::now().date_naive();
    let mut store = state.store.lock().unwrap();
    let car = fleet::add_car(&mut store, body, today)?;
    Ok((StatusCode::CREATED, Json(car)))
}

// POST /api/owner/cars/:id/toggle
pub async fn toggle_car(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut store = state.store.lock().unwrap();
    let is_available = fleet::toggle_availability(&mut store, &id)?;
    Ok(Json(
        serde_json::json!({ "ok": true, "is_available": is_available }),
    ))
}

// DELETE /api/owner/cars/:id
pub async fn delete_car(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut store = state.store.lock().unwrap();
    fleet::delete_car(&mut store, &id)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
