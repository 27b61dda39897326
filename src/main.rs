use std::sync::{Arc, Mutex};

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use carbook::config::AppConfig;
use carbook::handlers;
use carbook::state::AppState;
use carbook::store::FleetStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let store = if config.seed_demo_fleet {
        let store = FleetStore::with_demo_fleet();
        tracing::info!(cars = store.cars().len(), "seeded demo fleet");
        store
    } else {
        FleetStore::new()
    };

    let state = Arc::new(AppState {
        store: Mutex::new(store),
        config: config.clone(),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/cars", get(handlers::cars::list_cars))
        .route("/api/cars/:id", get(handlers::cars::get_car))
        .route("/api/owner/cars", post(handlers::cars::add_car))
        .route(
            "/api/owner/cars/:id/toggle",
            post(handlers::cars::toggle_car),
        )
        .route("/api/owner/cars/:id", delete(handlers::cars::delete_car))
        .route(
            "/api/bookings",
            get(handlers::bookings::list_bookings).post(handlers::bookings::create_booking),
        )
        .route("/api/owner/bookings", get(handlers::bookings::owner_bookings))
        .route(
            "/api/owner/bookings/:id/status",
            post(handlers::bookings::change_status),
        )
        .route(
            "/api/owner/dashboard",
            get(handlers::dashboard::get_dashboard),
        )
        // The consumer is a browser SPA served from elsewhere
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
