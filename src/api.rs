use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::fixtures::Fixtures;
use crate::handlers;
use crate::reports::{
    ChargingIncomeReport, EnergyStorageIncomeReport, EnterpriseIncomeReport, PhotovoltaicIncomeReport,
    WindPowerIncomeReport,
};

// App state shared by every handler. Nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub fixtures: Arc<Fixtures>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            fixtures: Arc::new(Fixtures::load()),
        }
    }
}

// Create the main router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/test-energy", get(handlers::test_energy))
        // Reports
        .route("/api/energy/report", get(handlers::energy_report))
        .route("/api/income/report", get(handlers::income_report::<EnterpriseIncomeReport>))
        .route(
            "/api/income/photovoltaic-report",
            get(handlers::income_report::<PhotovoltaicIncomeReport>),
        )
        .route(
            "/api/income/wind-power-report",
            get(handlers::income_report::<WindPowerIncomeReport>),
        )
        .route(
            "/api/income/energy-storage-report",
            get(handlers::income_report::<EnergyStorageIncomeReport>),
        )
        .route("/api/income/charging-report", get(handlers::income_report::<ChargingIncomeReport>))
        // Enterprise directory
        .route("/api/energy/enterprises", get(handlers::list_enterprises))
        .route("/api/energy/enterprises/{id}", get(handlers::get_enterprise))
        // Session
        .route("/api/sysAuth/login", post(handlers::login))
        .route("/api/sysAuth/logout", post(handlers::logout))
        .route("/api/sysAuth/userInfo", get(handlers::user_info))
        .route("/api/sysAuth/captcha", get(handlers::captcha))
        .route("/api/auth/refresh", post(handlers::refresh_token))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
