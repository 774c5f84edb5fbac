use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{
    activity, auth, costs, dashboard, health, investors, payments, transactions, units, users,
};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/auth", auth::router())
        .nest("/api/investors", investors::router())
        .nest("/api/units", units::router())
        .nest("/api/transactions", transactions::router())
        .nest("/api/costs", costs::router())
        .nest("/api/payments", payments::router())
        .nest("/api/users", users::router())
        .nest("/api/dashboard", dashboard::router())
        .nest("/api/activity", activity::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
