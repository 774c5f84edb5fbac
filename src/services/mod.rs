pub mod activity_log_service;
pub mod cost_service;
pub mod dashboard_service;
pub mod investor_service;
pub mod investor_stats;
pub mod payment_service;
pub mod transaction_service;
pub mod unit_service;
pub mod upload_service;
pub mod user_service;
