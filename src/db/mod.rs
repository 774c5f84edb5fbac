pub mod activity_log_queries;
pub mod cost_queries;
pub mod investor_queries;
pub mod payment_queries;
pub mod profit_sharing_queries;
pub mod stats_queries;
pub mod transaction_queries;
pub mod unit_queries;
pub mod user_queries;
