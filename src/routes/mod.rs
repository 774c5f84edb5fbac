pub(crate) mod activity;
pub(crate) mod auth;
pub(crate) mod costs;
pub(crate) mod dashboard;
pub(crate) mod health;
pub(crate) mod investors;
pub(crate) mod payments;
pub(crate) mod transactions;
pub(crate) mod units;
pub(crate) mod users;
