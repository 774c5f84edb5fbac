mod activity_log;
mod cost;
mod dashboard;
mod investor;
mod payment;
mod profit_sharing;
mod transaction;
mod unit;
mod user;

pub use activity_log::ActivityLog;
pub use cost::{Cost, CreateCost};
pub use dashboard::{
    AdminDashboard, InvestorDashboard, InvestorStats, RecentTransaction, StatusCount,
};
pub use investor::{CreateInvestor, Investor, UpdateInvestor};
pub use payment::{CreatePayment, Payment};
pub use profit_sharing::ProfitSharing;
pub use transaction::{CreateTransaction, Transaction, TransactionStatus, UpdateTransaction};
pub use unit::{CreateUnit, Unit, UnitStatus, UpdateUnit};
pub use user::{CreateUser, LoginRequest, LoginResponse, Role, User};
