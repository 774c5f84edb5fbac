use std::path::PathBuf;
use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::AuthConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub auth: Arc<AuthConfig>,
    pub upload_dir: PathBuf,
}
