use sea_orm::DatabaseConnection;

use crate::server::service::identity::IdentityVerifier;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub identity: IdentityVerifier,
}
