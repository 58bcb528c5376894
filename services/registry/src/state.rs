use std::sync::Arc;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbCertificateRepository, DbCitizenRepository, DbCompanyRepository, DbFeedbackRepository,
    DbRoleRepository,
};
use crate::infra::rema::RemaRegistry;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub jwt_secret: String,
    pub rema: RemaRegistry,
}

impl AppState {
    pub fn certificate_repo(&self) -> DbCertificateRepository {
        DbCertificateRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn company_repo(&self) -> DbCompanyRepository {
        DbCompanyRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn citizen_repo(&self) -> DbCitizenRepository {
        DbCitizenRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn feedback_repo(&self) -> DbFeedbackRepository {
        DbFeedbackRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn role_repo(&self) -> DbRoleRepository {
        DbRoleRepository {
            db: Arc::clone(&self.db),
        }
    }
}

impl FromRef<AppState> for Arc<DatabaseConnection> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.db)
    }
}
