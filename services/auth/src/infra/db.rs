use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, sea_query::Expr,
};
use uuid::Uuid;

use afritrace_auth_schema::otp_codes;

use crate::domain::repository::OtpRepository;
use crate::domain::types::OtpCode;
use crate::error::AuthServiceError;

#[derive(Clone)]
pub struct DbOtpRepository {
    pub db: Arc<DatabaseConnection>,
}

impl OtpRepository for DbOtpRepository {
    async fn find_latest_unverified(
        &self,
        email: &str,
    ) -> Result<Option<OtpCode>, AuthServiceError> {
        let model = otp_codes::Entity::find()
            .filter(otp_codes::Column::Email.eq(email))
            .filter(otp_codes::Column::Verified.eq(false))
            .order_by_desc(otp_codes::Column::CreatedAt)
            .one(self.db.as_ref())
            .await
            .context("find latest unverified otp")?;
        Ok(model.map(otp_from_model))
    }

    async fn mark_verified(&self, id: Uuid) -> Result<bool, AuthServiceError> {
        let result = otp_codes::Entity::update_many()
            .col_expr(otp_codes::Column::Verified, Expr::value(true))
            .filter(otp_codes::Column::Id.eq(id))
            .filter(otp_codes::Column::Verified.eq(false))
            .exec(self.db.as_ref())
            .await
            .context("mark otp verified")?;
        Ok(result.rows_affected > 0)
    }

    async fn record_failed_attempt(&self, id: Uuid) -> Result<(), AuthServiceError> {
        otp_codes::Entity::update_many()
            .col_expr(
                otp_codes::Column::Attempts,
                Expr::col(otp_codes::Column::Attempts).add(1),
            )
            .filter(otp_codes::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .context("record failed otp attempt")?;
        Ok(())
    }
}

fn otp_from_model(model: otp_codes::Model) -> OtpCode {
    OtpCode {
        id: model.id,
        email: model.email,
        code: model.code,
        expires_at: model.expires_at,
        verified: model.verified,
        attempts: model.attempts.max(0) as u32,
        created_at: model.created_at,
    }
}
