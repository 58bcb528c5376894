use std::sync::Arc;

use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder, SqlErr, sea_query::Expr,
};
use uuid::Uuid;

use afritrace_domain::compliance::CertificateCompliance;
use afritrace_domain::role::UserRole;
use afritrace_registry_schema::{
    certificates, companies, feedback_reports, profiles, user_roles,
};

use crate::domain::repository::{
    CertificateRepository, CitizenRepository, CompanyRepository, FeedbackRepository,
    RoleRepository,
};
use crate::domain::types::{
    Certificate, CertificateRecord, Citizen, Company, CompanyDraft, FeedbackReport,
    FeedbackReview, FeedbackWithReporter, GeoPoint, Reporter,
};
use crate::error::RegistryServiceError;

// ── Certificate repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCertificateRepository {
    pub db: Arc<DatabaseConnection>,
}

impl CertificateRepository for DbCertificateRepository {
    async fn find_by_batch_code(
        &self,
        batch_code: &str,
    ) -> Result<Option<CertificateRecord>, RegistryServiceError> {
        let row = certificates::Entity::find()
            .filter(certificates::Column::BatchCode.eq(batch_code))
            .find_also_related(companies::Entity)
            .one(self.db.as_ref())
            .await
            .context("find certificate by batch code")?;

        let Some((certificate, company)) = row else {
            return Ok(None);
        };
        Ok(Some(CertificateRecord {
            certificate: certificate_from_model(certificate)?,
            company: company.map(company_from_model).transpose()?,
        }))
    }
}

fn certificate_from_model(model: certificates::Model) -> anyhow::Result<Certificate> {
    Ok(Certificate {
        id: model.id,
        status: model
            .certification_status
            .parse()
            .with_context(|| format!("certificate {}", model.id))?,
        batch_code: model.batch_code,
        mineral_type: model.mineral_type,
        origin_district: model.origin_district,
        mine_site: model.mine_site,
        export_date: model.export_date,
        weight_kg: model.weight_kg,
        compliance: CertificateCompliance {
            verified_by_rema: model.verified_by_rema,
            icglr_compliant: model.icglr_compliant,
        },
        tamper_hash: model.tamper_hash,
        company_id: model.company_id,
    })
}

// ── Company repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCompanyRepository {
    pub db: Arc<DatabaseConnection>,
}

impl CompanyRepository for DbCompanyRepository {
    async fn list(&self) -> Result<Vec<Company>, RegistryServiceError> {
        let models = companies::Entity::find()
            .order_by_desc(companies::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .context("list companies")?;
        let companies = models
            .into_iter()
            .map(company_from_model)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(companies)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, RegistryServiceError> {
        let model = companies::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .context("find company by id")?;
        Ok(model.map(company_from_model).transpose()?)
    }

    async fn find_by_registration_number(
        &self,
        registration_number: &str,
    ) -> Result<Option<Company>, RegistryServiceError> {
        let model = companies::Entity::find()
            .filter(companies::Column::RegistrationNumber.eq(registration_number))
            .one(self.db.as_ref())
            .await
            .context("find company by registration number")?;
        Ok(model.map(company_from_model).transpose()?)
    }

    async fn create(&self, draft: &CompanyDraft) -> Result<Company, RegistryServiceError> {
        let now = Utc::now();
        let mut am = companies::ActiveModel {
            id: Set(Uuid::now_v7()),
            created_at: Set(now),
            ..Default::default()
        };
        apply_draft(&mut am, draft)?;
        am.updated_at = Set(now);
        let model = am
            .insert(self.db.as_ref())
            .await
            .map_err(|e| company_write_error(e, "insert company"))?;
        Ok(company_from_model(model)?)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: &CompanyDraft,
    ) -> Result<Option<Company>, RegistryServiceError> {
        let Some(model) = companies::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .context("find company for update")?
        else {
            return Ok(None);
        };
        let mut am = model.into_active_model();
        apply_draft(&mut am, draft)?;
        am.updated_at = Set(Utc::now());
        let model = am
            .update(self.db.as_ref())
            .await
            .map_err(|e| company_write_error(e, "update company"))?;
        Ok(Some(company_from_model(model)?))
    }

    async fn set_location(
        &self,
        id: Uuid,
        location: GeoPoint,
    ) -> Result<bool, RegistryServiceError> {
        let result = companies::Entity::update_many()
            .col_expr(companies::Column::MineLocationLat, Expr::value(location.lat))
            .col_expr(companies::Column::MineLocationLng, Expr::value(location.lng))
            .col_expr(companies::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(companies::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .context("set company location")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RegistryServiceError> {
        let result = companies::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .context("delete company")?;
        Ok(result.rows_affected > 0)
    }
}

fn apply_draft(
    am: &mut companies::ActiveModel,
    draft: &CompanyDraft,
) -> Result<(), RegistryServiceError> {
    let regional_compliance = serde_json::to_value(draft.regional_compliance)
        .context("encode regional compliance")?;
    am.name = Set(draft.name.clone());
    am.registration_number = Set(draft.registration_number.clone());
    am.contact_email = Set(draft.contact_email.clone());
    am.contact_phone = Set(draft.contact_phone.clone());
    am.address = Set(draft.address.clone());
    am.mine_location_lat = Set(draft.mine_location.map(|p| p.lat));
    am.mine_location_lng = Set(draft.mine_location.map(|p| p.lng));
    am.certification_status = Set(draft.certification_status.as_str().to_owned());
    am.certification_start_date = Set(draft.certification_start_date);
    am.certification_end_date = Set(draft.certification_end_date);
    am.regional_compliance = Set(regional_compliance);
    am.is_active = Set(draft.is_active);
    Ok(())
}

/// A unique violation on `registration_number` is the only expected write failure.
fn company_write_error(err: DbErr, action: &'static str) -> RegistryServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => RegistryServiceError::CompanyAlreadyExists,
        _ => RegistryServiceError::Internal(anyhow::Error::new(err).context(action)),
    }
}

fn company_from_model(model: companies::Model) -> anyhow::Result<Company> {
    let certification_status = model
        .certification_status
        .parse()
        .with_context(|| format!("company {}", model.id))?;
    let mine_location = match (model.mine_location_lat, model.mine_location_lng) {
        (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
        _ => None,
    };
    // Partial objects from older rows are fine: missing schemes read as false.
    let regional_compliance = serde_json::from_value(model.regional_compliance)
        .with_context(|| format!("company {} regional compliance", model.id))?;
    Ok(Company {
        id: model.id,
        name: model.name,
        registration_number: model.registration_number,
        contact_email: model.contact_email,
        contact_phone: model.contact_phone,
        address: model.address,
        mine_location,
        certification_status,
        certification_start_date: model.certification_start_date,
        certification_end_date: model.certification_end_date,
        regional_compliance,
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Citizen repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCitizenRepository {
    pub db: Arc<DatabaseConnection>,
}

impl CitizenRepository for DbCitizenRepository {
    async fn list(&self) -> Result<Vec<Citizen>, RegistryServiceError> {
        let models = profiles::Entity::find()
            .order_by_desc(profiles::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .context("list profiles")?;
        Ok(models.into_iter().map(citizen_from_model).collect())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RegistryServiceError> {
        let model = profiles::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .context("find profile")?;
        Ok(model.is_some())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RegistryServiceError> {
        let result = profiles::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .context("delete profile")?;
        Ok(result.rows_affected > 0)
    }
}

fn citizen_from_model(model: profiles::Model) -> Citizen {
    Citizen {
        id: model.id,
        email: model.email,
        full_name: model.full_name,
        created_at: model.created_at,
    }
}

// ── Feedback repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFeedbackRepository {
    pub db: Arc<DatabaseConnection>,
}

impl FeedbackRepository for DbFeedbackRepository {
    async fn create(&self, report: &FeedbackReport) -> Result<(), RegistryServiceError> {
        feedback_reports::ActiveModel {
            id: Set(report.id),
            user_id: Set(report.user_id),
            name: Set(report.name.clone()),
            email: Set(report.email.clone()),
            location: Set(report.location.clone()),
            category: Set(report.category.as_str().to_owned()),
            message: Set(report.message.clone()),
            status: Set(report.status.as_str().to_owned()),
            admin_response: Set(report.admin_response.clone()),
            admin_id: Set(report.admin_id),
            created_at: Set(report.created_at),
            updated_at: Set(report.updated_at),
        }
        .insert(self.db.as_ref())
        .await
        .context("insert feedback report")?;
        Ok(())
    }

    async fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<FeedbackReport>, RegistryServiceError> {
        let models = feedback_reports::Entity::find()
            .filter(feedback_reports::Column::UserId.eq(user_id))
            .order_by_desc(feedback_reports::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .context("list feedback by user")?;
        let reports = models
            .into_iter()
            .map(feedback_from_model)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(reports)
    }

    async fn list_with_reporter(&self) -> Result<Vec<FeedbackWithReporter>, RegistryServiceError> {
        let rows = feedback_reports::Entity::find()
            .find_also_related(profiles::Entity)
            .order_by_desc(feedback_reports::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .context("list feedback with reporter")?;
        let reports = rows
            .into_iter()
            .map(|(report, profile)| -> anyhow::Result<FeedbackWithReporter> {
                Ok(FeedbackWithReporter {
                    report: feedback_from_model(report)?,
                    reporter: profile.map(|p| Reporter {
                        full_name: p.full_name,
                        email: p.email,
                    }),
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(reports)
    }

    async fn review(
        &self,
        id: Uuid,
        review: &FeedbackReview,
    ) -> Result<Option<FeedbackReport>, RegistryServiceError> {
        let Some(model) = feedback_reports::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .context("find feedback report for review")?
        else {
            return Ok(None);
        };
        let mut am = model.into_active_model();
        if let Some(status) = review.status {
            am.status = Set(status.as_str().to_owned());
        }
        am.admin_response = Set(Some(review.admin_response.clone()));
        am.admin_id = Set(Some(review.admin_id));
        am.updated_at = Set(Utc::now());
        let model = am
            .update(self.db.as_ref())
            .await
            .context("update feedback report")?;
        Ok(Some(feedback_from_model(model)?))
    }
}

fn feedback_from_model(model: feedback_reports::Model) -> anyhow::Result<FeedbackReport> {
    Ok(FeedbackReport {
        id: model.id,
        category: model
            .category
            .parse()
            .with_context(|| format!("feedback report {}", model.id))?,
        status: model
            .status
            .parse()
            .with_context(|| format!("feedback report {}", model.id))?,
        user_id: model.user_id,
        name: model.name,
        email: model.email,
        location: model.location,
        message: model.message,
        admin_response: model.admin_response,
        admin_id: model.admin_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Role repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoleRepository {
    pub db: Arc<DatabaseConnection>,
}

impl RoleRepository for DbRoleRepository {
    async fn has_role(&self, user_id: Uuid, role: UserRole) -> Result<bool, RegistryServiceError> {
        let model = user_roles::Entity::find()
            .filter(user_roles::Column::UserId.eq(user_id))
            .filter(user_roles::Column::Role.eq(role.as_str()))
            .one(self.db.as_ref())
            .await
            .context("find user role")?;
        Ok(model.is_some())
    }
}
