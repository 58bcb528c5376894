use chrono::Utc;
use uuid::Uuid;
use validator::ValidateEmail;

use afritrace_domain::feedback::{FeedbackCategory, FeedbackStatus};

use crate::domain::repository::{CitizenRepository, FeedbackRepository};
use crate::domain::types::{FeedbackReport, FeedbackReview, FeedbackWithReporter};
use crate::error::RegistryServiceError;

pub struct SubmitFeedbackInput {
    /// Signed-in submitter, if any.
    pub user_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub location: String,
    pub category: String,
    pub message: String,
}

/// Inclusive character-count bounds of a text field.
fn check_length(
    value: &str,
    min: usize,
    max: usize,
    too_short: &str,
    too_long: &str,
) -> Result<(), RegistryServiceError> {
    let len = value.chars().count();
    if len < min {
        return Err(RegistryServiceError::validation(too_short));
    }
    if len > max {
        return Err(RegistryServiceError::validation(too_long));
    }
    Ok(())
}

/// Trim every field and apply the form rules in order; the first failure wins.
fn validate(input: SubmitFeedbackInput) -> Result<FeedbackReport, RegistryServiceError> {
    let name = input.name.trim().to_owned();
    let email = input.email.trim().to_owned();
    let location = input.location.trim().to_owned();
    let category = input.category.trim();
    let message = input.message.trim().to_owned();

    check_length(
        &name,
        1,
        100,
        "Name is required",
        "Name must be at most 100 characters",
    )?;
    if !email.validate_email() {
        return Err(RegistryServiceError::validation("Invalid email address"));
    }
    check_length(
        &email,
        1,
        255,
        "Invalid email address",
        "Email must be at most 255 characters",
    )?;
    check_length(
        &location,
        1,
        200,
        "Location is required",
        "Location must be at most 200 characters",
    )?;
    let category: FeedbackCategory = category
        .parse()
        .map_err(|_| RegistryServiceError::validation("Please select a category"))?;
    check_length(
        &message,
        10,
        1000,
        "Message must be at least 10 characters",
        "Message must be at most 1000 characters",
    )?;

    let now = Utc::now();
    Ok(FeedbackReport {
        id: Uuid::now_v7(),
        user_id: input.user_id,
        name,
        email,
        location,
        category,
        message,
        status: FeedbackStatus::Pending,
        admin_response: None,
        admin_id: None,
        created_at: now,
        updated_at: now,
    })
}

// ── SubmitFeedback ───────────────────────────────────────────────────────────

/// A signed-in submitter without a profile row is stored as anonymous.
pub struct SubmitFeedbackUseCase<R: FeedbackRepository, C: CitizenRepository> {
    pub repo: R,
    pub citizens: C,
}

impl<R: FeedbackRepository, C: CitizenRepository> SubmitFeedbackUseCase<R, C> {
    /// Returns the id of the stored report.
    pub async fn execute(&self, input: SubmitFeedbackInput) -> Result<Uuid, RegistryServiceError> {
        let mut report = validate(input)?;
        if let Some(user_id) = report.user_id {
            if !self.citizens.exists(user_id).await? {
                tracing::warn!(%user_id, "feedback submitter has no profile, storing anonymously");
                report.user_id = None;
            }
        }
        self.repo.create(&report).await?;
        tracing::info!(
            report_id = %report.id,
            category = %report.category,
            authenticated = report.user_id.is_some(),
            "feedback submitted"
        );
        Ok(report.id)
    }
}

// ── ListMyFeedback ───────────────────────────────────────────────────────────

pub struct ListMyFeedbackUseCase<R: FeedbackRepository> {
    pub repo: R,
}

impl<R: FeedbackRepository> ListMyFeedbackUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<FeedbackReport>, RegistryServiceError> {
        self.repo.list_by_user(user_id).await
    }
}

// ── ListAllFeedback ──────────────────────────────────────────────────────────

pub struct ListAllFeedbackUseCase<R: FeedbackRepository> {
    pub repo: R,
}

impl<R: FeedbackRepository> ListAllFeedbackUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<FeedbackWithReporter>, RegistryServiceError> {
        self.repo.list_with_reporter().await
    }
}

// ── ReviewFeedback ───────────────────────────────────────────────────────────

pub struct ReviewFeedbackUseCase<R: FeedbackRepository> {
    pub repo: R,
}

impl<R: FeedbackRepository> ReviewFeedbackUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        review: FeedbackReview,
    ) -> Result<FeedbackReport, RegistryServiceError> {
        let report = self
            .repo
            .review(id, &review)
            .await?
            .ok_or(RegistryServiceError::FeedbackNotFound)?;
        tracing::info!(
            report_id = %id,
            admin_id = %review.admin_id,
            status = %report.status,
            "feedback reviewed"
        );
        Ok(report)
    }
}
