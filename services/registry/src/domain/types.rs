use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use afritrace_domain::certification::CertificationStatus;
use afritrace_domain::compliance::{CertificateCompliance, RegionalCompliance};
use afritrace_domain::feedback::{FeedbackCategory, FeedbackStatus};

// ── Certificates ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Certificate {
    pub id: Uuid,
    pub batch_code: String,
    pub mineral_type: String,
    pub origin_district: String,
    pub mine_site: String,
    pub export_date: NaiveDate,
    pub weight_kg: Option<f64>,
    pub status: CertificationStatus,
    pub compliance: CertificateCompliance,
    pub tamper_hash: Option<String>,
    pub company_id: Option<Uuid>,
}

/// A certificate together with the company that owns it, if linked.
#[derive(Debug, Clone)]
pub struct CertificateRecord {
    pub certificate: Certificate,
    pub company: Option<Company>,
}

// ── Companies ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub registration_number: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub mine_location: Option<GeoPoint>,
    pub certification_status: CertificationStatus,
    pub certification_start_date: Option<NaiveDate>,
    pub certification_end_date: Option<NaiveDate>,
    pub regional_compliance: RegionalCompliance,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable company fields, shared by admin create/update and the REMA sync.
#[derive(Debug, Clone)]
pub struct CompanyDraft {
    pub name: String,
    pub registration_number: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub mine_location: Option<GeoPoint>,
    pub certification_status: CertificationStatus,
    pub certification_start_date: Option<NaiveDate>,
    pub certification_end_date: Option<NaiveDate>,
    pub regional_compliance: RegionalCompliance,
    pub is_active: bool,
}

/// One company as published by REMA, before validation.
#[derive(Debug, Clone)]
pub struct RemaCompany {
    pub name: String,
    pub registration_number: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub mine_location_lat: Option<f64>,
    pub mine_location_lng: Option<f64>,
    /// Raw status string; parsed per record during sync.
    pub certification_status: String,
    pub certification_start_date: Option<NaiveDate>,
    pub certification_end_date: Option<NaiveDate>,
    pub regional_compliance: RegionalCompliance,
}

// ── Citizens ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Citizen {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ── Feedback ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct FeedbackReport {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub location: String,
    pub category: FeedbackCategory,
    pub message: String,
    pub status: FeedbackStatus,
    pub admin_response: Option<String>,
    pub admin_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile fields shown next to a report in the review queue.
#[derive(Debug, Clone)]
pub struct Reporter {
    pub full_name: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct FeedbackWithReporter {
    pub report: FeedbackReport,
    pub reporter: Option<Reporter>,
}

/// Administrator decision on a report.
#[derive(Debug, Clone)]
pub struct FeedbackReview {
    /// `None` keeps the current status.
    pub status: Option<FeedbackStatus>,
    pub admin_response: String,
    pub admin_id: Uuid,
}

// ── Sync ─────────────────────────────────────────────────────────────────────

/// Outcome of one REMA sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Companies inserted or updated.
    pub synced: u32,
    /// Records without a registration number to match on.
    pub skipped: u32,
    pub errors: Vec<String>,
}
