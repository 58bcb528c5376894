use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use afritrace_auth::domain::repository::OtpRepository;
use afritrace_auth::domain::types::OtpCode;
use afritrace_auth::error::AuthServiceError;

// ── MockOtpRepo ──────────────────────────────────────────────────────────────

pub struct MockOtpRepo {
    pub codes: Arc<Mutex<Vec<OtpCode>>>,
}

impl MockOtpRepo {
    pub fn new(codes: Vec<OtpCode>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(codes)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the internal code list for post-execution inspection.
    pub fn codes_handle(&self) -> Arc<Mutex<Vec<OtpCode>>> {
        Arc::clone(&self.codes)
    }
}

impl OtpRepository for MockOtpRepo {
    async fn find_latest_unverified(
        &self,
        email: &str,
    ) -> Result<Option<OtpCode>, AuthServiceError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.email == email && !c.verified)
            .max_by_key(|c| c.created_at)
            .cloned())
    }

    async fn mark_verified(&self, id: Uuid) -> Result<bool, AuthServiceError> {
        let mut codes = self.codes.lock().unwrap();
        match codes.iter_mut().find(|c| c.id == id && !c.verified) {
            Some(code) => {
                code.verified = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn record_failed_attempt(&self, id: Uuid) -> Result<(), AuthServiceError> {
        if let Some(code) = self.codes.lock().unwrap().iter_mut().find(|c| c.id == id) {
            code.attempts += 1;
        }
        Ok(())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn otp(email: &str, code: &str, expires_at: DateTime<Utc>) -> OtpCode {
    OtpCode {
        id: Uuid::new_v4(),
        email: email.to_owned(),
        code: code.to_owned(),
        expires_at,
        verified: false,
        attempts: 0,
        created_at: Utc::now() - Duration::minutes(1),
    }
}

pub fn fresh_otp(email: &str, code: &str) -> OtpCode {
    otp(email, code, Utc::now() + Duration::minutes(10))
}
