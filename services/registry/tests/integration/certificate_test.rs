use afritrace_domain::compliance::VerificationOutcome;
use afritrace_registry::domain::types::CertificateRecord;
use afritrace_registry::error::RegistryServiceError;
use afritrace_registry::usecase::certificate::{EMPTY_CODE_MESSAGE, VerifyCertificateUseCase};

use crate::helpers::{FailingCertificateRepo, MockCertificateRepo, certificate, company};

fn record(batch_code: &str, verified_by_rema: bool, icglr_compliant: bool) -> CertificateRecord {
    CertificateRecord {
        certificate: certificate(batch_code, verified_by_rema, icglr_compliant),
        company: None,
    }
}

#[tokio::test]
async fn should_report_verified_when_both_flags_hold() {
    let mut seeded = record("RWA-TIN-2024-001234", true, true);
    seeded.company = Some(company("Kabarore Mining Cooperative", "RDB-2019-4421"));
    let usecase = VerifyCertificateUseCase {
        repo: MockCertificateRepo::new(vec![seeded]),
    };

    let result = usecase.execute("RWA-TIN-2024-001234").await.unwrap();

    assert_eq!(result.outcome, VerificationOutcome::Verified);
    assert_eq!(result.record.certificate.batch_code, "RWA-TIN-2024-001234");
    assert_eq!(
        result.record.company.unwrap().registration_number,
        "RDB-2019-4421"
    );
}

#[tokio::test]
async fn should_report_compliance_issues_when_icglr_flag_is_false() {
    let usecase = VerifyCertificateUseCase {
        repo: MockCertificateRepo::new(vec![record("X-1", true, false)]),
    };

    let result = usecase.execute("X-1").await.unwrap();

    assert_eq!(result.outcome, VerificationOutcome::ComplianceIssues);
}

#[tokio::test]
async fn should_report_compliance_issues_when_rema_flag_is_false() {
    let usecase = VerifyCertificateUseCase {
        repo: MockCertificateRepo::new(vec![record("X-2", false, true)]),
    };

    let result = usecase.execute("X-2").await.unwrap();

    assert_eq!(result.outcome, VerificationOutcome::ComplianceIssues);
}

#[tokio::test]
async fn should_reject_blank_code_without_querying() {
    let repo = MockCertificateRepo::new(vec![]);
    let lookups = repo.lookups_handle();
    let usecase = VerifyCertificateUseCase { repo };

    let result = usecase.execute("   ").await;

    match result {
        Err(RegistryServiceError::Validation(message)) => assert_eq!(message, EMPTY_CODE_MESSAGE),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(lookups.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_return_not_found_for_unknown_code() {
    let usecase = VerifyCertificateUseCase {
        repo: MockCertificateRepo::new(vec![record("RWA-TIN-2024-001234", true, true)]),
    };

    let result = usecase.execute("RWA-TIN-2024-999999").await;

    assert!(matches!(
        result,
        Err(RegistryServiceError::CertificateNotFound)
    ));
}

#[tokio::test]
async fn should_match_code_exactly() {
    let repo = MockCertificateRepo::new(vec![record("RWA-TIN-2024-001234", true, true)]);
    let lookups = repo.lookups_handle();
    let usecase = VerifyCertificateUseCase { repo };

    let lower = usecase.execute("rwa-tin-2024-001234").await;
    let padded = usecase.execute(" RWA-TIN-2024-001234").await;

    assert!(matches!(lower, Err(RegistryServiceError::CertificateNotFound)));
    assert!(matches!(padded, Err(RegistryServiceError::CertificateNotFound)));
    assert_eq!(
        *lookups.lock().unwrap(),
        vec!["rwa-tin-2024-001234", " RWA-TIN-2024-001234"]
    );
}

#[tokio::test]
async fn should_map_backend_failure_to_lookup_failed() {
    let usecase = VerifyCertificateUseCase {
        repo: FailingCertificateRepo,
    };

    let result = usecase.execute("RWA-TIN-2024-001234").await;

    assert!(matches!(result, Err(RegistryServiceError::LookupFailed(_))));
}
