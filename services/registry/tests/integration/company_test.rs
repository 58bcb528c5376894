use chrono::NaiveDate;
use uuid::Uuid;

use afritrace_registry::domain::types::GeoPoint;
use afritrace_registry::error::RegistryServiceError;
use afritrace_registry::usecase::citizen::{DeleteCitizenUseCase, ListCitizensUseCase};
use afritrace_registry::usecase::company::{
    CreateCompanyUseCase, DeleteCompanyUseCase, GetCompanyUseCase, SetCompanyLocationUseCase,
    UpdateCompanyUseCase,
};

use crate::helpers::{MockCitizenRepo, MockCompanyRepo, citizen, company, draft};

fn validation_message<T: std::fmt::Debug>(result: Result<T, RegistryServiceError>) -> String {
    match result {
        Err(RegistryServiceError::Validation(message)) => message,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn should_create_company_with_trimmed_fields() {
    let repo = MockCompanyRepo::empty();
    let companies = repo.companies_handle();
    let usecase = CreateCompanyUseCase { repo };

    let created = usecase
        .execute(draft("  Kivu Tin Ltd ", " RDB-2020-0001 "))
        .await
        .unwrap();

    assert_eq!(created.name, "Kivu Tin Ltd");
    assert_eq!(created.registration_number, "RDB-2020-0001");
    assert_eq!(companies.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_duplicate_registration_number() {
    let repo = MockCompanyRepo::new(vec![company("Kivu Tin Ltd", "RDB-2020-0001")]);
    let companies = repo.companies_handle();
    let usecase = CreateCompanyUseCase { repo };

    let result = usecase.execute(draft("Other Co", "RDB-2020-0001")).await;

    assert!(matches!(
        result,
        Err(RegistryServiceError::CompanyAlreadyExists)
    ));
    assert_eq!(companies.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_require_company_name() {
    let usecase = CreateCompanyUseCase {
        repo: MockCompanyRepo::empty(),
    };

    let message = validation_message(usecase.execute(draft("   ", "RDB-1")).await);

    assert_eq!(message, "Company name is required");
}

#[tokio::test]
async fn should_require_registration_number() {
    let usecase = CreateCompanyUseCase {
        repo: MockCompanyRepo::empty(),
    };

    let message = validation_message(usecase.execute(draft("Kivu Tin Ltd", "")).await);

    assert_eq!(message, "Registration number is required");
}

#[tokio::test]
async fn should_reject_start_date_after_end_date() {
    let usecase = CreateCompanyUseCase {
        repo: MockCompanyRepo::empty(),
    };
    let mut input = draft("Kivu Tin Ltd", "RDB-1");
    input.certification_start_date = NaiveDate::from_ymd_opt(2026, 1, 1);
    input.certification_end_date = NaiveDate::from_ymd_opt(2025, 1, 1);

    let message = validation_message(usecase.execute(input).await);

    assert_eq!(
        message,
        "Certification start date must not be after the end date"
    );
}

#[tokio::test]
async fn should_reject_out_of_range_latitude() {
    let usecase = CreateCompanyUseCase {
        repo: MockCompanyRepo::empty(),
    };
    let mut input = draft("Kivu Tin Ltd", "RDB-1");
    input.mine_location = Some(GeoPoint {
        lat: 91.0,
        lng: 30.0,
    });

    let message = validation_message(usecase.execute(input).await);

    assert_eq!(message, "Latitude must be between -90 and 90");
}

#[tokio::test]
async fn should_return_not_found_for_missing_company() {
    let usecase = GetCompanyUseCase {
        repo: MockCompanyRepo::empty(),
    };

    let result = usecase.execute(Uuid::new_v4()).await;

    assert!(matches!(result, Err(RegistryServiceError::CompanyNotFound)));
}

#[tokio::test]
async fn should_update_company_keeping_own_registration_number() {
    let existing = company("Kivu Tin Ltd", "RDB-2020-0001");
    let id = existing.id;
    let usecase = UpdateCompanyUseCase {
        repo: MockCompanyRepo::new(vec![existing]),
    };
    let mut input = draft("Kivu Tin & Tantalum Ltd", "RDB-2020-0001");
    input.is_active = false;

    let updated = usecase.execute(id, input).await.unwrap();

    assert_eq!(updated.name, "Kivu Tin & Tantalum Ltd");
    assert!(!updated.is_active);
}

#[tokio::test]
async fn should_reject_update_to_registration_number_of_another_company() {
    let first = company("Kivu Tin Ltd", "RDB-1");
    let second = company("Nyungwe Gold", "RDB-2");
    let id = second.id;
    let usecase = UpdateCompanyUseCase {
        repo: MockCompanyRepo::new(vec![first, second]),
    };

    let result = usecase.execute(id, draft("Nyungwe Gold", "RDB-1")).await;

    assert!(matches!(
        result,
        Err(RegistryServiceError::CompanyAlreadyExists)
    ));
}

#[tokio::test]
async fn should_return_not_found_when_updating_missing_company() {
    let usecase = UpdateCompanyUseCase {
        repo: MockCompanyRepo::empty(),
    };

    let result = usecase.execute(Uuid::new_v4(), draft("Ghost", "RDB-9")).await;

    assert!(matches!(result, Err(RegistryServiceError::CompanyNotFound)));
}

#[tokio::test]
async fn should_set_company_location() {
    let existing = company("Kivu Tin Ltd", "RDB-1");
    let id = existing.id;
    let repo = MockCompanyRepo::new(vec![existing]);
    let companies = repo.companies_handle();
    let usecase = SetCompanyLocationUseCase { repo };
    let location = GeoPoint {
        lat: -1.9536,
        lng: 30.0605,
    };

    usecase.execute(id, location).await.unwrap();

    assert_eq!(companies.lock().unwrap()[0].mine_location, Some(location));
}

#[tokio::test]
async fn should_reject_out_of_range_longitude_before_writing() {
    let existing = company("Kivu Tin Ltd", "RDB-1");
    let id = existing.id;
    let repo = MockCompanyRepo::new(vec![existing]);
    let companies = repo.companies_handle();
    let usecase = SetCompanyLocationUseCase { repo };

    let message = validation_message(
        usecase
            .execute(
                id,
                GeoPoint {
                    lat: 0.0,
                    lng: -180.5,
                },
            )
            .await,
    );

    assert_eq!(message, "Longitude must be between -180 and 180");
    assert!(companies.lock().unwrap()[0].mine_location.is_none());
}

#[tokio::test]
async fn should_delete_company_once() {
    let existing = company("Kivu Tin Ltd", "RDB-1");
    let id = existing.id;
    let usecase = DeleteCompanyUseCase {
        repo: MockCompanyRepo::new(vec![existing]),
    };

    usecase.execute(id).await.unwrap();
    let second = usecase.execute(id).await;

    assert!(matches!(second, Err(RegistryServiceError::CompanyNotFound)));
}

#[tokio::test]
async fn should_list_citizens_newest_first() {
    let older = citizen("older@example.rw", None);
    let mut newer = citizen("newer@example.rw", Some("Eric Habimana"));
    newer.created_at = older.created_at + chrono::Duration::seconds(10);
    let usecase = ListCitizensUseCase {
        repo: MockCitizenRepo::new(vec![older, newer]),
    };

    let listed = usecase.execute().await.unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].email, "newer@example.rw");
}

#[tokio::test]
async fn should_delete_citizen_once() {
    let existing = citizen("citizen@example.rw", None);
    let id = existing.id;
    let usecase = DeleteCitizenUseCase {
        repo: MockCitizenRepo::new(vec![existing]),
    };

    usecase.execute(id).await.unwrap();
    let second = usecase.execute(id).await;

    assert!(matches!(second, Err(RegistryServiceError::CitizenNotFound)));
}
