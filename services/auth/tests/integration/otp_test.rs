use chrono::{Duration, Utc};

use afritrace_auth::error::AuthServiceError;
use afritrace_auth::usecase::otp::{VerifyOtpInput, VerifyOtpUseCase};

use crate::helpers::{MockOtpRepo, fresh_otp, otp};

fn input(email: &str, code: &str) -> VerifyOtpInput {
    VerifyOtpInput {
        email: email.to_owned(),
        code: code.to_owned(),
    }
}

fn usecase(repo: MockOtpRepo) -> VerifyOtpUseCase<MockOtpRepo> {
    VerifyOtpUseCase {
        otps: repo,
        max_attempts: None,
    }
}

#[tokio::test]
async fn should_verify_matching_unexpired_code() {
    let repo = MockOtpRepo::new(vec![fresh_otp("a@b.com", "123456")]);
    let handle = repo.codes_handle();

    usecase(repo)
        .execute(input("a@b.com", "123456"))
        .await
        .unwrap();

    assert!(handle.lock().unwrap()[0].verified, "row should be verified");
}

#[tokio::test]
async fn should_reject_missing_fields() {
    let uc = usecase(MockOtpRepo::empty());

    for (email, code) in [("", "123456"), ("a@b.com", ""), ("", "")] {
        let result = uc.execute(input(email, code)).await;
        assert!(
            matches!(result, Err(AuthServiceError::MissingFields)),
            "expected MissingFields for ({email:?}, {code:?}), got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_return_not_found_for_unknown_email() {
    let result = usecase(MockOtpRepo::empty())
        .execute(input("nouser@x.com", "123456"))
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::CodeNotFound)),
        "expected CodeNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_expired_code_and_leave_row_unverified() {
    let expired = otp("a@b.com", "123456", Utc::now() - Duration::seconds(1));
    let repo = MockOtpRepo::new(vec![expired]);
    let handle = repo.codes_handle();

    let result = usecase(repo).execute(input("a@b.com", "123456")).await;

    assert!(
        matches!(result, Err(AuthServiceError::CodeExpired)),
        "expected CodeExpired, got {result:?}"
    );
    assert!(!handle.lock().unwrap()[0].verified);
}

#[tokio::test]
async fn should_reject_wrong_code() {
    let repo = MockOtpRepo::new(vec![fresh_otp("a@b.com", "123456")]);
    let handle = repo.codes_handle();

    let result = usecase(repo).execute(input("a@b.com", "654321")).await;

    assert!(
        matches!(result, Err(AuthServiceError::InvalidCode)),
        "expected InvalidCode, got {result:?}"
    );
    let codes = handle.lock().unwrap();
    assert!(!codes[0].verified);
    assert_eq!(codes[0].attempts, 0, "attempts are not counted without a limit");
}

#[tokio::test]
async fn should_not_accept_same_code_twice() {
    let uc = usecase(MockOtpRepo::new(vec![fresh_otp("a@b.com", "123456")]));

    uc.execute(input("a@b.com", "123456")).await.unwrap();
    let second = uc.execute(input("a@b.com", "123456")).await;

    assert!(
        matches!(second, Err(AuthServiceError::CodeNotFound)),
        "expected CodeNotFound on reuse, got {second:?}"
    );
}

#[tokio::test]
async fn should_only_consider_latest_unverified_code() {
    let mut older = fresh_otp("a@b.com", "111111");
    older.created_at = Utc::now() - Duration::minutes(5);
    let newer = fresh_otp("a@b.com", "222222");
    let uc = usecase(MockOtpRepo::new(vec![older, newer]));

    let result = uc.execute(input("a@b.com", "111111")).await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidCode)),
        "older code should not be accepted, got {result:?}"
    );

    uc.execute(input("a@b.com", "222222")).await.unwrap();
}

#[tokio::test]
async fn should_count_failed_attempts_when_limit_configured() {
    let repo = MockOtpRepo::new(vec![fresh_otp("a@b.com", "123456")]);
    let handle = repo.codes_handle();
    let uc = VerifyOtpUseCase {
        otps: repo,
        max_attempts: Some(2),
    };

    for _ in 0..2 {
        let result = uc.execute(input("a@b.com", "000000")).await;
        assert!(matches!(result, Err(AuthServiceError::InvalidCode)));
    }
    assert_eq!(handle.lock().unwrap()[0].attempts, 2);

    let locked_out = uc.execute(input("a@b.com", "123456")).await;
    assert!(
        matches!(locked_out, Err(AuthServiceError::TooManyAttempts)),
        "expected TooManyAttempts, got {locked_out:?}"
    );
    assert!(!handle.lock().unwrap()[0].verified);
}
