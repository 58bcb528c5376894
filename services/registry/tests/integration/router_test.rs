use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;
use uuid::Uuid;

use afritrace_registry::infra::rema::RemaRegistry;
use afritrace_registry::router::build_router;
use afritrace_registry::state::AppState;
use afritrace_registry_schema::{certificates, companies, feedback_reports, user_roles};
use afritrace_testing::auth::{MockAuth, TEST_JWT_SECRET, bearer_header};
use afritrace_testing::db::{postgres, rows_affected, unused_connection};
use afritrace_testing::http::json_body;

fn app(db: DatabaseConnection) -> axum::Router {
    build_router(AppState {
        db: Arc::new(db),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        rema: RemaRegistry::Static,
    })
}

fn request(method: Method, uri: &str, auth: Option<&MockAuth>, body: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        let (name, value) = auth.header();
        builder = builder.header(name, value);
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn admin_role(user_id: Uuid) -> user_roles::Model {
    user_roles::Model {
        id: Uuid::new_v4(),
        user_id,
        role: "administrator".to_owned(),
    }
}

fn company_model(name: &str, registration_number: &str) -> companies::Model {
    let now = Utc::now();
    companies::Model {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        registration_number: registration_number.to_owned(),
        contact_email: Some("info@kabarore.rw".to_owned()),
        contact_phone: None,
        address: None,
        mine_location_lat: Some(-1.6),
        mine_location_lng: Some(30.4),
        certification_status: "active".to_owned(),
        certification_start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        certification_end_date: NaiveDate::from_ymd_opt(2026, 1, 1),
        regional_compliance: serde_json::json!({
            "AU": true, "REMA": true, "ICGLR": true, "COMESA": false
        }),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

fn certificate_model(batch_code: &str, company_id: Option<Uuid>) -> certificates::Model {
    certificates::Model {
        id: Uuid::new_v4(),
        batch_code: batch_code.to_owned(),
        mineral_type: "Cassiterite (Tin)".to_owned(),
        origin_district: "Gatsibo".to_owned(),
        mine_site: "Kabarore Mining Cooperative".to_owned(),
        export_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        weight_kg: Some(2500.0),
        certification_status: "active".to_owned(),
        verified_by_rema: true,
        icglr_compliant: true,
        tamper_hash: Some("a3f5b9c2".to_owned()),
        company_id,
        created_at: Utc::now(),
    }
}

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_answer_healthz() {
    let resp = app(unused_connection())
        .oneshot(request(Method::GET, "/healthz", None, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn should_report_ready_through_shared_pool() {
    let resp = app(unused_connection())
        .oneshot(request(Method::GET, "/readyz", None, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ── Certificates ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_verified_certificate_with_company() {
    let company = company_model("Kabarore Mining Cooperative", "RDB-2019-4421");
    let certificate = certificate_model("RWA-TIN-2024-001234", Some(company.id));
    let db = postgres()
        .append_query_results([vec![(certificate, Some(company))]])
        .into_connection();

    let resp = app(db)
        .oneshot(request(
            Method::POST,
            "/certificates/verify",
            None,
            Some(r#"{"code":"RWA-TIN-2024-001234"}"#),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert_eq!(json["outcome"], "verified");
    assert_eq!(json["fully_verified"], true);
    assert_eq!(json["export_date"], "2024-03-15");
    assert_eq!(json["company"]["registration_number"], "RDB-2019-4421");
    assert_eq!(json["company"]["regional_compliance"]["COMESA"], false);
}

#[tokio::test]
async fn should_return_404_for_unknown_certificate() {
    let db = postgres()
        .append_query_results([Vec::<certificates::Model>::new()])
        .into_connection();

    let resp = app(db)
        .oneshot(request(
            Method::POST,
            "/certificates/verify",
            None,
            Some(r#"{"code":"NOPE-1"}"#),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json = json_body(resp).await;
    assert_eq!(json["kind"], "CERTIFICATE_NOT_FOUND");
}

#[tokio::test]
async fn should_return_400_for_blank_certificate_code() {
    let resp = app(unused_connection())
        .oneshot(request(
            Method::POST,
            "/certificates/verify",
            None,
            Some(r#"{"code":"   "}"#),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = json_body(resp).await;
    assert_eq!(json["message"], "Please enter a batch or certificate code");
}

// ── Feedback ─────────────────────────────────────────────────────────────────

const FEEDBACK: &str = r#"{
    "name": "Jane Uwase",
    "email": "jane@example.rw",
    "location": "Rutsiro District",
    "category": "environmental",
    "message": "Tailings are being dumped into the river at night."
}"#;

#[tokio::test]
async fn should_accept_anonymous_feedback() {
    let now = Utc::now();
    let stored = feedback_reports::Model {
        id: Uuid::now_v7(),
        user_id: None,
        name: "Jane Uwase".to_owned(),
        email: "jane@example.rw".to_owned(),
        location: "Rutsiro District".to_owned(),
        category: "environmental".to_owned(),
        message: "Tailings are being dumped into the river at night.".to_owned(),
        status: "pending".to_owned(),
        admin_response: None,
        admin_id: None,
        created_at: now,
        updated_at: now,
    };
    let db = postgres()
        .append_query_results([vec![stored]])
        .into_connection();

    let resp = app(db)
        .oneshot(request(Method::POST, "/feedback", None, Some(FEEDBACK)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = json_body(resp).await;
    assert!(json["id"].is_string());
}

#[tokio::test]
async fn should_reject_feedback_with_invalid_token() {
    let req = {
        let (name, value) = bearer_header("not-a-jwt");
        Request::builder()
            .method(Method::POST)
            .uri("/feedback")
            .header(name, value)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(FEEDBACK))
            .unwrap()
    };

    let resp = app(unused_connection()).oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_return_first_feedback_validation_message() {
    let body = r#"{"name":"Jane","email":"jane@example.rw","location":"Rutsiro","category":"weather","message":"short"}"#;

    let resp = app(unused_connection())
        .oneshot(request(Method::POST, "/feedback", None, Some(body)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = json_body(resp).await;
    assert_eq!(json["kind"], "VALIDATION_ERROR");
    assert_eq!(json["message"], "Please select a category");
}

#[tokio::test]
async fn should_require_token_for_own_feedback() {
    let resp = app(unused_connection())
        .oneshot(request(Method::GET, "/feedback/@me", None, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// ── Admin ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_admin_route_without_token() {
    let resp = app(unused_connection())
        .oneshot(request(Method::GET, "/admin/companies", None, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_forbid_admin_route_for_citizen() {
    let db = postgres()
        .append_query_results([Vec::<user_roles::Model>::new()])
        .into_connection();
    let citizen = MockAuth::new(Uuid::new_v4());

    let resp = app(db)
        .oneshot(request(Method::GET, "/admin/companies", Some(&citizen), None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let json = json_body(resp).await;
    assert_eq!(json["message"], "Administrator access required");
}

#[tokio::test]
async fn should_list_companies_for_admin() {
    let admin = MockAuth::new(Uuid::new_v4());
    let db = postgres()
        .append_query_results([vec![admin_role(admin.user_id)]])
        .append_query_results([vec![
            company_model("Kabarore Mining Cooperative", "RDB-2019-4421"),
            company_model("Nyungwe Gold", "RDB-2021-0077"),
        ]])
        .into_connection();

    let resp = app(db)
        .oneshot(request(Method::GET, "/admin/companies", Some(&admin), None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["mine_location_lat"], -1.6);
}

#[tokio::test]
async fn should_reject_company_with_half_a_location() {
    let admin = MockAuth::new(Uuid::new_v4());
    let db = postgres()
        .append_query_results([vec![admin_role(admin.user_id)]])
        .into_connection();
    let body = r#"{"name":"Kivu Tin Ltd","registration_number":"RDB-1","certification_status":"active","mine_location_lat":-2.0}"#;

    let resp = app(db)
        .oneshot(request(
            Method::POST,
            "/admin/companies",
            Some(&admin),
            Some(body),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = json_body(resp).await;
    assert_eq!(
        json["message"],
        "Latitude and longitude must be set together"
    );
}

#[tokio::test]
async fn should_set_company_location() {
    let admin = MockAuth::new(Uuid::new_v4());
    let db = postgres()
        .append_query_results([vec![admin_role(admin.user_id)]])
        .append_exec_results([rows_affected(1)])
        .into_connection();

    let resp = app(db)
        .oneshot(request(
            Method::PATCH,
            &format!("/admin/companies/{}/location", Uuid::new_v4()),
            Some(&admin),
            Some(r#"{"lat":-1.9536,"lng":30.0605}"#),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn should_return_404_when_deleting_missing_company() {
    let admin = MockAuth::new(Uuid::new_v4());
    let db = postgres()
        .append_query_results([vec![admin_role(admin.user_id)]])
        .append_exec_results([rows_affected(0)])
        .into_connection();

    let resp = app(db)
        .oneshot(request(
            Method::DELETE,
            &format!("/admin/companies/{}", Uuid::new_v4()),
            Some(&admin),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json = json_body(resp).await;
    assert_eq!(json["kind"], "COMPANY_NOT_FOUND");
}

#[tokio::test]
async fn should_sync_static_registry_into_empty_table() {
    let admin = MockAuth::new(Uuid::new_v4());
    let mut db = postgres().append_query_results([vec![admin_role(admin.user_id)]]);
    for (name, registration_number) in [
        ("REMA Certified Mining Co.", "REMA-2024-101"),
        ("Northern Rwanda Minerals", "REMA-2024-102"),
        ("Southern Mining Operations Ltd", "REMA-2024-103"),
        ("Western Province Gold Mines", "REMA-2024-104"),
    ] {
        db = db
            .append_query_results([Vec::<companies::Model>::new()])
            .append_query_results([vec![company_model(name, registration_number)]]);
    }

    let resp = app(db.into_connection())
        .oneshot(request(
            Method::POST,
            "/admin/companies/sync",
            Some(&admin),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["synced"], 4);
    assert_eq!(json["skipped"], 0);
    assert!(json.get("errors").is_none());
}
