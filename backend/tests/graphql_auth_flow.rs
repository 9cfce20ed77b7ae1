//! End-to-end coverage of registration, login and token-gated queries over
//! the real actix stack with in-memory adapters.

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header;
use actix_web::{App, test as actix_test, web};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::{Value, json};
use zeroize::Zeroizing;

use courses_backend::Trace;
use courses_backend::domain::{
    CatalogueManager, CredentialManager, IdentityClaims, TRACE_ID_HEADER, UserDirectory, UserId,
};
use courses_backend::inbound::graphql::{GraphqlServices, build_schema};
use courses_backend::inbound::http::{Authenticate, HealthState, configure};
use courses_backend::outbound::memory::{
    InMemoryCourseRepository, InMemoryTeacherRepository, InMemoryUserRepository,
};
use courses_backend::outbound::security::{BcryptPasswordHasher, JwtTokenCodec, MIN_COST, jwt};

const SECRET: &[u8] = b"integration-secret-integration-secret";

async fn app() -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    let users = Arc::new(InMemoryUserRepository::new());
    let codec = Arc::new(JwtTokenCodec::new(
        Zeroizing::new(SECRET.to_vec()),
        Arc::new(DefaultClock),
    ));
    let hasher = Arc::new(BcryptPasswordHasher::new(MIN_COST).expect("valid cost"));
    let schema = build_schema(GraphqlServices {
        credentials: Arc::new(CredentialManager::new(users.clone(), hasher, codec.clone())),
        catalogue: Arc::new(CatalogueManager::new(
            Arc::new(InMemoryCourseRepository::new()),
            Arc::new(InMemoryTeacherRepository::new()),
        )),
        users: Arc::new(UserDirectory::new(users)),
    });

    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(HealthState::new()))
            .app_data(web::Data::new(schema))
            .wrap(Authenticate::new(codec))
            .wrap(Trace)
            .configure(|cfg| configure(cfg, false)),
    )
    .await
}

async fn graphql<S>(app: &S, query: &str, authorization: Option<&str>) -> (Value, Option<String>)
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let mut req = actix_test::TestRequest::post()
        .uri("/graphql")
        .set_json(json!({ "query": query }));
    if let Some(value) = authorization {
        req = req.insert_header((header::AUTHORIZATION, value));
    }
    let res = actix_test::call_service(app, req.to_request()).await;
    assert!(res.status().is_success());
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    (actix_test::read_body_json(res).await, trace_id)
}

const REGISTER: &str = r#"mutation { addUser(name: "Ada", email: "a@x.com", password: "pw1", date: "2024-01-01") { message error } }"#;
const LOGIN: &str = r#"mutation { login(email: "a@x.com", password: "pw1") { message error token } }"#;

async fn register_and_login<S>(app: &S) -> String
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let (registered, _) = graphql(app, REGISTER, None).await;
    assert_eq!(
        registered["data"]["addUser"]["message"],
        "User registered successfully"
    );
    let (login, _) = graphql(app, LOGIN, None).await;
    login["data"]["login"]["token"]
        .as_str()
        .expect("token issued")
        .to_owned()
}

#[actix_web::test]
async fn registered_user_can_log_in_and_read_a_course() {
    let app = app().await;
    let token = register_and_login(&app).await;

    let claims = jwt::verify(&token, SECRET).expect("token verifies");
    assert_eq!(claims.name, "Ada");
    assert_eq!(claims.date, "2024-01-01");

    let (created, _) = graphql(
        &app,
        r#"mutation { addCourse(name: "Rust", language: "en") { id } }"#,
        None,
    )
    .await;
    let id = created["data"]["addCourse"]["id"]
        .as_str()
        .expect("course id")
        .to_owned();
    let query = format!(r#"{{ course(id: "{id}") {{ name }} }}"#);

    let (anonymous, trace_id) = graphql(&app, &query, None).await;
    assert_eq!(anonymous["errors"][0]["message"], "Unauthenticated");
    assert_eq!(
        anonymous["errors"][0]["extensions"]["traceId"].as_str(),
        trace_id.as_deref()
    );

    let (authorised, _) = graphql(&app, &query, Some(&format!("Bearer {token}"))).await;
    assert!(authorised.get("errors").is_none());
    assert_eq!(authorised["data"]["course"]["name"], "Rust");
}

#[rstest]
#[case::scheme_only("Bearer")]
#[case::empty_token("Bearer ")]
#[case::garbage("Bearer not-a-token")]
#[actix_web::test]
async fn malformed_authorization_never_rejects_the_request(#[case] header_value: &str) {
    let app = app().await;
    let (body, _) = graphql(&app, "{ courses { id } }", Some(header_value)).await;
    assert!(body.get("errors").is_none());

    let (gated, _) = graphql(
        &app,
        r#"{ course(id: "3fa85f64-5717-4562-b3fc-2c963f66afa6") { id } }"#,
        Some(header_value),
    )
    .await;
    assert_eq!(gated["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");
}

#[actix_web::test]
async fn token_signed_with_another_secret_is_unauthenticated() {
    let app = app().await;
    let claims = IdentityClaims {
        user_id: UserId::random(),
        name: "Mallory".to_owned(),
        date: "2024-01-01".to_owned(),
    };
    let forged = jwt::sign(&claims, b"some-other-secret", chrono::Utc::now()).expect("signs");

    let (body, _) = graphql(
        &app,
        r#"{ course(id: "3fa85f64-5717-4562-b3fc-2c963f66afa6") { id } }"#,
        Some(&format!("Bearer {}", forged.as_ref())),
    )
    .await;
    assert_eq!(body["errors"][0]["message"], "Unauthenticated");
}

#[actix_web::test]
async fn lowercase_scheme_is_accepted() {
    let app = app().await;
    let token = register_and_login(&app).await;
    let (body, _) = graphql(
        &app,
        r#"{ user(email: "a@x.com") { name email } }"#,
        Some(&format!("bearer {token}")),
    )
    .await;
    assert_eq!(body["data"]["user"], json!({ "name": "Ada", "email": "a@x.com" }));
}

#[actix_web::test]
async fn duplicate_registration_and_bad_login_are_soft_errors() {
    let app = app().await;
    register_and_login(&app).await;

    let (again, _) = graphql(&app, REGISTER, None).await;
    assert!(again.get("errors").is_none());
    assert_eq!(
        again["data"]["addUser"]["error"],
        "A user with that email already exists"
    );

    let (wrong, _) = graphql(
        &app,
        r#"mutation { login(email: "a@x.com", password: "nope") { error token } }"#,
        None,
    )
    .await;
    let (unknown, _) = graphql(
        &app,
        r#"mutation { login(email: "b@x.com", password: "pw1") { error token } }"#,
        None,
    )
    .await;
    assert_eq!(wrong["data"]["login"], unknown["data"]["login"]);
    assert_eq!(wrong["data"]["login"]["error"], "Invalid email or password");
    assert_eq!(wrong["data"]["login"]["token"], Value::Null);
}

#[actix_web::test]
async fn every_response_carries_a_trace_id() {
    let app = app().await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/health/live").to_request(),
    )
    .await;
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
}
