//! End-to-end scenarios for the Auth Flow over in-memory stores.

mod support;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use mindleak::domain::ports::{SessionRepository, SessionStoreError, UserRepository};
use mindleak::domain::{Session, SessionId, TRACE_ID_HEADER, UserId};
use mindleak::inbound::http::state::HttpStatePorts;
use mindleak::outbound::memory::{InMemorySessionStore, InMemoryUserStore};
use rstest::rstest;
use serde_json::{Value, json};

use support::{app_with, session_cookie};

fn registration() -> Value {
    json!({"email": "ok@mail.com", "password": "1234", "name": "user"})
}

#[rstest]
#[actix_web::test]
async fn register_login_me_logout_round_trip() {
    let app = test::init_service(app_with(HttpStatePorts::default())).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/registration")
            .set_json(registration())
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let registered = session_cookie(&res).expect("session cookie");
    registered
        .value()
        .parse::<SessionId>()
        .expect("cookie parses as a session id");
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["email"], "ok@mail.com");
    assert!(body.get("password").is_none());
    assert!(body.get("id").is_none());

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"email": "ok@mail.com", "password": "1234"}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let logged_in = session_cookie(&res).expect("fresh session cookie");
    assert_ne!(logged_in.value(), registered.value());

    for cookie in [registered.clone(), logged_in.clone()] {
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/me").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["name"], "user");
    }

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/logout")
            .cookie(logged_in.clone())
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"message": "logged out"}));

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/me").cookie(logged_in).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/me").cookie(registered).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK, "other sessions stay live");
}

#[rstest]
#[actix_web::test]
async fn errors_carry_trace_id_header() {
    let app = test::init_service(app_with(HttpStatePorts::default())).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"email": "ghost@mail.com", "password": "1234"}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"error": "user not found"}));
}

#[rstest]
#[actix_web::test]
async fn body_without_content_type_is_accepted() {
    let app = test::init_service(app_with(HttpStatePorts::default())).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/registration")
            .set_payload(registration().to_string())
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
}

/// Session store whose sessions vanish as soon as they are created, standing
/// in for a logout racing between session creation and binding.
struct VanishingSessions(InMemorySessionStore);

impl SessionRepository for VanishingSessions {
    fn create_session(&self) -> Session {
        let session = self.0.create_session();
        let _ = self.0.delete_session_by_id(&session.id());
        session
    }

    fn get_session_by_id(&self, id: &SessionId) -> Result<Session, SessionStoreError> {
        self.0.get_session_by_id(id)
    }

    fn set_session_user_id(
        &self,
        id: &SessionId,
        user_id: UserId,
    ) -> Result<Session, SessionStoreError> {
        self.0.set_session_user_id(id, user_id)
    }

    fn delete_session_by_id(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        self.0.delete_session_by_id(id)
    }
}

#[rstest]
#[actix_web::test]
async fn session_lost_before_binding_leaves_user_registered() {
    let users = Arc::new(InMemoryUserStore::new());
    let defaults = HttpStatePorts::default();
    let ports = HttpStatePorts {
        users: users.clone(),
        sessions: Arc::new(VanishingSessions(InMemorySessionStore::new())),
        articles: defaults.articles,
    };
    let app = test::init_service(app_with(ports)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/registration")
            .set_json(registration())
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(session_cookie(&res).is_none());
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"error": "session not found"}));
    let user = users
        .get_user_by_email("ok@mail.com")
        .expect("user survives the failed binding");
    assert_eq!(user.name().as_ref(), "user");
}
