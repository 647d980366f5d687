//! Tests for the Auth Flow orchestration.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::{
    MockSessionRepository, MockUserRepository, SessionStoreError, UserStoreError,
};
use crate::domain::{DisplayName, Email, ErrorCode, Password};

fn make_service(users: MockUserRepository, sessions: MockSessionRepository) -> AuthService {
    AuthService::new(Arc::new(users), Arc::new(sessions))
}

fn sample_user() -> User {
    User::new(
        UserId::random(),
        Email::new("ada@mail.com").expect("valid email"),
        Password::new("1234").expect("valid password"),
        DisplayName::new("adaL").expect("valid name"),
    )
}

fn expect_fresh_binding(sessions: &mut MockSessionRepository, user_id: UserId) -> SessionId {
    let session_id = SessionId::random();
    sessions
        .expect_create_session()
        .times(1)
        .return_once(move || Session::anonymous(session_id));
    sessions
        .expect_set_session_user_id()
        .withf(move |id, bound| *id == session_id && *bound == user_id)
        .times(1)
        .return_once(move |id, bound| Ok(Session::new(*id, bound)));
    session_id
}

#[rstest]
fn resolve_reuses_live_session() {
    let session = Session::anonymous(SessionId::random());
    let mut sessions = MockSessionRepository::new();
    sessions
        .expect_get_session_by_id()
        .return_once(move |_| Ok(session));
    sessions.expect_create_session().never();

    let service = make_service(MockUserRepository::new(), sessions);
    let cookie = session.id().to_string();
    let resolution = service.resolve_session(Some(cookie.as_str()));

    assert_eq!(resolution, SessionResolution::Existing(session));
    assert!(!resolution.is_new());
}

#[rstest]
#[case(None)]
#[case(Some("not-a-uuid"))]
fn resolve_creates_guest_for_missing_or_malformed_cookie(#[case] cookie: Option<&str>) {
    let mut sessions = MockSessionRepository::new();
    sessions.expect_get_session_by_id().never();
    sessions
        .expect_create_session()
        .times(1)
        .return_once(|| Session::anonymous(SessionId::random()));

    let service = make_service(MockUserRepository::new(), sessions);
    let resolution = service.resolve_session(cookie);

    assert!(resolution.is_new());
    assert!(resolution.session().is_anonymous());
}

#[rstest]
fn resolve_creates_guest_for_unknown_session() {
    let mut sessions = MockSessionRepository::new();
    sessions
        .expect_get_session_by_id()
        .return_once(|_| Err(SessionStoreError::not_found()));
    sessions
        .expect_create_session()
        .times(1)
        .return_once(|| Session::anonymous(SessionId::random()));

    let service = make_service(MockUserRepository::new(), sessions);
    let unknown = SessionId::random().to_string();

    assert!(service.resolve_session(Some(unknown.as_str())).is_new());
}

#[rstest]
fn register_binds_a_fresh_session() {
    let user = sample_user();
    let user_id = user.id();
    let mut users = MockUserRepository::new();
    users
        .expect_create_user()
        .times(1)
        .return_once(move |_, _, _| Ok(user));
    let mut sessions = MockSessionRepository::new();
    let session_id = expect_fresh_binding(&mut sessions, user_id);

    let service = make_service(users, sessions);
    let form = Registration::try_from_parts("ada@mail.com", "1234", "adaL").expect("valid form");
    let outcome = service.register(&form).expect("registration succeeds");

    assert_eq!(outcome.user.id(), user_id);
    assert_eq!(outcome.session.id(), session_id);
    assert_eq!(outcome.session.user_id(), user_id);
}

#[rstest]
fn register_reports_duplicate_email_as_conflict() {
    let mut users = MockUserRepository::new();
    users
        .expect_create_user()
        .return_once(|_, _, _| Err(UserStoreError::already_registered()));
    let mut sessions = MockSessionRepository::new();
    sessions.expect_create_session().never();

    let service = make_service(users, sessions);
    let form = Registration::try_from_parts("ada@mail.com", "1234", "adaL").expect("valid form");
    let err = service.register(&form).expect_err("duplicate email");

    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.message(), "this user is already registered");
}

#[rstest]
fn register_keeps_user_when_session_vanishes_before_binding() {
    let user = sample_user();
    let mut users = MockUserRepository::new();
    users
        .expect_create_user()
        .times(1)
        .return_once(move |_, _, _| Ok(user));
    let mut sessions = MockSessionRepository::new();
    sessions
        .expect_create_session()
        .return_once(|| Session::anonymous(SessionId::random()));
    sessions
        .expect_set_session_user_id()
        .return_once(|_, _| Err(SessionStoreError::not_found()));

    let service = make_service(users, sessions);
    let form = Registration::try_from_parts("ada@mail.com", "1234", "adaL").expect("valid form");
    let err = service.register(&form).expect_err("binding fails");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "session not found");
}

#[rstest]
fn login_binds_session_on_matching_password() {
    let user = sample_user();
    let user_id = user.id();
    let mut users = MockUserRepository::new();
    users
        .expect_get_user_by_email()
        .withf(|email| email == "ada@mail.com")
        .return_once(move |_| Ok(user));
    let mut sessions = MockSessionRepository::new();
    let session_id = expect_fresh_binding(&mut sessions, user_id);

    let service = make_service(users, sessions);
    let creds = LoginCredentials::try_from_parts("ada@mail.com", "1234").expect("credentials");
    let outcome = service.login(&creds).expect("login succeeds");

    assert_eq!(outcome.session.id(), session_id);
    assert_eq!(outcome.session.user_id(), user_id);
}

#[rstest]
fn login_rejects_wrong_password_without_creating_session() {
    let user = sample_user();
    let mut users = MockUserRepository::new();
    users
        .expect_get_user_by_email()
        .return_once(move |_| Ok(user));
    let mut sessions = MockSessionRepository::new();
    sessions.expect_create_session().never();

    let service = make_service(users, sessions);
    let creds = LoginCredentials::try_from_parts("ada@mail.com", "4321").expect("credentials");
    let err = service.login(&creds).expect_err("wrong password");

    assert_eq!(err.code(), ErrorCode::Unauthorized);
    assert_eq!(err.message(), "invalid password");
}

#[rstest]
fn login_reports_unknown_email_as_not_found() {
    let mut users = MockUserRepository::new();
    users
        .expect_get_user_by_email()
        .return_once(|_| Err(UserStoreError::not_found()));

    let service = make_service(users, MockSessionRepository::new());
    let creds = LoginCredentials::try_from_parts("ghost@mail.com", "1234").expect("credentials");
    let err = service.login(&creds).expect_err("unknown email");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "user not found");
}

#[rstest]
fn logout_deletes_named_session() {
    let session_id = SessionId::random();
    let mut sessions = MockSessionRepository::new();
    sessions
        .expect_delete_session_by_id()
        .withf(move |id| *id == session_id)
        .times(1)
        .return_once(|_| Ok(()));

    let service = make_service(MockUserRepository::new(), sessions);
    let cookie = session_id.to_string();

    assert_eq!(service.logout(Some(cookie.as_str())), Ok(session_id));
}

#[rstest]
#[case(None, "cookie not found")]
#[case(Some("garbage"), "session id is invalid")]
fn logout_rejects_unusable_cookie(#[case] cookie: Option<&str>, #[case] expected: &str) {
    let mut sessions = MockSessionRepository::new();
    sessions.expect_delete_session_by_id().never();

    let service = make_service(MockUserRepository::new(), sessions);
    let err = service.logout(cookie).expect_err("unusable cookie");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), expected);
}

#[rstest]
fn logout_reports_unknown_session() {
    let mut sessions = MockSessionRepository::new();
    sessions
        .expect_delete_session_by_id()
        .return_once(|_| Err(SessionStoreError::not_found()));

    let service = make_service(MockUserRepository::new(), sessions);
    let cookie = SessionId::random().to_string();
    let err = service.logout(Some(cookie.as_str())).expect_err("unknown session");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "session not found");
}

#[rstest]
fn current_user_follows_session_binding() {
    let user = sample_user();
    let user_id = user.id();
    let session = Session::new(SessionId::random(), user_id);
    let mut sessions = MockSessionRepository::new();
    sessions
        .expect_get_session_by_id()
        .return_once(move |_| Ok(session));
    let mut users = MockUserRepository::new();
    users
        .expect_get_user_by_id()
        .withf(move |id| *id == user_id)
        .return_once(move |_| Ok(user));

    let service = make_service(users, sessions);
    let cookie = session.id().to_string();
    let found = service
        .current_user(Some(cookie.as_str()))
        .expect("bound session");

    assert_eq!(found.id(), user_id);
}

#[rstest]
#[case(None)]
#[case(Some("garbage"))]
fn current_user_rejects_unusable_cookie(#[case] cookie: Option<&str>) {
    let service = make_service(MockUserRepository::new(), MockSessionRepository::new());
    let err = service.current_user(cookie).expect_err("no session");

    assert_eq!(err.code(), ErrorCode::Unauthorized);
    assert_eq!(err.message(), UNAUTHORIZED_MESSAGE);
}

#[rstest]
fn current_user_rejects_guest_session() {
    let session = Session::anonymous(SessionId::random());
    let mut sessions = MockSessionRepository::new();
    sessions
        .expect_get_session_by_id()
        .return_once(move |_| Ok(session));
    let mut users = MockUserRepository::new();
    users
        .expect_get_user_by_id()
        .return_once(|_| Err(UserStoreError::not_found()));

    let service = make_service(users, sessions);
    let cookie = session.id().to_string();
    let err = service
        .current_user(Some(cookie.as_str()))
        .expect_err("guest session");

    assert_eq!(err.code(), ErrorCode::Unauthorized);
    assert_eq!(err.message(), UNAUTHORIZED_MESSAGE);
}

#[rstest]
fn current_user_rejects_unknown_session() {
    let mut sessions = MockSessionRepository::new();
    sessions
        .expect_get_session_by_id()
        .return_once(|_| Err(SessionStoreError::not_found()));

    let service = make_service(MockUserRepository::new(), sessions);
    let cookie = SessionId::random().to_string();
    let err = service
        .current_user(Some(cookie.as_str()))
        .expect_err("unknown session");

    assert_eq!(err.message(), UNAUTHORIZED_MESSAGE);
}
