//! Account API handlers.
//!
//! ```text
//! POST /registration {"email":"ok@mail.com","password":"1234","name":"user"}
//! POST /login {"email":"ok@mail.com","password":"1234"}
//! POST /logout
//! GET /me
//! ```

use actix_web::{HttpResponse, ResponseError, web};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::{Authenticated, Error, LoginCredentials, Registration, User};

use super::ApiResult;
use super::error::ErrorBody;
use super::session::{SessionCookie, issue_cookie, removal_cookie};
use super::state::HttpState;

/// Registration request body for `POST /registration`.
///
/// Missing fields read as empty strings.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct RegistrationRequest {
    #[schema(example = "ok@mail.com")]
    pub email: String,
    #[schema(example = "1234")]
    pub password: String,
    #[schema(example = "user")]
    pub name: String,
}

/// Login request body for `POST /login`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[schema(example = "ok@mail.com")]
    pub email: String,
    #[schema(example = "1234")]
    pub password: String,
}

/// Public view of a user; the identifier and password are withheld.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    pub email: String,
    pub name: String,
    pub avatar: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            email: user.email().to_string(),
            name: user.name().to_string(),
            avatar: user.avatar().to_owned(),
        }
    }
}

/// Confirmation body for `POST /logout`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "logged out")]
    pub message: String,
}

fn with_session_cookie(
    mut response: HttpResponse,
    state: &HttpState,
    outcome: &Authenticated,
) -> HttpResponse {
    let cookie = issue_cookie(&state.cookies, outcome.session.id());
    if let Err(error) = response.add_cookie(&cookie) {
        warn!(%error, "failed to attach session cookie");
    }
    response
}

/// Register a user and start a session for them.
#[utoipa::path(
    post,
    path = "/registration",
    request_body = RegistrationRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 405, description = "Method not allowed", body = ErrorBody),
        (status = 409, description = "Email already registered", body = ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "register",
    security([])
)]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegistrationRequest>,
) -> ApiResult<HttpResponse> {
    let RegistrationRequest {
        email,
        password,
        name,
    } = payload.into_inner();
    let form = Registration::try_from_parts(&email, &password, &name)
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let outcome = state.auth.register(&form)?;
    let response = HttpResponse::Created().json(UserResponse::from(&outcome.user));
    Ok(with_session_cookie(response, &state, &outcome))
}

/// Check credentials and start a session.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = UserResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 401, description = "Invalid password", body = ErrorBody),
        (status = 404, description = "Unknown email", body = ErrorBody),
        (status = 405, description = "Method not allowed", body = ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let LoginRequest { email, password } = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(&email, &password)
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let outcome = state.auth.login(&credentials)?;
    let response = HttpResponse::Ok().json(UserResponse::from(&outcome.user));
    Ok(with_session_cookie(response, &state, &outcome))
}

/// End the session named by the cookie.
///
/// The cookie is cleared whenever one was sent, even if the session it
/// names is not live.
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 400, description = "No usable session cookie", body = ErrorBody),
        (status = 405, description = "Method not allowed", body = ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "logout",
    security(("SessionCookie" = []))
)]
pub async fn logout(state: web::Data<HttpState>, cookie: SessionCookie) -> HttpResponse {
    let mut response = match state.auth.logout(cookie.value()) {
        Ok(_) => HttpResponse::Ok().json(MessageResponse {
            message: "logged out".to_owned(),
        }),
        Err(err) => err.error_response(),
    };
    if cookie.is_present() {
        if let Err(error) = response.add_cookie(&removal_cookie()) {
            warn!(%error, "failed to attach removal cookie");
        }
    }
    response
}

/// The user bound to the session cookie.
#[utoipa::path(
    get,
    path = "/me",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "No session bound to a live user", body = ErrorBody),
        (status = 405, description = "Method not allowed", body = ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "currentUser",
    security(("SessionCookie" = []))
)]
pub async fn me(
    state: web::Data<HttpState>,
    cookie: SessionCookie,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state.auth.current_user(cookie.value())?;
    Ok(web::Json(UserResponse::from(&user)))
}
