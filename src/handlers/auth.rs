use crate::error::GateError;
use crate::gate::{LoginForm, LoginOutcome, RegisterForm, RegisterOutcome, SessionContext};
use crate::router::GateState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// POST /register
pub async fn handle_register(
    State(state): State<GateState>,
    payload: Result<Json<RegisterForm>, JsonRejection>,
) -> Result<Response, GateError> {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return Ok(bad_request(rejection)),
    };
    let outcome = state.gate.register(&form).await?;
    let status = match outcome {
        RegisterOutcome::Created => StatusCode::CREATED,
        RegisterOutcome::UsernameTaken => StatusCode::CONFLICT,
        RegisterOutcome::PasswordMismatch => StatusCode::BAD_REQUEST,
    };
    let body = json!({
        "status": outcome.code(),
        "message": outcome.message(),
    });
    Ok((status, Json(body)).into_response())
}

/// POST /login
///
/// Sessions are not kept between requests; each call starts logged out.
pub async fn handle_login(
    State(state): State<GateState>,
    payload: Result<Json<LoginForm>, JsonRejection>,
) -> Result<Response, GateError> {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return Ok(bad_request(rejection)),
    };
    let mut session = SessionContext::new();
    let outcome = state.gate.login(&mut session, &form).await?;

    let resp = match &outcome {
        LoginOutcome::LoggedIn { username } => {
            let screen = state.gate.dispatch(&session);
            (
                StatusCode::OK,
                Json(json!({
                    "status": outcome.code(),
                    "username": username,
                    "screen": screen,
                    "message": outcome.message(),
                })),
            )
        }
        LoginOutcome::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "status": outcome.code(),
                "message": outcome.message(),
            })),
        ),
    };
    Ok(resp.into_response())
}

fn bad_request(rejection: JsonRejection) -> Response {
    (
        rejection.status(),
        Json(json!({
            "status": "bad_request",
            "message": rejection.body_text(),
        })),
    )
        .into_response()
}
