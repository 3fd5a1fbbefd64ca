use actix_web::{
    post,
    web::{self, Data},
    HttpResponse,
};
use serde_json::json;

use crate::{
    app::{AppError, AppState},
    auth::{self, Credentials},
};

/// Pipe for logging in with credentials
/// - url: `{domain}/login`
///
/// # HTTP request requirements
/// ## body
/// - json object with `username` and `password` keys
///
/// # Response
/// ## Ok
/// - `{token, username, name}` where `token` is a bearer token valid for one
///   hour
/// ## Error
/// - Unauthorized, with one generic message whether the username is unknown
///   or the password wrong
#[post("/login")]
pub async fn login(
    input: web::Json<Credentials>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (token, user) = auth::authenticate(app_state.store.as_ref(), &app_state.keys, &input)?;

    Ok(HttpResponse::Ok().json(json!({
        "token": token,
        "username": user.username,
        "name": user.name,
    })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, web::Data, App};
    use serde_json::{json, Value};

    use super::*;
    use crate::app::AppState;
    use crate::auth::token::TokenKeys;
    use crate::auth::NewUser;
    use crate::database::memory::MemStore;

    fn test_state() -> AppState {
        AppState::new(Arc::new(MemStore::new()), TokenKeys::from_secret("test-secret"))
    }

    fn register(state: &AppState, username: &str, password: &str) {
        auth::register(
            state.store.as_ref(),
            NewUser {
                username: Some(username.to_string()),
                name: Some(String::from("Ricardo Soto")),
                password: Some(password.to_string()),
            },
        )
        .unwrap();
    }

    #[actix_rt::test]
    async fn login_returns_a_verifiable_token() {
        let state = test_state();
        let app = test::init_service(
            App::new().app_data(Data::new(state.clone())).service(login),
        )
        .await;
        register(&state, "ricasoto", "salainen");

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "username": "ricasoto", "password": "salainen" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["username"], "ricasoto");
        assert_eq!(body["name"], "Ricardo Soto");

        let identity = state
            .keys
            .verify(body["token"].as_str().unwrap())
            .unwrap();
        assert_eq!(identity.username, "ricasoto");
    }

    #[actix_rt::test]
    async fn wrong_credentials_are_unauthorized() {
        let state = test_state();
        let app = test::init_service(
            App::new().app_data(Data::new(state.clone())).service(login),
        )
        .await;
        register(&state, "ricasoto", "salainen");

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "username": "ricasoto", "password": "wrong" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid username or password");
    }
}
