use actix_web::{
    delete, get, post, put,
    web::{self, Data},
    HttpResponse,
};

use crate::{
    app::{AppError, AppState},
    auth::{self, NewUser},
    database::models::user::{UserPatch, UserRecord},
    routes::parse_id,
};

/// Pipe for listing every user
/// - url: `{domain}/users`
///
/// # Response
/// ## Ok
/// - json array of users, each with its blog set resolved to summaries
#[get("/users")]
pub async fn list_users(app_state: Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = UserRecord::list(app_state.store.as_ref())?;

    Ok(HttpResponse::Ok().json(users))
}

/// Pipe for fetching a single user
/// - url: `{domain}/users/{id}`
///
/// # Response
/// ## Ok
/// - json user with resolved blog summaries
/// ## Error
/// - Bad request (malformed id)
/// - Not found
#[get("/users/{id}")]
pub async fn get_user(
    path: web::Path<String>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path)?;
    let store = app_state.store.as_ref();

    let user = UserRecord::find(store, &id)?;
    Ok(HttpResponse::Ok().json(user.detail(store)?))
}

/// Pipe for registering a user
/// - url: `{domain}/users`
///
/// # HTTP request requirements
/// ## body
/// - json object with `username`, `name` and `password` keys
/// - `username` and `password` must be at least 3 characters long
///
/// # Response
/// ## Created
/// - the new user, password hash excluded
/// ## Error
/// - Bad request (validation failure or taken username)
#[post("/users")]
pub async fn create_user(
    input: web::Json<NewUser>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user = auth::register(app_state.store.as_ref(), input.into_inner())?;

    Ok(HttpResponse::Created().json(user))
}

/// Pipe for updating a user's username or display name.
/// No auth in this design; an acknowledged gap carried over as documented.
#[put("/users/{id}")]
pub async fn update_user(
    path: web::Path<String>,
    input: web::Json<UserPatch>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path)?;

    let detail = UserRecord::update(app_state.store.as_ref(), &id, input.into_inner())?;
    Ok(HttpResponse::Ok().json(detail))
}

/// Pipe for deleting a user. Owned blogs are not cascaded.
/// No auth in this design; an acknowledged gap carried over as documented.
#[delete("/users/{id}")]
pub async fn delete_user(
    path: web::Path<String>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path)?;

    UserRecord::delete(app_state.store.as_ref(), &id)?;
    Ok(HttpResponse::NoContent().finish())
}
