use actix_web::{
    delete, get, post, put,
    web::{self, Data},
    HttpResponse,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::{
    app::{AppError, AppState},
    database::models::blog::{BlogRecord, BlogReplace, NewBlog},
    routes::parse_id,
};

/// Pipe for listing every blog, each with its owner summary resolved
/// - url: `{domain}/blogs`
#[get("/blogs")]
pub async fn list_blogs(app_state: Data<AppState>) -> Result<HttpResponse, AppError> {
    let blogs = BlogRecord::list(app_state.store.as_ref())?;

    Ok(HttpResponse::Ok().json(blogs))
}

/// Pipe for fetching a single blog with owner and comments resolved
/// - url: `{domain}/blogs/{id}`
///
/// # Response
/// ## Ok
/// ## Error
/// - Bad request (malformed id)
/// - Not found (well-formed id, absent record)
#[get("/blogs/{id}")]
pub async fn get_blog(
    path: web::Path<String>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path)?;
    let store = app_state.store.as_ref();

    let blog = BlogRecord::find(store, &id)?;
    Ok(HttpResponse::Ok().json(blog.detail(store)?))
}

/// Pipe for creating a blog owned by the authenticated caller
/// - url: `{domain}/blogs`
///
/// # HTTP request requirements
/// ## header
/// - bearer token from `/login`
/// ## body
/// - json object with `title`, `author`, `url` and optional `likes`
///
/// # Response
/// ## Created
/// - the stored record; its id also lands in the owner's blog set
/// ## Error
/// - Bad request (missing title or url, negative likes)
/// - Unauthorized (token missing or invalid)
#[post("/blogs")]
pub async fn create_blog(
    auth: Option<BearerAuth>,
    input: web::Json<NewBlog>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let credentials =
        auth.ok_or_else(|| AppError::Authentication(String::from("token missing")))?;
    let identity = app_state.keys.verify(credentials.token())?;

    let blog = BlogRecord::create(app_state.store.as_ref(), input.into_inner(), &identity.id)?;
    Ok(HttpResponse::Created().json(blog))
}

/// Pipe for replacing a blog's stored fields
/// - url: `{domain}/blogs/{id}`
///
/// Full-document replace semantics: every provided field overwrites. The
/// response carries the new state with the owner re-resolved.
#[put("/blogs/{id}")]
pub async fn update_blog(
    path: web::Path<String>,
    input: web::Json<BlogReplace>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path)?;

    let listing = BlogRecord::replace(app_state.store.as_ref(), &id, input.into_inner())?;
    Ok(HttpResponse::Ok().json(listing))
}

/// Pipe for deleting a blog as its owner
/// - url: `{domain}/blogs/{id}`
///
/// # Response
/// ## No content
/// ## Error
/// - Bad request when no token accompanies the request (documented
///   asymmetry with the unauthorized case below, kept deliberately)
/// - Unauthorized when the token is invalid or the caller is not the owner
/// - Not found
#[delete("/blogs/{id}")]
pub async fn delete_blog(
    path: web::Path<String>,
    auth: Option<BearerAuth>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let credentials = auth.ok_or_else(|| AppError::Validation(String::from("token missing")))?;
    let identity = app_state.keys.verify(credentials.token())?;
    let id = parse_id(&path)?;

    BlogRecord::delete(app_state.store.as_ref(), &id, &identity.id)?;
    Ok(HttpResponse::NoContent().finish())
}
