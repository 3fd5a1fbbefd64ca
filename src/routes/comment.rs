use actix_web::{
    post,
    web::{self, Data},
    HttpResponse,
};

use crate::{
    app::{AppError, AppState},
    database::models::comment::{CommentRecord, NewComment},
    routes::parse_id,
};

/// Pipe for commenting on a blog. Comments carry no ownership; any caller
/// may leave one.
/// - url: `{domain}/blogs/{id}/comments`
///
/// # HTTP request requirements
/// ## body
/// - json object with a non-empty `content` key
///
/// # Response
/// ## Created
/// - the blog with its comment set resolved
/// ## Error
/// - Bad request (empty content or malformed id)
/// - Not found (blog absent)
#[post("/blogs/{id}/comments")]
pub async fn create_comment(
    path: web::Path<String>,
    input: web::Json<NewComment>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let blog_id = parse_id(&path)?;

    let detail = CommentRecord::create(app_state.store.as_ref(), &blog_id, input.into_inner())?;
    Ok(HttpResponse::Created().json(detail))
}
