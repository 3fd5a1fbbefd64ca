pub mod blog;
pub mod comment;
pub mod login;
pub mod user;

use uuid::Uuid;

use crate::app::AppError;

/// Path ids must be well-formed before they are looked up; a malformed id is
/// a 400, a well-formed but absent one a 404.
pub fn parse_id(raw: &str) -> Result<String, AppError> {
    let id = Uuid::parse_str(raw).map_err(|_| AppError::InvalidReference)?;
    Ok(id.to_string())
}
