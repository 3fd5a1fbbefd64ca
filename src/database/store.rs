use std::fmt::Display;

use crate::database::models::{blog::BlogRecord, comment::CommentRecord, user::UserRecord};

/// Failure reported by the storage collaborator. Maps to a 500 at the
/// request boundary and is logged there.
#[derive(Debug)]
pub struct StoreError(pub String);

impl Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;

/// Boundary to the record store. The repository operations in
/// `database::models` receive a handle to this trait explicitly instead of
/// reaching for a process-wide connection.
///
/// Replace operations return `false` when no record with the given id
/// exists, `true` when the record was overwritten. Reads offer
/// read-after-write consistency per record.
pub trait Store: Send + Sync {
    fn insert_user(&self, user: UserRecord) -> StoreResult<()>;
    fn user(&self, id: &str) -> StoreResult<Option<UserRecord>>;
    fn user_by_username(&self, username: &str) -> StoreResult<Option<UserRecord>>;
    fn users(&self) -> StoreResult<Vec<UserRecord>>;
    fn replace_user(&self, user: UserRecord) -> StoreResult<bool>;
    fn remove_user(&self, id: &str) -> StoreResult<bool>;

    fn insert_blog(&self, blog: BlogRecord) -> StoreResult<()>;
    fn blog(&self, id: &str) -> StoreResult<Option<BlogRecord>>;
    fn blogs(&self) -> StoreResult<Vec<BlogRecord>>;
    fn replace_blog(&self, blog: BlogRecord) -> StoreResult<bool>;
    fn remove_blog(&self, id: &str) -> StoreResult<bool>;

    fn insert_comment(&self, comment: CommentRecord) -> StoreResult<()>;
    fn comment(&self, id: &str) -> StoreResult<Option<CommentRecord>>;
}
