use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::AppError;
use crate::database::models::blog::BlogSummary;
use crate::database::store::Store;

/// Stored shape of a user. The blog set holds the ids of every blog this
/// user owns; `blog::BlogRecord::create` appends to it so the back-reference
/// always agrees with `Blog.user`.
#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub blogs: Vec<String>,
}

/// Owner data embedded into resolved blog views
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    pub name: String,
}

impl From<&UserRecord> for UserSummary {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
        }
    }
}

/// User with the blog set resolved to summaries
#[derive(Debug, Serialize)]
pub struct UserDetail {
    pub id: String,
    pub username: String,
    pub name: String,
    pub blogs: Vec<BlogSummary>,
}

#[derive(Debug, Deserialize)]
pub struct UserPatch {
    pub username: Option<String>,
    pub name: Option<String>,
}

impl UserRecord {
    pub fn build(username: &str, name: &str, password_hash: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            name: name.to_string(),
            password_hash: password_hash.to_string(),
            blogs: Vec::new(),
        }
    }

    /** Persists a new user with an empty blog set. The username must not be
    taken; the check-then-insert pair is not atomic against a concurrent
    duplicate registration. */
    pub fn create(
        store: &dyn Store,
        username: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<UserRecord, AppError> {
        if store.user_by_username(username)?.is_some() {
            return Err(AppError::Conflict(String::from(
                "expected `username` to be unique",
            )));
        }

        let user = UserRecord::build(username, name, password_hash);
        store.insert_user(user.clone())?;

        Ok(user)
    }

    pub fn find(store: &dyn Store, id: &str) -> Result<UserRecord, AppError> {
        store.user(id)?.ok_or(AppError::NotFound)
    }

    /** Returns every user with their blog sets resolved to summaries */
    pub fn list(store: &dyn Store) -> Result<Vec<UserDetail>, AppError> {
        let mut details = Vec::new();
        for user in store.users()? {
            details.push(user.detail(store)?);
        }

        Ok(details)
    }

    /** Applies a patch to an existing user. A changed username is re-checked
    against the uniqueness invariant before the write. */
    pub fn update(store: &dyn Store, id: &str, patch: UserPatch) -> Result<UserDetail, AppError> {
        let mut user = UserRecord::find(store, id)?;

        if let Some(username) = patch.username {
            if username.chars().count() < 3 {
                return Err(AppError::Validation(String::from(
                    "username must be at least 3 characters long",
                )));
            }
            if username != user.username && store.user_by_username(&username)?.is_some() {
                return Err(AppError::Conflict(String::from(
                    "expected `username` to be unique",
                )));
            }
            user.username = username;
        }
        if let Some(name) = patch.name {
            user.name = name;
        }

        if !store.replace_user(user.clone())? {
            return Err(AppError::NotFound);
        }

        user.detail(store)
    }

    /** Removes a user. Owned blogs are not cascaded; their owner reference
    dangles and resolves to a null summary from then on. */
    pub fn delete(store: &dyn Store, id: &str) -> Result<(), AppError> {
        store.remove_user(id)?;
        Ok(())
    }

    /// Resolved view of this user. Dangling blog ids are skipped rather than
    /// failing the whole view.
    pub fn detail(&self, store: &dyn Store) -> Result<UserDetail, AppError> {
        let mut blogs = Vec::new();
        for blog_id in &self.blogs {
            if let Some(blog) = store.blog(blog_id)? {
                blogs.push(blog.summary());
            }
        }

        Ok(UserDetail {
            id: self.id.clone(),
            username: self.username.clone(),
            name: self.name.clone(),
            blogs,
        })
    }
}
