use std::sync::RwLock;

use crate::database::models::{blog::BlogRecord, comment::CommentRecord, user::UserRecord};
use crate::database::store::{Store, StoreError, StoreResult};

/// In-process record store. Collections keep insertion order so listings
/// stay deterministic. Every lock acquisition surfaces poisoning as a
/// `StoreError` instead of panicking inside a request.
pub struct MemStore {
    users: RwLock<Vec<UserRecord>>,
    blogs: RwLock<Vec<BlogRecord>>,
    comments: RwLock<Vec<CommentRecord>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            blogs: RwLock::new(Vec::new()),
            comments: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> StoreError {
    StoreError(String::from("store lock poisoned"))
}

impl Store for MemStore {
    fn insert_user(&self, user: UserRecord) -> StoreResult<()> {
        self.users.write().map_err(|_| poisoned())?.push(user);
        Ok(())
    }

    fn user(&self, id: &str) -> StoreResult<Option<UserRecord>> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    fn user_by_username(&self, username: &str) -> StoreResult<Option<UserRecord>> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.iter().find(|user| user.username == username).cloned())
    }

    fn users(&self) -> StoreResult<Vec<UserRecord>> {
        Ok(self.users.read().map_err(|_| poisoned())?.clone())
    }

    fn replace_user(&self, user: UserRecord) -> StoreResult<bool> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        match users.iter_mut().find(|existing| existing.id == user.id) {
            Some(existing) => {
                *existing = user;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove_user(&self, id: &str) -> StoreResult<bool> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        let before = users.len();
        users.retain(|user| user.id != id);
        Ok(users.len() < before)
    }

    fn insert_blog(&self, blog: BlogRecord) -> StoreResult<()> {
        self.blogs.write().map_err(|_| poisoned())?.push(blog);
        Ok(())
    }

    fn blog(&self, id: &str) -> StoreResult<Option<BlogRecord>> {
        let blogs = self.blogs.read().map_err(|_| poisoned())?;
        Ok(blogs.iter().find(|blog| blog.id == id).cloned())
    }

    fn blogs(&self) -> StoreResult<Vec<BlogRecord>> {
        Ok(self.blogs.read().map_err(|_| poisoned())?.clone())
    }

    fn replace_blog(&self, blog: BlogRecord) -> StoreResult<bool> {
        let mut blogs = self.blogs.write().map_err(|_| poisoned())?;
        match blogs.iter_mut().find(|existing| existing.id == blog.id) {
            Some(existing) => {
                *existing = blog;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove_blog(&self, id: &str) -> StoreResult<bool> {
        let mut blogs = self.blogs.write().map_err(|_| poisoned())?;
        let before = blogs.len();
        blogs.retain(|blog| blog.id != id);
        Ok(blogs.len() < before)
    }

    fn insert_comment(&self, comment: CommentRecord) -> StoreResult<()> {
        self.comments.write().map_err(|_| poisoned())?.push(comment);
        Ok(())
    }

    fn comment(&self, id: &str) -> StoreResult<Option<CommentRecord>> {
        let comments = self.comments.read().map_err(|_| poisoned())?;
        Ok(comments.iter().find(|comment| comment.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_reports_missing_records() {
        let store = MemStore::new();
        let user = UserRecord::build("ghost", "Ghost", "hash");

        assert!(!store.replace_user(user.clone()).unwrap());

        store.insert_user(user.clone()).unwrap();
        assert!(store.replace_user(user).unwrap());
    }

    #[test]
    fn listings_preserve_insertion_order() {
        let store = MemStore::new();
        for name in ["first", "second", "third"] {
            store
                .insert_user(UserRecord::build(name, name, "hash"))
                .unwrap();
        }

        let usernames: Vec<String> = store
            .users()
            .unwrap()
            .into_iter()
            .map(|user| user.username)
            .collect();
        assert_eq!(usernames, vec!["first", "second", "third"]);
    }
}
