use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::AppError;
use crate::database::models::blog::{BlogDetail, BlogRecord};
use crate::database::store::Store;

/// Stored shape of a comment. Carries no ownership, only the parent blog
/// reference; it belongs to exactly the blog it was created against.
#[derive(Debug, Clone, Serialize)]
pub struct CommentRecord {
    pub id: String,
    pub content: String,
    pub blog: String,
}

#[derive(Debug, Deserialize)]
pub struct NewComment {
    pub content: Option<String>,
}

impl CommentRecord {
    /** Creates a comment against an existing blog, appends its id to the
    blog's comment set and returns the blog with comments resolved. The two
    writes are separate steps; a failure on either reports the whole
    operation failed. */
    pub fn create(
        store: &dyn Store,
        blog_id: &str,
        input: NewComment,
    ) -> Result<BlogDetail, AppError> {
        let content = match input.content {
            Some(content) if !content.trim().is_empty() => content,
            _ => {
                return Err(AppError::Validation(String::from("content is required")));
            }
        };

        let mut blog = BlogRecord::find(store, blog_id)?;

        let comment = CommentRecord {
            id: Uuid::new_v4().to_string(),
            content,
            blog: blog.id.clone(),
        };
        store.insert_comment(comment.clone())?;

        blog.comments.push(comment.id.clone());
        if !store.replace_blog(blog.clone())? {
            return Err(AppError::Storage(String::from(
                "blog record vanished while linking comment",
            )));
        }

        blog.detail(store)
    }
}
