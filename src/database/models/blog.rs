use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::AppError;
use crate::database::models::comment::CommentRecord;
use crate::database::models::user::UserSummary;
use crate::database::store::Store;

/// Stored shape of a blog. `user` is the owner reference set at creation;
/// `comments` keeps comment ids in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct BlogRecord {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user: String,
    pub comments: Vec<String>,
}

/// Blog data embedded into resolved user views
#[derive(Debug, Clone, Serialize)]
pub struct BlogSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
}

/// Blog with the owner resolved; comments stay as ids
#[derive(Debug, Serialize)]
pub struct BlogListing {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user: Option<UserSummary>,
    pub comments: Vec<String>,
}

/// Blog with both the owner and the comment set resolved
#[derive(Debug, Serialize)]
pub struct BlogDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user: Option<UserSummary>,
    pub comments: Vec<CommentRecord>,
}

#[derive(Debug, Deserialize)]
pub struct NewBlog {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

/// Full-document replacement body; provided fields overwrite
#[derive(Debug, Deserialize)]
pub struct BlogReplace {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
    pub user: Option<String>,
}

fn required(field: Option<String>, name: &str) -> Result<String, AppError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::Validation(format!("{} is required", name))),
    }
}

fn non_negative(likes: i64) -> Result<i64, AppError> {
    if likes < 0 {
        return Err(AppError::Validation(String::from(
            "likes must be a non-negative integer",
        )));
    }
    Ok(likes)
}

impl BlogRecord {
    /** Persists a new blog owned by `owner_id` and appends its id to the
    owner's blog set. The record insert and the back-reference write are two
    steps; when the second fails the operation is reported failed. */
    pub fn create(
        store: &dyn Store,
        input: NewBlog,
        owner_id: &str,
    ) -> Result<BlogRecord, AppError> {
        let title = required(input.title, "title")?;
        let url = required(input.url, "url")?;
        let likes = non_negative(input.likes.unwrap_or(0))?;

        let mut owner = store.user(owner_id)?.ok_or(AppError::NotFound)?;

        let blog = BlogRecord {
            id: Uuid::new_v4().to_string(),
            title,
            author: input.author.unwrap_or_default(),
            url,
            likes,
            user: owner.id.clone(),
            comments: Vec::new(),
        };
        store.insert_blog(blog.clone())?;

        owner.blogs.push(blog.id.clone());
        if !store.replace_user(owner)? {
            return Err(AppError::Storage(String::from(
                "owner record vanished while linking blog",
            )));
        }

        Ok(blog)
    }

    pub fn find(store: &dyn Store, id: &str) -> Result<BlogRecord, AppError> {
        store.blog(id)?.ok_or(AppError::NotFound)
    }

    /** Returns every blog with its owner summary resolved */
    pub fn list(store: &dyn Store) -> Result<Vec<BlogListing>, AppError> {
        let mut listings = Vec::new();
        for blog in store.blogs()? {
            listings.push(blog.listing(store)?);
        }

        Ok(listings)
    }

    /** Overwrites an existing blog with the provided fields and returns the
    new state with the owner re-resolved */
    pub fn replace(
        store: &dyn Store,
        id: &str,
        input: BlogReplace,
    ) -> Result<BlogListing, AppError> {
        let mut blog = BlogRecord::find(store, id)?;

        if let Some(title) = input.title {
            blog.title = required(Some(title), "title")?;
        }
        if let Some(url) = input.url {
            blog.url = required(Some(url), "url")?;
        }
        if let Some(author) = input.author {
            blog.author = author;
        }
        if let Some(likes) = input.likes {
            blog.likes = non_negative(likes)?;
        }
        if let Some(user) = input.user {
            blog.user = user;
        }

        if !store.replace_blog(blog.clone())? {
            return Err(AppError::NotFound);
        }

        blog.listing(store)
    }

    /** Removes a blog on behalf of `requester_id`. Only the owner may
    delete; comments referencing the blog are left behind. */
    pub fn delete(store: &dyn Store, id: &str, requester_id: &str) -> Result<(), AppError> {
        let blog = BlogRecord::find(store, id)?;

        if blog.user != requester_id {
            return Err(AppError::Authorization(String::from(
                "only owner of blog is able to delete",
            )));
        }

        store.remove_blog(id)?;
        Ok(())
    }

    pub fn summary(&self) -> BlogSummary {
        BlogSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            url: self.url.clone(),
            likes: self.likes,
        }
    }

    /// Owner resolved, comments left as ids. A deleted owner resolves to
    /// `None` rather than failing the view.
    pub fn listing(&self, store: &dyn Store) -> Result<BlogListing, AppError> {
        let user = store.user(&self.user)?.map(|owner| UserSummary::from(&owner));

        Ok(BlogListing {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            url: self.url.clone(),
            likes: self.likes,
            user,
            comments: self.comments.clone(),
        })
    }

    /// Owner and comment set resolved. Dangling comment ids are skipped.
    pub fn detail(&self, store: &dyn Store) -> Result<BlogDetail, AppError> {
        let user = store.user(&self.user)?.map(|owner| UserSummary::from(&owner));

        let mut comments = Vec::new();
        for comment_id in &self.comments {
            if let Some(comment) = store.comment(comment_id)? {
                comments.push(comment);
            }
        }

        Ok(BlogDetail {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            url: self.url.clone(),
            likes: self.likes,
            user,
            comments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemStore;
    use crate::database::models::user::UserRecord;

    fn new_blog(title: &str, url: &str, likes: Option<i64>) -> NewBlog {
        NewBlog {
            title: Some(title.to_string()),
            author: Some(String::from("Ryan Holiday")),
            url: Some(url.to_string()),
            likes,
        }
    }

    #[test]
    fn creating_a_blog_links_it_to_its_owner() {
        let store = MemStore::new();
        let owner = UserRecord::create(&store, "ricasoto", "Ricardo Soto", "hash").unwrap();

        let blog =
            BlogRecord::create(&store, new_blog("Daily Stoic", "url", Some(438270)), &owner.id)
                .unwrap();

        let owner = store.user(&owner.id).unwrap().unwrap();
        assert!(owner.blogs.contains(&blog.id));
        assert_eq!(blog.user, owner.id);
    }

    #[test]
    fn likes_normalize_to_zero_when_absent() {
        let store = MemStore::new();
        let owner = UserRecord::create(&store, "ricasoto", "Ricardo Soto", "hash").unwrap();

        let blog =
            BlogRecord::create(&store, new_blog("No likes blog", "url", None), &owner.id).unwrap();
        assert_eq!(blog.likes, 0);
    }

    #[test]
    fn creation_requires_title_and_url() {
        let store = MemStore::new();
        let owner = UserRecord::create(&store, "ricasoto", "Ricardo Soto", "hash").unwrap();

        let missing_title = NewBlog {
            title: None,
            author: Some(String::from("Jeff Barcenas")),
            url: Some(String::from("url")),
            likes: Some(87944),
        };
        assert!(matches!(
            BlogRecord::create(&store, missing_title, &owner.id),
            Err(AppError::Validation(_))
        ));

        let missing_url = NewBlog {
            title: Some(String::from("No url blog")),
            author: Some(String::from("Jeff Barcenas")),
            url: None,
            likes: Some(87944),
        };
        assert!(matches!(
            BlogRecord::create(&store, missing_url, &owner.id),
            Err(AppError::Validation(_))
        ));

        assert!(store.blogs().unwrap().is_empty());
    }

    #[test]
    fn only_the_owner_may_delete() {
        let store = MemStore::new();
        let owner = UserRecord::create(&store, "ricasoto", "Ricardo Soto", "hash").unwrap();
        let other = UserRecord::create(&store, "jbarcenas", "Jeff Barcenas", "hash").unwrap();
        let blog =
            BlogRecord::create(&store, new_blog("Daily Stoic", "url", None), &owner.id).unwrap();

        let result = BlogRecord::delete(&store, &blog.id, &other.id);
        assert!(matches!(result, Err(AppError::Authorization(_))));
        assert_eq!(store.blogs().unwrap().len(), 1);

        BlogRecord::delete(&store, &blog.id, &owner.id).unwrap();
        assert!(store.blogs().unwrap().is_empty());
    }

    #[test]
    fn deleted_owner_resolves_to_null_summary() {
        let store = MemStore::new();
        let owner = UserRecord::create(&store, "ricasoto", "Ricardo Soto", "hash").unwrap();
        let blog =
            BlogRecord::create(&store, new_blog("Daily Stoic", "url", None), &owner.id).unwrap();

        UserRecord::delete(&store, &owner.id).unwrap();

        let listing = blog.listing(&store).unwrap();
        assert!(listing.user.is_none());
    }

    #[test]
    fn replace_overwrites_provided_fields() {
        let store = MemStore::new();
        let owner = UserRecord::create(&store, "ricasoto", "Ricardo Soto", "hash").unwrap();
        let blog =
            BlogRecord::create(&store, new_blog("Daily Stoic", "url", Some(23)), &owner.id)
                .unwrap();

        let replacement = BlogReplace {
            title: Some(String::from("Update Testing")),
            author: None,
            url: None,
            likes: Some(24),
            user: None,
        };
        let updated = BlogRecord::replace(&store, &blog.id, replacement).unwrap();

        assert_eq!(updated.title, "Update Testing");
        assert_eq!(updated.likes, 24);
        assert_eq!(updated.url, "url");
        assert_eq!(store.blogs().unwrap().len(), 1);
    }
}
