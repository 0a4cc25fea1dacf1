use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostDraft, PostId};
use crate::error::RepoError;

/// Generic repository trait defining the entity-agnostic CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Fetch every entity, ordered by primary key.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID.
    ///
    /// Returns [`RepoError::NotFound`] when no row matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// Insert a post; the datastore assigns its id.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Overwrite title and content of an existing post.
    ///
    /// `Ok(None)` means no post has that id. `id` and `created_at` are never written.
    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Option<Post>, RepoError>;
}
