//! Post resource service - the five post operations.

use std::sync::Arc;

use crate::domain::{Post, PostDraft, PostId};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

const ENTITY: &str = "Post";

/// Post resource service.
///
/// Holds only the injected repository, so it can be cloned freely into every
/// worker. Each operation issues a single repository call.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// All posts in insertion order.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.find_all().await.map_err(storage)
    }

    pub async fn create(&self, draft: PostDraft) -> Result<Post, DomainError> {
        let post = self
            .repo
            .insert(draft.into_new_post())
            .await
            .map_err(storage)?;
        tracing::info!(post_id = post.id, "Post created");
        Ok(post)
    }

    pub async fn get(&self, id: PostId) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage)?
            .ok_or_else(|| not_found(id))
    }

    /// Replace title and content; `id` and `created_at` are kept.
    pub async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, DomainError> {
        let post = self
            .repo
            .update(id, draft)
            .await
            .map_err(storage)?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(post_id = id, "Post updated");
        Ok(post)
    }

    pub async fn delete(&self, id: PostId) -> Result<(), DomainError> {
        match self.repo.delete(id).await {
            Ok(()) => {
                tracing::info!(post_id = id, "Post deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(not_found(id)),
            Err(e) => Err(storage(e)),
        }
    }
}

fn not_found(id: PostId) -> DomainError {
    DomainError::NotFound {
        entity_type: ENTITY,
        id: id.into(),
    }
}

fn storage(err: RepoError) -> DomainError {
    tracing::error!(error = %err, "Post repository failure");
    DomainError::Internal(err.to_string())
}
