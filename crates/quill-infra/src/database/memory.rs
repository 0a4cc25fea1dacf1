//! In-memory post repository - used when the server is built without a
//! database, and by tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{NewPost, Post, PostDraft, PostId};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};

struct Table {
    rows: BTreeMap<PostId, Post>,
    last_id: PostId,
}

/// In-memory post table using a `BTreeMap` behind an async `RwLock`.
///
/// Ids start at 1 and are never reused, mirroring an auto-increment column.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepoError::Constraint("post id space exhausted".to_string()))?;
        table.last_id = id;

        let post = new_post.with_id(id);
        table.rows.insert(id, post.clone());
        Ok(post)
    }

    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Option<Post>, RepoError> {
        let mut table = self.table.write().await;
        let Some(post) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        let (title, content) = draft.into_parts();
        post.title = title;
        post.content = content;
        Ok(Some(post.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str) -> PostDraft {
        PostDraft::parse(Some(title.to_string()), Some(content.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_ids_are_sequential_and_not_reused() {
        let repo = InMemoryPostRepository::new();
        let first = repo.insert(draft("a", "1").into_new_post()).await.unwrap();
        let second = repo.insert(draft("b", "2").into_new_post()).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        repo.delete(second.id).await.unwrap();
        let third = repo.insert(draft("c", "3").into_new_post()).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryPostRepository::new();
        assert!(repo.update(1, draft("x", "y")).await.unwrap().is_none());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let err = repo.delete(5).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }
}
