//! SeaORM post repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbErr, NotSet, Set, Unchanged};

use quill_core::domain::{NewPost, Post, PostDraft, PostId};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::base::{SeaOrmBaseRepository, repo_error};
use super::entity::post::{self, Entity as PostEntity};

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(new_post)
            .insert(&self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(post_id = model.id, "Inserted post");
        Ok(model.into())
    }

    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Option<Post>, RepoError> {
        let (title, content) = draft.into_parts();
        let changes = post::ActiveModel {
            id: Unchanged(id),
            title: Set(title),
            content: Set(content),
            created_at: NotSet,
        };

        match changes.update(&self.db).await {
            Ok(model) => {
                tracing::debug!(post_id = id, "Updated post");
                Ok(Some(model.into()))
            }
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(repo_error(e)),
        }
    }
}
