use chrono::NaiveDate;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DbConn, MockDatabase,
    MockExecResult, Schema,
};

use quill_core::domain::{Post, PostDraft};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};

use crate::database::entity::post;
use crate::database::post_repo::SeaOrmPostRepository;

fn model(id: i32, title: &str) -> post::Model {
    post::Model {
        id,
        title: title.to_owned(),
        content: "Content".to_owned(),
        created_at: NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_micro_opt(12, 0, 0, 250_000)
            .unwrap(),
    }
}

fn draft(title: &str, content: &str) -> PostDraft {
    PostDraft::parse(Some(title.to_owned()), Some(content.to_owned())).unwrap()
}

async fn sqlite_memory() -> DbConn {
    // A single connection: every pooled connection would get its own empty database.
    let opts = ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .min_connections(1)
        .to_owned();
    let db = Database::connect(opts).await.unwrap();

    let backend = db.get_database_backend();
    let create = Schema::new(backend).create_table_from_entity(post::Entity);
    db.execute(backend.build(&create)).await.unwrap();
    db
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(1, "Test Post")]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(1).await.unwrap();

    let post = result.expect("post should be found");
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, 1);
}

#[tokio::test]
async fn test_find_all_maps_every_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(1, "first"), model(2, "second")]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);
    let posts: Vec<Post> = repo.find_all().await.unwrap();

    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second"]);
}

#[tokio::test]
async fn test_delete_without_matching_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);
    let err = BaseRepository::<Post, i32>::delete(&repo, 9).await.unwrap_err();

    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_update_without_matching_row_returns_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);
    let result = repo.update(3, draft("Hi", "there")).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_sqlite_post_lifecycle() {
    let repo = SeaOrmPostRepository::new(sqlite_memory().await);

    let first = repo
        .insert(draft("Hello", "World").into_new_post())
        .await
        .unwrap();
    let second = repo
        .insert(draft("Second", "Post").into_new_post())
        .await
        .unwrap();
    assert_eq!((first.id, second.id), (1, 2));

    let fetched: Option<Post> = repo.find_by_id(first.id).await.unwrap();
    assert_eq!(fetched.as_ref(), Some(&first));

    let updated = repo
        .update(first.id, draft("Hi", "World2"))
        .await
        .unwrap()
        .expect("post exists");
    assert_eq!(updated.title, "Hi");
    assert_eq!(updated.content, "World2");
    assert_eq!(updated.created_at, first.created_at);

    assert!(repo.update(999, draft("x", "y")).await.unwrap().is_none());

    BaseRepository::<Post, i32>::delete(&repo, first.id)
        .await
        .unwrap();
    let remaining: Vec<Post> = repo.find_all().await.unwrap();
    assert_eq!(remaining, vec![second]);

    let missing: Option<Post> = repo.find_by_id(first.id).await.unwrap();
    assert!(missing.is_none());
}
