use board_core::domain::{NewPost, Post, PostDraft};
use board_core::error::RepoError;
use board_core::ports::{BaseRepository, PostRepository};
use chrono::{Duration, Utc};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn row(id: i64, title: &str, age_minutes: i64) -> post::Model {
    let modified = Utc::now() - Duration::minutes(age_minutes);
    post::Model {
        id,
        title: title.to_owned(),
        content: "Content".to_owned(),
        author: "alice".to_owned(),
        password: "pw1".to_owned(),
        created_at: (modified - Duration::hours(1)).into(),
        modified_at: modified.into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row(1, "Test Post", 0)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let repo: &dyn PostRepository = &repo;

    let result = repo.find_by_id(1).await.unwrap();

    let post = result.expect("post should be found");
    assert_eq!(post.id, 1);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.password, "pw1");
    assert!(post.timestamps.modified_at > post.timestamps.created_at);
}

#[tokio::test]
async fn test_find_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let repo: &dyn PostRepository = &repo;

    assert!(repo.find_by_id(5).await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_returns_generated_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row(7, "Hello", 0)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let repo: &dyn PostRepository = &repo;

    let created = repo
        .insert(NewPost::new(PostDraft::new("Hello", "Content", "alice", "pw1")))
        .await
        .unwrap();

    assert_eq!(created.id, 7);
    assert_eq!(created.title, "Hello");
}

#[tokio::test]
async fn test_list_maps_rows_in_query_order() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row(2, "newer", 1), row(1, "older", 30)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let repo: &dyn PostRepository = &repo;

    let ids: Vec<i64> = repo
        .find_all_by_modified_desc()
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn test_save_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let repo: &dyn PostRepository = &repo;
    let post: Post = row(3, "gone", 0).into();

    assert!(matches!(repo.save(post).await, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_reports_missing_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let repo: &dyn PostRepository = &repo;

    assert!(repo.delete(1).await.is_ok());
    assert!(matches!(repo.delete(1).await, Err(RepoError::NotFound)));
}
