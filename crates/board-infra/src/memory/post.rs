//! In-memory post repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use board_core::domain::{NewPost, Post, PostId};
use board_core::error::RepoError;
use board_core::ports::{BaseRepository, PostRepository};

struct Table {
    rows: BTreeMap<PostId, Post>,
    next_id: PostId,
}

/// Post table held in a `BTreeMap` behind an async `RwLock`.
///
/// Ids start at 1 and are never reused, matching an auto-increment column.
/// Data is lost on process restart.
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
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
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let row = table.rows.get_mut(&entity.id).ok_or(RepoError::NotFound)?;
        *row = entity.clone();
        Ok(entity)
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
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id += 1;

        let post = Post::from_new(id, post);
        table.rows.insert(id, post.clone());
        tracing::debug!(post_id = id, "Inserted post in memory");

        Ok(post)
    }

    async fn find_all_by_modified_desc(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;

        let mut posts: Vec<Post> = table.rows.values().cloned().collect();
        posts.sort_by(|a, b| {
            b.timestamps
                .modified_at
                .cmp(&a.timestamps.modified_at)
                .then(b.id.cmp(&a.id))
        });

        Ok(posts)
    }
}
