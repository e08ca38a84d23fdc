use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::domain::{NewPost, Post, PostDraft, PostId};
use crate::error::{DomainError, RepoError};
use crate::ports::{PasswordService, PostRepository};

/// Post lifecycle service.
///
/// Mutations are gated on the post's password: the check runs against the
/// stored post before anything is written, so a rejected update or delete
/// leaves storage untouched.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, passwords: Arc<dyn PasswordService>) -> Self {
        Self { posts, passwords }
    }

    /// All posts, most recently modified first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all_by_modified_desc().await?)
    }

    #[instrument(skip(self, draft), fields(author = %draft.author))]
    pub async fn create(&self, draft: PostDraft) -> Result<Post, DomainError> {
        draft.validate()?;
        let password = self.passwords.hash(&draft.password)?;

        let post = self
            .posts
            .insert(NewPost::new(PostDraft { password, ..draft }))
            .await?;

        info!(post_id = post.id, "post_created");
        Ok(post)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: PostId) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })
    }

    /// Replace all four mutable fields of a post.
    #[instrument(skip(self, draft))]
    pub async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, DomainError> {
        draft.validate()?;
        let mut post = self.get(id).await?;
        self.authorize(&post, &draft.password)?;

        let password = self.passwords.hash(&draft.password)?;
        post.apply(PostDraft { password, ..draft });

        let post = self
            .posts
            .save(post)
            .await
            .map_err(|e| missing_as_not_found(e, id))?;

        info!(post_id = id, "post_updated");
        Ok(post)
    }

    /// Permanently remove a post. Returns `true` once it is gone.
    #[instrument(skip(self, password))]
    pub async fn delete(&self, id: PostId, password: &str) -> Result<bool, DomainError> {
        let post = self.get(id).await?;
        self.authorize(&post, password)?;

        self.posts
            .delete(id)
            .await
            .map_err(|e| missing_as_not_found(e, id))?;

        info!(post_id = id, "post_deleted");
        Ok(true)
    }

    fn authorize(&self, post: &Post, password: &str) -> Result<(), DomainError> {
        if self.passwords.verify(password, &post.password)? {
            Ok(())
        } else {
            warn!(post_id = post.id, "password_mismatch");
            Err(DomainError::InvalidPassword)
        }
    }
}

/// The row vanished between lookup and write.
fn missing_as_not_found(err: RepoError, id: PostId) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::NotFound { id },
        other => DomainError::Storage(other),
    }
}
