use std::fmt;

use super::Timestamps;
use crate::error::DomainError;

/// Identifier assigned by storage on insert.
pub type PostId = i64;

/// Post entity - a single bulletin board entry.
///
/// `password` holds whatever the configured
/// [`PasswordService`](crate::ports::PasswordService) produced on store, the raw
/// text under the default plaintext policy.
#[derive(Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub password: String,
    pub timestamps: Timestamps,
}

impl Post {
    /// Materialize a post from an insert payload and its assigned id.
    pub fn from_new(id: PostId, new: NewPost) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            author: new.author,
            password: new.password,
            timestamps: new.timestamps,
        }
    }

    /// Replace every mutable field and record the modification.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.author = draft.author;
        self.password = draft.password;
        self.timestamps.touch();
    }
}

impl fmt::Debug for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Post")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("content", &self.content)
            .field("author", &self.author)
            .field("password", &"<redacted>")
            .field("timestamps", &self.timestamps)
            .finish()
    }
}

/// The four caller-supplied fields of a post, used by both create and update.
#[derive(Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub password: String,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            password: password.into(),
        }
    }

    /// Every field must contain at least one non-whitespace character.
    pub fn validate(&self) -> Result<(), DomainError> {
        let missing: Vec<&str> = [
            ("title", &self.title),
            ("content", &self.content),
            ("author", &self.author),
            ("password", &self.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "must not be empty: {}",
                missing.join(", ")
            )))
        }
    }
}

impl fmt::Debug for PostDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostDraft")
            .field("title", &self.title)
            .field("content", &self.content)
            .field("author", &self.author)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Insert payload: a post that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub password: String,
    pub timestamps: Timestamps,
}

impl NewPost {
    /// Create a new post stamped with the current time.
    pub fn new(draft: PostDraft) -> Self {
        Self {
            title: draft.title,
            content: draft.content,
            author: draft.author,
            password: draft.password,
            timestamps: Timestamps::now(),
        }
    }
}
