//! Domain entities - the core business objects.

mod post;
mod timestamps;

pub use post::{NewPost, Post, PostDraft, PostId};
pub use timestamps::Timestamps;
