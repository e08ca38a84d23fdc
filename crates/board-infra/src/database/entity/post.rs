//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use board_core::domain::{NewPost, Post, Timestamps};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: String,
    pub password: String,
    pub created_at: DateTimeWithTimeZone,
    pub modified_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author: model.author,
            password: model.password,
            timestamps: Timestamps {
                created_at: model.created_at.into(),
                modified_at: model.modified_at.into(),
            },
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel, for updates.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            content: Set(post.content),
            author: Set(post.author),
            password: Set(post.password),
            created_at: Set(post.timestamps.created_at.into()),
            modified_at: Set(post.timestamps.modified_at.into()),
        }
    }
}

/// Insert payload; the id is left to the sequence.
impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title),
            content: Set(post.content),
            author: Set(post.author),
            password: Set(post.password),
            created_at: Set(post.timestamps.created_at.into()),
            modified_at: Set(post.timestamps.modified_at.into()),
        }
    }
}
