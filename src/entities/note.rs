//! Note entity - a free-form note with pinning and a display color.
//!
//! The pin flag is a real boolean on the model; the SQLite adapter stores it
//! as an integer, and that coercion never leaks past the storage layer.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Note database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notes")]
pub struct Model {
    /// Unique identifier for the note
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user this note belongs to
    pub user_id: String,
    /// Note title (may be empty when content is present)
    pub title: String,
    /// Note body (may be empty when a title is present)
    pub content: String,
    /// Optional display color token
    pub color: Option<String>,
    /// Pinned notes always sort before unpinned ones
    pub is_pinned: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
