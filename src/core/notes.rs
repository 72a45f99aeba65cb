//! Notes business logic - CRUD, pinning and ordering.

use sea_orm::{ActiveModelTrait, DatabaseConnection, Order, Set};

use crate::entities::{Note, NoteColumn, note};
use crate::errors::{Error, Result};
use crate::session::User;
use crate::store;

fn ensure_has_text(title: &str, content: &str) -> Result<()> {
    if title.trim().is_empty() && content.trim().is_empty() {
        return Err(Error::validation("a note needs a title or some content"));
    }
    Ok(())
}

/// Creates a note. A note must carry a title or some content; it starts
/// unpinned with no color.
pub async fn add_note(
    db: &DatabaseConnection,
    user: &User,
    title: String,
    content: String,
) -> Result<note::Model> {
    ensure_has_text(&title, &content)?;

    let note = note::ActiveModel {
        user_id: Set(user.id.clone()),
        title: Set(title),
        content: Set(content),
        color: Set(None),
        is_pinned: Set(false),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    note.insert(db).await.map_err(Into::into)
}

/// Rewrites a note's title and content.
pub async fn update_note(
    db: &DatabaseConnection,
    user: &User,
    note_id: i64,
    title: String,
    content: String,
) -> Result<note::Model> {
    ensure_has_text(&title, &content)?;

    let existing = store::fetch_owned::<Note>(db, &user.id, note_id).await?;
    let mut active: note::ActiveModel = existing.into();
    active.title = Set(title);
    active.content = Set(content);

    active.update(db).await.map_err(Into::into)
}

/// Flips a note's pinned flag.
pub async fn toggle_pin(db: &DatabaseConnection, user: &User, note_id: i64) -> Result<note::Model> {
    let existing = store::fetch_owned::<Note>(db, &user.id, note_id).await?;
    let pinned = !existing.is_pinned;
    let mut active: note::ActiveModel = existing.into();
    active.is_pinned = Set(pinned);

    active.update(db).await.map_err(Into::into)
}

/// Sets or clears a note's display color.
pub async fn set_color(
    db: &DatabaseConnection,
    user: &User,
    note_id: i64,
    color: Option<String>,
) -> Result<note::Model> {
    let existing = store::fetch_owned::<Note>(db, &user.id, note_id).await?;
    let mut active: note::ActiveModel = existing.into();
    active.color = Set(color);

    active.update(db).await.map_err(Into::into)
}

/// Deletes a note.
pub async fn delete_note(db: &DatabaseConnection, user: &User, note_id: i64) -> Result<()> {
    store::delete_owned::<Note>(db, &user.id, note_id).await
}

/// Lists a user's notes, newest first. Display code usually follows up with
/// [`sort_notes`] to float pinned notes to the front.
pub async fn list_notes(db: &DatabaseConnection, user: &User) -> Result<Vec<note::Model>> {
    store::list_for_user::<Note>(db, &user.id, NoteColumn::CreatedAt, Order::Desc, None).await
}

/// Pinned notes first, then unpinned; both groups newest first.
#[must_use]
pub fn sort_notes(notes: &[note::Model]) -> Vec<note::Model> {
    let mut sorted: Vec<note::Model> = notes.to_vec();
    sorted.sort_by(|a, b| {
        b.is_pinned
            .cmp(&a.is_pinned)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    sorted
}

/// Case-insensitive title/content search.
#[must_use]
pub fn search_notes<'a>(notes: &'a [note::Model], query: &str) -> Vec<&'a note::Model> {
    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| {
            note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
        })
        .collect()
}
