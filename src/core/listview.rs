//! Generic optimistic entity-list state.
//!
//! Every feature keeps a transient in-memory copy of one collection,
//! mutates it optimistically, and reconciles with the store when a write
//! fails. This module is that capability once, parameterized over the
//! record type, instead of four hand-rolled copies per feature.
//!
//! Late fetches are discarded by epoch: a refresh captures the view's epoch
//! when it starts, and [`ListView::install`] refuses results whose epoch no
//! longer matches (the view was invalidated or resynced in the meantime).
//! Writes go through [`commit_or_refetch`], the one rollback policy used
//! everywhere: on failure, re-fetch the collection, install it, and still
//! return the original error so the caller can surface a notification.

use std::future::Future;

use crate::errors::Result;

/// A record addressable by its store-assigned ID.
pub trait Keyed {
    fn key(&self) -> i64;
}

macro_rules! impl_keyed {
    ($($module:ident),+ $(,)?) => {
        $(
            impl Keyed for crate::entities::$module::Model {
                fn key(&self) -> i64 {
                    self.id
                }
            }
        )+
    };
}

impl_keyed!(
    budget,
    expense,
    habit,
    habit_completion,
    income,
    note,
    savings_goal,
    subscription,
    task,
    workout,
);

/// Opaque lifetime marker for a refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Epoch(u64);

/// An in-memory view over one user-scoped collection.
#[derive(Debug)]
pub struct ListView<T> {
    items: Vec<T>,
    epoch: u64,
}

impl<T: Keyed + Clone> Default for ListView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListView<T>
where
    T: Keyed + Clone,
{
    #[must_use]
    pub fn new() -> Self {
        ListView {
            items: Vec::new(),
            epoch: 0,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: i64) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Epoch to capture before starting a fetch.
    #[must_use]
    pub fn epoch(&self) -> Epoch {
        Epoch(self.epoch)
    }

    /// Marks the view as gone (navigation away). Fetches already in flight
    /// carry a stale epoch afterwards and will be discarded on install.
    pub fn invalidate(&mut self) {
        self.epoch += 1;
        self.items.clear();
    }

    /// Applies a completed fetch, unless its epoch went stale while the
    /// request was in flight. Returns whether the result was applied.
    pub fn install(&mut self, epoch: Epoch, items: Vec<T>) -> bool {
        if epoch.0 != self.epoch {
            tracing::debug!("discarding stale fetch result");
            return false;
        }
        self.items = items;
        true
    }

    /// Replaces the contents after a reconcile re-fetch. Bumps the epoch so
    /// fetches that were racing the reconcile cannot overwrite it.
    pub fn replace(&mut self, items: Vec<T>) {
        self.epoch += 1;
        self.items = items;
    }

    /// Optimistically prepends a freshly created record.
    pub fn insert_front(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Optimistically replaces the record with the same key, if present.
    pub fn update_item(&mut self, updated: T) {
        if let Some(slot) = self.items.iter_mut().find(|item| item.key() == updated.key()) {
            *slot = updated;
        }
    }

    /// Optimistically removes the record with the given key, if present.
    pub fn remove_item(&mut self, key: i64) {
        self.items.retain(|item| item.key() != key);
    }
}

/// Runs a remote write after an optimistic local change. On failure the
/// collection is re-fetched and installed so the view resynchronizes, and
/// the original write error is still returned for the caller to surface.
/// If the re-fetch fails too, the inconsistency is logged rather than
/// swallowed.
pub async fn commit_or_refetch<T, W, F, R>(
    view: &mut ListView<T>,
    write: W,
    refetch: F,
) -> Result<()>
where
    T: Keyed + Clone,
    W: Future<Output = Result<()>>,
    F: FnOnce() -> R,
    R: Future<Output = Result<Vec<T>>>,
{
    match write.await {
        Ok(()) => Ok(()),
        Err(write_err) => {
            match refetch().await {
                Ok(items) => view.replace(items),
                Err(refetch_err) => {
                    tracing::warn!(error = %refetch_err, "re-fetch after failed write also failed");
                }
            }
            Err(write_err)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::note;
    use crate::errors::Error;
    use crate::test_utils::note_with_id;

    fn view_with(notes: Vec<note::Model>) -> ListView<note::Model> {
        let mut view = ListView::new();
        let epoch = view.epoch();
        assert!(view.install(epoch, notes));
        view
    }

    #[test]
    fn test_install_discards_stale_epoch() {
        let mut view: ListView<note::Model> = ListView::new();
        let epoch = view.epoch();

        // The user navigated away while the fetch was in flight.
        view.invalidate();

        assert!(!view.install(epoch, vec![note_with_id(1)]));
        assert!(view.is_empty());

        // A fetch started after the invalidation lands fine.
        let fresh = view.epoch();
        assert!(view.install(fresh, vec![note_with_id(2)]));
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_optimistic_mutations() {
        let mut view = view_with(vec![note_with_id(1), note_with_id(2)]);

        view.insert_front(note_with_id(3));
        assert_eq!(view.items()[0].id, 3);

        let mut renamed = note_with_id(2);
        renamed.title = "renamed".to_string();
        view.update_item(renamed);
        assert_eq!(view.get(2).unwrap().title, "renamed");

        view.remove_item(1);
        assert!(view.get(1).is_none());
        assert_eq!(view.len(), 2);
    }

    #[tokio::test]
    async fn test_commit_keeps_optimistic_state_on_success() {
        let mut view = view_with(vec![note_with_id(1)]);
        view.insert_front(note_with_id(2));

        let result = commit_or_refetch(&mut view, async { Ok(()) }, || async {
            panic!("must not re-fetch on success")
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(view.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_write_refetches_and_surfaces_error() {
        let mut view = view_with(vec![note_with_id(1)]);

        // Optimistically removed, but the remote delete will fail.
        view.remove_item(1);

        let result = commit_or_refetch(
            &mut view,
            async { Err(Error::validation("write refused")) },
            || async { Ok(vec![note_with_id(1)]) },
        )
        .await;

        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
        // The view resynchronized to what the store actually holds.
        assert_eq!(view.len(), 1);
        assert!(view.get(1).is_some());
    }

    #[tokio::test]
    async fn test_replace_invalidates_racing_fetches() {
        let mut view = view_with(vec![note_with_id(1)]);
        let racing = view.epoch();

        view.replace(vec![note_with_id(2)]);

        assert!(!view.install(racing, vec![note_with_id(99)]));
        assert_eq!(view.items()[0].id, 2);
    }
}
