//! Keeps the local todo list consistent with the remote store.
//!
//! [`ItemListSynchronizer`] owns the in-memory collection, the optional edit
//! session and the notice board. Each operation awaits at most one remote
//! call and then splices the outcome into local state:
//!
//! - `load` replaces the collection wholesale
//! - `create` appends the server's item
//! - `commit_edit` patches one item in place
//! - `delete` removes one item after the call completes
//!
//! Remote failures are recovered here. They show up in the notices and as
//! [`Outcome::Failed`], never as `Err`.

mod error;
mod notice;

use std::time::Duration;

use crate::models::{EditSession, Item, ItemDraft};
use crate::store::{RemoteStore, StoreError};

pub use error::SyncError;
pub use notice::{NoticeBoard, DEFAULT_NOTICE_TTL};

pub const MSG_CREATED: &str = "Item added successfully";
pub const MSG_UPDATED: &str = "Item updated successfully";
pub const MSG_CREATE_FAILED: &str = "Unable to create Todo item";
pub const MSG_UPDATE_FAILED: &str = "Unable to update Todo item";
pub const MSG_LOAD_FAILED: &str = "Unable to load Todo items";

/// What an operation did.
#[derive(Debug)]
pub enum Outcome {
    /// The remote call succeeded and local state was updated.
    Applied,
    /// Nothing was sent: blank input, or a declined delete.
    Skipped,
    /// The remote call failed; local state is unchanged.
    Failed(StoreError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

pub struct ItemListSynchronizer<S> {
    store: S,
    items: Vec<Item>,
    edit: Option<EditSession>,
    notices: NoticeBoard,
}

impl<S: RemoteStore> ItemListSynchronizer<S> {
    pub fn new(store: S) -> Self {
        Self::with_notice_ttl(store, DEFAULT_NOTICE_TTL)
    }

    /// Creates a synchronizer whose success notices last `ttl`.
    pub fn with_notice_ttl(store: S, ttl: Duration) -> Self {
        Self {
            store,
            items: Vec::new(),
            edit: None,
            notices: NoticeBoard::new(ttl),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the local collection with the server's.
    pub async fn load(&mut self) -> Outcome {
        self.notices.clear_error();

        match self.store.list().await {
            Ok(items) => {
                tracing::debug!("Loaded {} item(s)", items.len());
                self.items = items;
                Outcome::Applied
            }
            Err(e) => {
                tracing::warn!("Failed to load items: {}", e);
                self.notices.post_error(MSG_LOAD_FAILED);
                Outcome::Failed(e)
            }
        }
    }

    /// Creates an item and appends the server's copy to the list.
    ///
    /// Blank title or description is silently skipped.
    pub async fn create(&mut self, title: &str, description: &str) -> Outcome {
        let draft = ItemDraft::new(title, description);
        if !draft.is_complete() {
            return Outcome::Skipped;
        }

        self.notices.clear_error();

        match self.store.create(&draft).await {
            Ok(item) => {
                tracing::info!("Created item {}", item.id);
                self.items.push(item);
                self.notices.post_success(MSG_CREATED);
                Outcome::Applied
            }
            Err(e) => {
                tracing::warn!("Failed to create item: {}", e);
                self.notices.post_error(MSG_CREATE_FAILED);
                Outcome::Failed(e)
            }
        }
    }

    /// Opens an edit session for `id`, seeded with its current values.
    pub fn begin_edit(&mut self, id: &str) -> Result<&EditSession, SyncError> {
        if let Some(open) = &self.edit {
            return Err(SyncError::InvalidState(format!(
                "already editing item {}",
                open.id
            )));
        }

        let item = self
            .item(id)
            .ok_or_else(|| SyncError::UnknownItem(id.to_string()))?;
        let session = EditSession::for_item(item);

        Ok(&*self.edit.insert(session))
    }

    pub fn set_edit_title(&mut self, title: impl Into<String>) -> Result<(), SyncError> {
        self.session_mut()?.title = title.into();
        Ok(())
    }

    pub fn set_edit_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<(), SyncError> {
        self.session_mut()?.description = description.into();
        Ok(())
    }

    /// Sends the pending edits. On success the item is patched and the
    /// session closes; on failure both stay as they were.
    pub async fn commit_edit(&mut self) -> Result<Outcome, SyncError> {
        let session = self
            .edit
            .as_ref()
            .ok_or_else(|| SyncError::InvalidState("no edit in progress".to_string()))?;

        let draft = session.draft();
        if !draft.is_complete() {
            return Ok(Outcome::Skipped);
        }
        let id = session.id.clone();

        self.notices.clear_error();

        match self.store.update(&id, &draft).await {
            Ok(()) => {
                match self.items.iter_mut().find(|item| item.id == id) {
                    Some(item) => {
                        item.title = draft.title;
                        item.description = draft.description;
                    }
                    None => tracing::warn!(
                        "Updated item {} is no longer in the local list, nothing to patch",
                        id
                    ),
                }
                self.edit = None;
                tracing::info!("Updated item {}", id);
                self.notices.post_success(MSG_UPDATED);
                Ok(Outcome::Applied)
            }
            Err(e) => {
                tracing::warn!("Failed to update item {}: {}", id, e);
                self.notices.post_error(MSG_UPDATE_FAILED);
                Ok(Outcome::Failed(e))
            }
        }
    }

    /// Discards pending edits. A no-op when nothing is being edited.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Deletes `id` once `confirm` says yes.
    ///
    /// The item leaves the local list only after the remote call completes.
    /// A failed delete keeps the item and posts no notice.
    pub async fn delete<F>(&mut self, id: &str, confirm: F) -> Result<Outcome, SyncError>
    where
        F: FnOnce(&Item) -> bool,
    {
        let item = self
            .item(id)
            .ok_or_else(|| SyncError::UnknownItem(id.to_string()))?;

        if !confirm(item) {
            return Ok(Outcome::Skipped);
        }

        match self.store.delete(id).await {
            Ok(()) => {
                self.items.retain(|item| item.id != id);
                tracing::info!("Deleted item {}", id);
                Ok(Outcome::Applied)
            }
            Err(e) => {
                tracing::warn!("Failed to delete item {}: {}", id, e);
                Ok(Outcome::Failed(e))
            }
        }
    }

    fn session_mut(&mut self) -> Result<&mut EditSession, SyncError> {
        self.edit
            .as_mut()
            .ok_or_else(|| SyncError::InvalidState("no edit in progress".to_string()))
    }
}
