//! Todo list client.
//!
//! Keeps a local, ordered list of todo items consistent with a remote
//! HTTP/JSON API. The pieces:
//!
//! - [`models`]: items, request bodies and the edit session
//! - [`store`]: the four remote calls and their HTTP implementation
//! - [`synchronizer`]: local state and the reconciliation rules
//! - [`view`]: text rendering of the page

pub mod models;
pub mod store;
pub mod synchronizer;
pub mod view;

pub use models::{EditSession, Item, ItemDraft};
pub use store::{HttpStore, RemoteStore, StoreError};
pub use synchronizer::{ItemListSynchronizer, NoticeBoard, Outcome, SyncError};
