pub mod mock;
pub mod models;

use models::{MessageEntry, MessageListItem, WorkerProfile};

/// Where conversations come from. The mock store is the only implementation
/// until a message API exists.
pub trait MessageSource {
    /// Canonical list item for the worker's conversation, if there is one.
    fn resolve_by_worker_id(&self, worker_id: &str) -> Option<MessageListItem>;

    /// Messages of the conversation the item points at, oldest first.
    /// Empty for unknown workers and for fresh conversations.
    fn resolve_thread(&self, item: &MessageListItem) -> &[MessageEntry];

    fn list_items(&self) -> Vec<MessageListItem>;

    fn candidates(&self) -> &[WorkerProfile];
}
