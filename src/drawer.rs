use std::rc::Rc;

use crate::api::models::{MessageEntry, MessageListItem, WorkerProfile};
use crate::api::MessageSource;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open(MessageListItem),
}

/// Draft text of the message being typed. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    draft: String,
}

impl Composer {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn clear(&mut self) {
        self.draft.clear();
    }

    /// Takes the trimmed draft and clears the input. Blank drafts are left alone.
    pub fn send(&mut self) -> Option<String> {
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();
        self.draft.clear();
        Some(text)
    }
}

/// Which conversation the messaging drawer shows, if any.
pub struct Drawer {
    source: Rc<dyn MessageSource>,
    state: DrawerState,
    composer: Composer,
}

impl Drawer {
    pub fn new(source: Rc<dyn MessageSource>) -> Self {
        Self {
            source,
            state: DrawerState::Closed,
            composer: Composer::default(),
        }
    }

    pub fn source(&self) -> &Rc<dyn MessageSource> {
        &self.source
    }

    pub fn state(&self) -> &DrawerState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DrawerState::Open(_))
    }

    pub fn selection(&self) -> Option<&MessageListItem> {
        match &self.state {
            DrawerState::Open(item) => Some(item),
            DrawerState::Closed => None,
        }
    }

    pub fn thread(&self) -> Option<&[MessageEntry]> {
        self.selection().map(|item| self.source.resolve_thread(item))
    }

    /// Position of the current selection in an inbox listing. Fresh
    /// conversations are never listed.
    pub fn selected_index(&self, items: &[MessageListItem]) -> Option<usize> {
        let selected = self.selection().filter(|s| !s.is_fresh())?;
        items.iter().position(|item| item.id == selected.id)
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut Composer {
        &mut self.composer
    }

    /// Returns false when the worker has no conversation; the state is left as it was.
    pub fn open_by_worker_id(&mut self, worker_id: &str) -> bool {
        match self.source.resolve_by_worker_id(worker_id) {
            Some(item) => {
                self.open_with_list_item(item);
                true
            }
            None => {
                log::debug!("No conversation for worker {worker_id}, drawer unchanged");
                false
            }
        }
    }

    pub fn open_with_list_item(&mut self, item: MessageListItem) {
        log::debug!("Opening drawer for worker {} ({:?})", item.worker_id, item.id);
        self.composer.clear();
        self.state = DrawerState::Open(item);
    }

    pub fn open_fresh_conversation(&mut self, worker: &WorkerProfile, job_title: &str) {
        self.open_with_list_item(MessageListItem::fresh(worker, job_title));
    }

    pub fn close(&mut self) {
        if self.is_open() {
            log::debug!("Closing drawer");
        }
        self.composer.clear();
        self.state = DrawerState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockStore;
    use crate::api::models::{Role, ThreadId};

    fn drawer() -> Drawer {
        Drawer::new(Rc::new(MockStore::builtin().unwrap()))
    }

    fn newcomer() -> WorkerProfile {
        WorkerProfile {
            worker_id: "58".into(),
            name: "Chris Bennett".into(),
            avatar: String::new(),
            role: Role::Rbt,
            applied_for: "Registered Behavior Technician (RBT)".into(),
        }
    }

    #[test]
    fn starts_closed() {
        let d = drawer();
        assert_eq!(d.state(), &DrawerState::Closed);
        assert!(d.selection().is_none());
        assert!(d.thread().is_none());
    }

    #[test]
    fn open_then_close_worker_42() {
        let mut d = drawer();
        assert!(d.open_by_worker_id("42"));
        assert!(d.is_open());
        assert_eq!(d.selection().unwrap().worker_id, "42");
        assert_eq!(d.thread().unwrap().len(), 3);

        d.close();
        assert_eq!(d.state(), &DrawerState::Closed);
        assert!(d.selection().is_none());
        assert!(d.thread().is_none());
    }

    #[test]
    fn unknown_worker_keeps_drawer_closed() {
        let mut d = drawer();
        assert!(!d.open_by_worker_id("404"));
        assert!(!d.is_open());
    }

    #[test]
    fn unknown_worker_keeps_current_selection() {
        let mut d = drawer();
        d.open_by_worker_id("17");
        let before = d.state().clone();
        assert!(!d.open_by_worker_id("404"));
        assert_eq!(d.state(), &before);
    }

    #[test]
    fn reselection_replaces_selection() {
        let mut d = drawer();
        d.open_by_worker_id("42");
        d.open_by_worker_id("17");
        assert_eq!(d.selection().unwrap().worker_id, "17");
        assert_eq!(d.thread().unwrap().len(), 2);
    }

    #[test]
    fn open_with_list_item_uses_given_descriptor() {
        let mut d = drawer();
        let item = d.source().resolve_by_worker_id("23").unwrap();
        d.open_with_list_item(item.clone());
        assert_eq!(d.selection(), Some(&item));
        assert_eq!(d.thread().unwrap().len(), 1);
    }

    #[test]
    fn fresh_conversation_has_no_history() {
        let mut d = drawer();
        d.open_fresh_conversation(&newcomer(), "Title");
        let item = d.selection().unwrap();
        assert_eq!(item.id, ThreadId::New);
        assert_eq!(item.job_title, "Title");
        assert!(!item.unread);
        assert!(item.last_message.is_empty());
        assert!(d.thread().unwrap().is_empty());
    }

    #[test]
    fn selected_index_follows_selection() {
        let mut d = drawer();
        let items = d.source().list_items();
        assert_eq!(d.selected_index(&items), None);

        d.open_by_worker_id("17");
        assert_eq!(d.selected_index(&items), Some(1));

        d.open_fresh_conversation(&newcomer(), "Weekend RBT");
        assert_eq!(d.selected_index(&items), None);

        d.open_by_worker_id("42");
        assert_eq!(d.selected_index(&items), Some(0));

        d.close();
        assert_eq!(d.selected_index(&items), None);
    }

    #[test]
    fn fresh_conversation_with_known_worker_is_not_listed() {
        let mut d = drawer();
        let items = d.source().list_items();
        let known = d.source().candidates().iter().find(|c| c.worker_id == "42").cloned().unwrap();
        d.open_fresh_conversation(&known, "Weekend RBT");
        assert_eq!(d.selected_index(&items), None);
    }

    #[test]
    fn close_discards_draft() {
        let mut d = drawer();
        d.open_by_worker_id("42");
        d.composer_mut().set_draft("See you Monday");
        d.close();
        assert!(d.composer().draft().is_empty());
    }

    #[test]
    fn draft_does_not_follow_reselection() {
        let mut d = drawer();
        d.open_by_worker_id("42");
        d.composer_mut().set_draft("half written");
        d.open_by_worker_id("17");
        assert!(d.composer().draft().is_empty());
    }

    #[test]
    fn send_clears_input_without_touching_thread() {
        let mut d = drawer();
        d.open_by_worker_id("42");
        d.composer_mut().set_draft("  Thanks, talk soon  ");
        assert_eq!(d.composer_mut().send().as_deref(), Some("Thanks, talk soon"));
        assert!(d.composer().draft().is_empty());
        assert_eq!(d.thread().unwrap().len(), 3);
    }

    #[test]
    fn blank_draft_is_not_sent() {
        let mut composer = Composer::default();
        composer.set_draft("   ");
        assert!(composer.send().is_none());
        assert_eq!(composer.draft(), "   ");
    }
}
