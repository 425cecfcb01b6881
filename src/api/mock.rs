use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::api::models::{ConversationRecord, MessageEntry, MessageListItem, WorkerProfile};
use crate::api::MessageSource;
use crate::error::StoreError;

const BUILTIN_DATA: &str = include_str!("../../data/conversations.json");

#[derive(Debug, Deserialize)]
struct MockData {
    conversations: Vec<ConversationRecord>,
    #[serde(default)]
    candidates: Vec<WorkerProfile>,
}

/// Read-only conversations and candidates, standing in for the message API.
#[derive(Debug)]
pub struct MockStore {
    conversations: Vec<ConversationRecord>,
    by_worker: HashMap<String, usize>,
    candidates: Vec<WorkerProfile>,
}

impl MockStore {
    pub fn builtin() -> Result<Self, StoreError> {
        Self::from_json(BUILTIN_DATA)
    }

    pub fn empty() -> Self {
        Self {
            conversations: Vec::new(),
            by_worker: HashMap::new(),
            candidates: Vec::new(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, StoreError> {
        let data: MockData = serde_json::from_str(text)?;
        Self::new(data.conversations, data.candidates)
    }

    pub fn new(conversations: Vec<ConversationRecord>, candidates: Vec<WorkerProfile>) -> Result<Self, StoreError> {
        let mut by_worker = HashMap::with_capacity(conversations.len());
        for (idx, conv) in conversations.iter().enumerate() {
            if by_worker.insert(conv.worker_id.clone(), idx).is_some() {
                return Err(StoreError::DuplicateWorker(conv.worker_id.clone()));
            }
        }
        let mut seen = HashSet::new();
        let candidates = candidates
            .into_iter()
            .filter(|c| seen.insert(c.worker_id.clone()))
            .collect();
        log::debug!("Loaded {} conversations", conversations.len());
        Ok(Self { conversations, by_worker, candidates })
    }

    fn record(&self, worker_id: &str) -> Option<&ConversationRecord> {
        self.by_worker.get(worker_id).map(|&idx| &self.conversations[idx])
    }
}

impl MessageSource for MockStore {
    fn resolve_by_worker_id(&self, worker_id: &str) -> Option<MessageListItem> {
        self.record(worker_id).map(MessageListItem::from_record)
    }

    fn resolve_thread(&self, item: &MessageListItem) -> &[MessageEntry] {
        if item.is_fresh() {
            return &[];
        }
        self.record(&item.worker_id)
            .map(|r| r.messages.as_slice())
            .unwrap_or(&[])
    }

    fn list_items(&self) -> Vec<MessageListItem> {
        self.conversations.iter().map(MessageListItem::from_record).collect()
    }

    fn candidates(&self) -> &[WorkerProfile] {
        &self.candidates
    }
}
