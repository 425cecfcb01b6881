use serde::Deserialize;

/// A single message in a thread. Each sender role carries only the fields
/// that exist for it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "sender", rename_all = "snake_case")]
pub enum MessageEntry {
    Employer {
        text: String,
        timestamp: String,
        #[serde(default)]
        sender_name: String,
        #[serde(default)]
        sender_avatar: String,
        #[serde(default)]
        sender_company: String,
    },
    Worker {
        text: String,
        timestamp: String,
    },
}

impl MessageEntry {
    pub fn text(&self) -> &str {
        match self {
            MessageEntry::Employer { text, .. } | MessageEntry::Worker { text, .. } => text,
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            MessageEntry::Employer { timestamp, .. } | MessageEntry::Worker { timestamp, .. } => timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConversationRecord {
    pub id: String,
    pub worker_id: String,
    pub worker_name: String,
    #[serde(default)]
    pub worker_avatar: String,
    pub job_title: String,
    #[serde(default)]
    pub unread: bool,
    pub messages: Vec<MessageEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadId {
    Stored(String),
    /// No thread exists yet; the employer is about to write the first message.
    New,
}

/// Summary of a conversation, used to select it without loading its history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageListItem {
    pub id: ThreadId,
    pub worker_id: String,
    pub worker_name: String,
    pub worker_avatar: String,
    pub job_title: String,
    pub last_message: String,
    pub timestamp: String,
    pub unread: bool,
}

impl MessageListItem {
    pub fn from_record(record: &ConversationRecord) -> Self {
        let last = record.messages.last();
        Self {
            id: ThreadId::Stored(record.id.clone()),
            worker_id: record.worker_id.clone(),
            worker_name: record.worker_name.clone(),
            worker_avatar: record.worker_avatar.clone(),
            job_title: record.job_title.clone(),
            last_message: last.map(|m| m.text().to_string()).unwrap_or_default(),
            timestamp: last.map(|m| m.timestamp().to_string()).unwrap_or_default(),
            unread: record.unread,
        }
    }

    pub fn fresh(worker: &WorkerProfile, job_title: &str) -> Self {
        Self {
            id: ThreadId::New,
            worker_id: worker.worker_id.clone(),
            worker_name: worker.name.clone(),
            worker_avatar: worker.avatar.clone(),
            job_title: job_title.to_string(),
            last_message: String::new(),
            timestamp: String::new(),
            unread: false,
        }
    }

    pub fn is_fresh(&self) -> bool {
        self.id == ThreadId::New
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Rbt,
    Bcba,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Rbt => "RBT",
            Role::Bcba => "BCBA",
        }
    }
}

/// A candidate who applied to one of the employer's postings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkerProfile {
    pub worker_id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    pub role: Role,
    pub applied_for: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employer_message_parses_with_sender_tag() {
        let json = r#"{
            "sender": "employer",
            "text": "Are you available Monday?",
            "timestamp": "9:15 AM",
            "sender_name": "Dana Whitfield",
            "sender_company": "Bright Path ABA"
        }"#;
        let entry: MessageEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.text(), "Are you available Monday?");
        match entry {
            MessageEntry::Employer { sender_avatar, sender_company, .. } => {
                assert!(sender_avatar.is_empty());
                assert_eq!(sender_company, "Bright Path ABA");
            }
            MessageEntry::Worker { .. } => panic!("expected employer message"),
        }
    }

    #[test]
    fn worker_message_rejects_unknown_sender() {
        let json = r#"{ "sender": "recruiter", "text": "hi", "timestamp": "now" }"#;
        assert!(serde_json::from_str::<MessageEntry>(json).is_err());
    }

    #[test]
    fn list_item_previews_last_message() {
        let record = ConversationRecord {
            id: "conv-1".into(),
            worker_id: "7".into(),
            worker_name: "Sam Ortiz".into(),
            worker_avatar: String::new(),
            job_title: "RBT - Afternoons".into(),
            unread: true,
            messages: vec![
                MessageEntry::Worker { text: "Hello".into(), timestamp: "8:00 AM".into() },
                MessageEntry::Worker { text: "Still interested".into(), timestamp: "8:05 AM".into() },
            ],
        };
        let item = MessageListItem::from_record(&record);
        assert_eq!(item.id, ThreadId::Stored("conv-1".into()));
        assert_eq!(item.last_message, "Still interested");
        assert_eq!(item.timestamp, "8:05 AM");
        assert!(item.unread);
        assert!(!item.is_fresh());
    }

    #[test]
    fn fresh_item_has_no_history() {
        let worker = WorkerProfile {
            worker_id: "99".into(),
            name: "Lee Park".into(),
            avatar: String::new(),
            role: Role::Bcba,
            applied_for: "Clinical Supervisor".into(),
        };
        let item = MessageListItem::fresh(&worker, "Clinical Supervisor");
        assert!(item.is_fresh());
        assert!(!item.unread);
        assert!(item.last_message.is_empty());
        assert!(item.timestamp.is_empty());
        assert_eq!(item.worker_id, "99");
    }
}
