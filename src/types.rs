use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LabelsResponse {
    pub labels: Option<Vec<Label>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Label {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Profile {
    #[serde(rename = "emailAddress")]
    pub email_address: String,
    #[serde(rename = "messagesTotal")]
    pub messages_total: u64,
    #[serde(rename = "threadsTotal")]
    pub threads_total: u64,
    #[serde(rename = "historyId")]
    pub history_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub messages: Option<Vec<MessageSummary>>,
}

/// Minimal reference returned by the list endpoint; its `id` drives the
/// per-message detail fetch.
#[derive(Debug, Deserialize, Clone)]
pub struct MessageSummary {
    pub id: String,
    #[serde(rename = "threadId")]
    pub thread_id: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Message {
    pub id: Option<String>,
    #[serde(rename = "threadId")]
    pub thread_id: Option<String>,
    #[serde(rename = "labelIds")]
    pub label_ids: Option<Vec<String>>,
    #[serde(rename = "internalDate")]
    pub internal_date: Option<String>,
    pub payload: Option<MessagePart>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MessagePart {
    #[serde(rename = "mimeType")]
    pub mime_type: Option<String>,
    pub headers: Option<Vec<Header>>,
    pub body: Option<MessagePartBody>,
    pub parts: Option<Vec<MessagePart>>,
}

/// A payload node is either a leaf carrying its own body or a container of
/// child parts. The wire format expresses this with an optional `parts`
/// array; this view makes the two cases explicit.
pub enum PartKind<'a> {
    Single(&'a MessagePart),
    Multi(&'a [MessagePart]),
}

impl MessagePart {
    pub fn kind(&self) -> PartKind<'_> {
        match self.parts.as_deref() {
            Some(parts) => PartKind::Multi(parts),
            None => PartKind::Single(self),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Header {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MessagePartBody {
    pub data: Option<String>,
}

/// Record derived from one message-get payload. `internal_date` stays in
/// epoch milliseconds; the presenter is the only layer that formats it.
#[derive(Debug, Clone)]
pub struct MessageDetail {
    pub id: String,
    pub thread_id: String,
    pub internal_date: Option<i64>,
    pub label_ids: Vec<String>,
    pub from: String,
    pub subject: String,
    pub body_excerpt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_deserializes_wire_names() {
        let json = r#"{
            "id": "m1",
            "threadId": "t1",
            "labelIds": ["INBOX"],
            "internalDate": "1731401723000",
            "payload": {
                "mimeType": "multipart/alternative",
                "parts": [{"mimeType": "text/plain", "body": {"data": "aGk="}}]
            }
        }"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.id.as_deref(), Some("m1"));
        assert_eq!(message.thread_id.as_deref(), Some("t1"));
        assert_eq!(
            message.label_ids.as_deref(),
            Some(&["INBOX".to_string()][..])
        );
        assert_eq!(message.internal_date.as_deref(), Some("1731401723000"));
        let payload = message.payload.unwrap();
        assert!(matches!(payload.kind(), PartKind::Multi(parts) if parts.len() == 1));
    }

    #[test]
    fn test_part_without_children_is_single() {
        let part = MessagePart {
            mime_type: Some("text/plain".to_string()),
            ..Default::default()
        };
        assert!(matches!(part.kind(), PartKind::Single(_)));
    }
}
