use base64::alphabet;
use base64::engine::{DecodePaddingMode, Engine, GeneralPurpose, GeneralPurposeConfig};

use crate::error::{FetchError, Result};
use crate::types::{Header, Message, MessageDetail, MessagePart, MessagePartBody, PartKind};

/// Longest body excerpt carried into a `MessageDetail`, counted in
/// characters rather than bytes.
pub const EXCERPT_CHARS: usize = 500;

// Gmail emits url-safe base64 with inconsistent padding, so accept both.
const BODY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Converts one message-get payload into a `MessageDetail`.
///
/// Missing headers and a missing body both become empty strings; only a
/// body that exists but cannot be decoded is an error.
pub fn parse_message(message: Message) -> Result<MessageDetail> {
    let id = message.id.clone().unwrap_or_default();
    let payload = message.payload.as_ref();
    let headers = payload.and_then(|p| p.headers.as_deref());

    let body_excerpt = match payload.and_then(locate_body).and_then(|b| b.data.as_deref()) {
        Some(data) => truncate_chars(&decode_body(data, &id)?, EXCERPT_CHARS),
        None => String::new(),
    };

    let internal_date = message
        .internal_date
        .as_deref()
        .and_then(|millis| millis.parse::<i64>().ok());

    Ok(MessageDetail {
        id,
        thread_id: message.thread_id.clone().unwrap_or_default(),
        internal_date,
        label_ids: message.label_ids.clone().unwrap_or_default(),
        from: header_value(headers, "From"),
        subject: header_value(headers, "Subject"),
        body_excerpt,
    })
}

// Exact name match; first match wins if the header repeats.
fn header_value(headers: Option<&[Header]>, name: &str) -> String {
    headers
        .unwrap_or_default()
        .iter()
        .find(|h| h.name.as_deref() == Some(name))
        .and_then(|h| h.value.clone())
        .unwrap_or_default()
}

/// A single-part payload carries its body directly; a multipart payload is
/// searched depth-first for a `text/plain` part, falling back to
/// `text/html`.
fn locate_body(payload: &MessagePart) -> Option<&MessagePartBody> {
    match payload.kind() {
        PartKind::Single(part) => part.body.as_ref(),
        PartKind::Multi(_) => find_part(payload, "text/plain")
            .or_else(|| find_part(payload, "text/html"))
            .and_then(|part| part.body.as_ref()),
    }
}

fn find_part<'a>(part: &'a MessagePart, mime_type: &str) -> Option<&'a MessagePart> {
    match part.kind() {
        PartKind::Single(leaf) => (leaf.mime_type.as_deref() == Some(mime_type)).then_some(leaf),
        PartKind::Multi(children) => children.iter().find_map(|child| find_part(child, mime_type)),
    }
}

fn decode_body(data: &str, message_id: &str) -> Result<String> {
    let bytes = BODY_ENGINE.decode(data).map_err(|e| FetchError::Parse {
        message_id: message_id.to_string(),
        reason: format!("invalid base64 body: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| FetchError::Parse {
        message_id: message_id.to_string(),
        reason: format!("body is not valid UTF-8: {}", e),
    })
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
