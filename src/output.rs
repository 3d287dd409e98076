use chrono::{TimeZone, Utc};

use crate::fetch::MailboxSnapshot;
use crate::types::MessageDetail;

const BANNER: &str = "============================================================";
const RULE: &str = "----------------------------------------";
const PREVIEW_CHARS: usize = 100;

/// Renders the fetched snapshot as a sectioned plain-text report.
pub fn render_snapshot(snapshot: &MailboxSnapshot) -> String {
    let mut out = Vec::new();

    let profile = &snapshot.profile;
    out.push(BANNER.to_string());
    out.push("USER PROFILE".to_string());
    out.push(BANNER.to_string());
    out.push(format!("Email Address: {}", profile.email_address));
    out.push(format!("Messages Total: {}", profile.messages_total));
    out.push(format!("Threads Total: {}", profile.threads_total));
    out.push(format!(
        "History ID: {}",
        profile.history_id.as_deref().unwrap_or("N/A")
    ));
    out.push(String::new());

    out.push(BANNER.to_string());
    out.push("LABELS".to_string());
    out.push(BANNER.to_string());
    for label in &snapshot.labels {
        if let Some(name) = &label.name {
            out.push(format!("- {}", name));
        }
    }
    out.push(String::new());

    out.push(BANNER.to_string());
    out.push(format!("LAST {} EMAILS", snapshot.messages.len()));
    out.push(BANNER.to_string());
    for (i, message) in snapshot.messages.iter().enumerate() {
        out.push(String::new());
        out.push(format!("EMAIL #{}", i + 1));
        out.push(RULE.to_string());
        out.append(&mut render_message(message));
    }

    out.join("\n")
}

fn render_message(message: &MessageDetail) -> Vec<String> {
    let labels = if message.label_ids.is_empty() {
        "None".to_string()
    } else {
        message.label_ids.join(", ")
    };
    vec![
        format!("Message ID: {}", message.id),
        format!("Thread ID: {}", message.thread_id),
        format!("Timestamp: {}", format_timestamp(message.internal_date)),
        format!("From: {}", message.from),
        format!("Subject: {}", message.subject),
        format!("Labels: {}", labels),
        format!("Preview: {}", preview(&message.body_excerpt)),
    ]
}

// The full 500-char excerpt is too long for a list view; show the head.
fn preview(excerpt: &str) -> String {
    if excerpt.chars().count() > PREVIEW_CHARS {
        let head: String = excerpt.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        excerpt.to_string()
    }
}

fn format_timestamp(millis: Option<i64>) -> String {
    millis
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
