use std::time::Instant;

use futures::future::try_join_all;
use log::{debug, info};

use crate::error::Result;
use crate::gmail_api::GmailClient;
use crate::message_body::parse_message;
use crate::types::{Label, MessageDetail, Profile};

/// Everything one fetch cycle produces.
#[derive(Debug)]
pub struct MailboxSnapshot {
    pub profile: Profile,
    pub labels: Vec<Label>,
    pub messages: Vec<MessageDetail>,
}

/// Runs the two-tier concurrent fetch.
///
/// Tier 1 issues the labels, profile, and message-list requests in parallel;
/// tier 2 only starts once the message list is in and fans out one detail
/// fetch per listed message. The first failure in either tier aborts the
/// whole batch, and `try_join_all` keeps the details in list order.
pub async fn fetch_snapshot(client: &GmailClient, max_results: u32) -> Result<MailboxSnapshot> {
    let started = Instant::now();

    let (labels, profile, summaries) = tokio::try_join!(
        client.fetch_labels(),
        client.fetch_profile(),
        client.list_messages(max_results),
    )?;
    debug!(
        "listed {} labels and {} messages for {}",
        labels.len(),
        summaries.len(),
        profile.email_address
    );

    let details = try_join_all(summaries.iter().map(|s| client.get_message(&s.id))).await?;

    let messages = details
        .into_iter()
        .map(parse_message)
        .collect::<Result<Vec<_>>>()?;

    info!(
        "fetched profile, {} labels, and {} messages in {:.2}s",
        labels.len(),
        messages.len(),
        started.elapsed().as_secs_f64()
    );

    Ok(MailboxSnapshot {
        profile,
        labels,
        messages,
    })
}
