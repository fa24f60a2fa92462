//! Invite handler: `/invite` alone returns one permanent link; a document captioned `/invite`
//! is read as an email list and answered with a CSV of single-use, expiring links.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use telegram_bot::{
    contains_command, parse_command, Bot as CoreBot, DbotError, Document, Handler,
    HandlerResponse, InviteLinkOptions, Message, Result,
};
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use crate::config::InviteConfig;
use crate::emails::parse_emails;
use crate::report::{render_csv, report_file_name, InviteRow};

/// Name of the link created by a plain `/invite`.
pub const SINGLE_INVITE_NAME: &str = "Bot Generated Invite";
/// Reply when a request cannot be completed.
pub const MSG_INVITE_FAILED: &str = "Sorry, I couldn't process your request. Please make sure you've attached a file with email addresses (one per line).";

const INVITE_COMMAND: &str = "invite";
/// Telegram rejects invite-link names longer than this many characters.
pub const MAX_LINK_NAME_CHARS: usize = 32;

/// `Invite for {email}`, cut to [`MAX_LINK_NAME_CHARS`] on a char boundary.
pub fn batch_link_name(email: &str) -> String {
    format!("Invite for {}", email)
        .chars()
        .take(MAX_LINK_NAME_CHARS)
        .collect()
}

pub struct InviteHandler {
    bot_username: Arc<RwLock<Option<String>>>,
    bot: Arc<dyn CoreBot>,
    config: InviteConfig,
}

impl InviteHandler {
    pub fn new(
        bot_username: Arc<RwLock<Option<String>>>,
        bot: Arc<dyn CoreBot>,
        config: InviteConfig,
    ) -> Self {
        Self {
            bot_username,
            bot,
            config,
        }
    }

    /// Documents trigger through their caption; other messages through the command itself.
    fn is_invite_request(&self, message: &Message, username: Option<&str>) -> bool {
        match &message.document {
            Some(_) => message
                .caption
                .as_deref()
                .map(|caption| contains_command(caption, INVITE_COMMAND))
                .unwrap_or(false),
            None => parse_command(&message.content, username)
                .map(|c| c.name == INVITE_COMMAND)
                .unwrap_or(false),
        }
    }

    async fn single_invite(&self, message: &Message) -> Result<HandlerResponse> {
        let options = InviteLinkOptions {
            name: Some(SINGLE_INVITE_NAME.to_string()),
            ..Default::default()
        };
        let link = self.bot.create_invite_link(&self.config.chat, &options).await?;
        info!(chat_id = message.chat.id, "Single invite link created");

        let text = format!("Here's your invite link to join the group:\n{}", link);
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }

    /// Creates one link per address. A failed address becomes an ERROR row; the batch continues.
    async fn issue_links(&self, emails: &[String]) -> Vec<InviteRow> {
        let mut rows = Vec::with_capacity(emails.len());
        for email in emails {
            let expires = Utc::now() + Duration::days(self.config.expire_days);
            let options = InviteLinkOptions {
                name: Some(batch_link_name(email)),
                expire_at: Some(expires),
                member_limit: Some(self.config.member_limit),
            };
            match self.bot.create_invite_link(&self.config.chat, &options).await {
                Ok(link) => {
                    info!(email = %email, "Generated invite link");
                    rows.push(InviteRow::issued(email.as_str(), link, expires));
                }
                Err(e) => {
                    let err = DbotError::FileProcessing(format!("invite for {}: {}", email, e));
                    error!(error = %err, "Error generating invite");
                    rows.push(InviteRow::failed(email.as_str()));
                }
            }
        }
        rows
    }

    async fn batch_invites(&self, message: &Message, document: &Document) -> Result<HandlerResponse> {
        info!(
            file_id = %document.file_id,
            file_name = ?document.file_name,
            "Processing email list"
        );
        let bytes = self.bot.download_file(&document.file_id).await?;
        let emails = parse_emails(&bytes)?;
        let rows = self.issue_links(&emails).await;

        let failed = rows.iter().filter(|r| r.is_failed()).count();
        info!(total = rows.len(), failed, "Invite batch finished");

        let caption = self.config.report_caption();
        self.bot
            .send_document(
                &message.chat,
                &report_file_name(Utc::now()),
                render_csv(&rows)?,
                Some(caption.as_str()),
                Some(message.id.as_str()),
            )
            .await?;
        Ok(HandlerResponse::Reply(caption))
    }

    async fn process(&self, message: &Message) -> Result<HandlerResponse> {
        match &message.document {
            Some(document) => self.batch_invites(message, document).await,
            None => self.single_invite(message).await,
        }
    }
}

#[async_trait]
impl Handler for InviteHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let username = self.bot_username.read().await.clone();
        if !self.is_invite_request(message, username.as_deref()) {
            return Ok(HandlerResponse::Continue);
        }

        match self.process(message).await {
            Ok(response) => Ok(response),
            Err(e) => {
                warn!(error = %e, "Invite request failed");
                self.bot.reply_to(message, MSG_INVITE_FAILED).await?;
                Ok(HandlerResponse::Reply(MSG_INVITE_FAILED.to_string()))
            }
        }
    }
}
