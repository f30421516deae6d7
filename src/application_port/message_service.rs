use crate::domain_model::{MessageId, MessageRecord, OrganizationId};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("a message with this title already exists")]
    DuplicateTitle,
    #[error("store error: {0}")]
    Store(String),
}

#[derive(Debug, Clone)]
pub struct CreateMessageInput {
    pub title: String,
    pub content: String,
}

/// Partial update: a `None` field keeps its stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateMessageInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Field name mapped to everything wrong with it. All checks run before
/// the service answers, so the caller sees every problem at once.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationErrors(pub BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

/// Business result of a write operation. Callers match exhaustively and
/// map each variant to their own response shape; variants an operation
/// never produces go through the caller's default arm.
///
/// Storage failures are not modeled here. They travel on the `Err` side
/// of the service methods as [`MessageError`].
#[derive(Debug)]
pub enum MessageOutcome {
    Created(MessageRecord),
    Updated,
    Deleted,
    NotFound(String),
    Invalid(ValidationErrors),
    Conflict(String),
}

#[async_trait::async_trait]
pub trait MessageService: Send + Sync {
    async fn create_message(
        &self,
        organization_id: OrganizationId,
        input: CreateMessageInput,
    ) -> Result<MessageOutcome, MessageError>;

    async fn update_message(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
        input: UpdateMessageInput,
    ) -> Result<MessageOutcome, MessageError>;

    /// Soft delete. Deleting an already-deleted message succeeds again.
    async fn delete_message(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> Result<MessageOutcome, MessageError>;

    async fn get_message(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> Result<Option<MessageRecord>, MessageError>;

    async fn get_all_messages(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<MessageRecord>, MessageError>;
}
