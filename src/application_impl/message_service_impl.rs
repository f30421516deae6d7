use crate::application_port::{
    CreateMessageInput, MessageError, MessageOutcome, MessageService, UpdateMessageInput,
    ValidationErrors,
};
use crate::domain_model::{MessageId, MessageRecord, OrganizationId};
use crate::domain_port::MessageRepo;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

const DUPLICATE_TITLE: &str = "A message with this title already exists in the organization.";
const NOT_FOUND: &str = "Message not found in this organization.";
const INACTIVE: &str = "Message is inactive and cannot be updated.";

pub struct RealMessageService {
    message_repo: Arc<dyn MessageRepo>,
    title_min_len: usize,
    title_max_len: usize,
    content_min_len: usize,
}

impl RealMessageService {
    pub fn new(message_repo: Arc<dyn MessageRepo>) -> Self {
        Self {
            message_repo,
            title_min_len: 3,
            title_max_len: 100,
            content_min_len: 10,
        }
    }

    #[inline]
    fn new_message_id() -> MessageId {
        MessageId(Uuid::new_v4())
    }

    fn check_title(&self, title: &str, errors: &mut ValidationErrors) {
        let len = title.chars().count();
        if len < self.title_min_len || len > self.title_max_len {
            errors.add(
                "title",
                format!(
                    "Title must be between {} and {} characters long.",
                    self.title_min_len, self.title_max_len
                ),
            );
        }
    }

    fn check_content(&self, content: &str, errors: &mut ValidationErrors) {
        if content.chars().count() < self.content_min_len {
            errors.add(
                "content",
                format!(
                    "Content must be at least {} characters long.",
                    self.content_min_len
                ),
            );
        }
    }
}

#[async_trait::async_trait]
impl MessageService for RealMessageService {
    async fn create_message(
        &self,
        organization_id: OrganizationId,
        input: CreateMessageInput,
    ) -> Result<MessageOutcome, MessageError> {
        let title = input.title.trim();
        let content = input.content.trim();

        let mut errors = ValidationErrors::default();
        self.check_title(title, &mut errors);
        self.check_content(content, &mut errors);
        if !errors.is_empty() {
            return Ok(MessageOutcome::Invalid(errors));
        }

        // Best-effort pre-check. The unique index behind `insert` catches
        // the losing side of two concurrent creates with the same title.
        if self
            .message_repo
            .get_by_title(organization_id, title)
            .await?
            .is_some()
        {
            return Ok(MessageOutcome::Conflict(DUPLICATE_TITLE.to_string()));
        }

        let now = Utc::now();
        let record = MessageRecord {
            message_id: Self::new_message_id(),
            organization_id,
            title: title.to_string(),
            content: content.to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        match self.message_repo.insert(&record).await {
            Ok(persisted) => Ok(MessageOutcome::Created(persisted)),
            Err(MessageError::DuplicateTitle) => {
                Ok(MessageOutcome::Conflict(DUPLICATE_TITLE.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    async fn update_message(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
        input: UpdateMessageInput,
    ) -> Result<MessageOutcome, MessageError> {
        let Some(mut record) = self.message_repo.get_by_id(organization_id, id).await? else {
            return Ok(MessageOutcome::NotFound(NOT_FOUND.to_string()));
        };

        // Soft-deleted rows are read-only.
        if !record.is_active {
            let mut errors = ValidationErrors::default();
            errors.add("general", INACTIVE);
            return Ok(MessageOutcome::Invalid(errors));
        }

        let title = input.title.as_deref().map(str::trim);
        let content = input.content.as_deref().map(str::trim);

        let mut errors = ValidationErrors::default();
        if let Some(title) = title {
            self.check_title(title, &mut errors);
        }
        if let Some(content) = content {
            self.check_content(content, &mut errors);
        }
        if !errors.is_empty() {
            return Ok(MessageOutcome::Invalid(errors));
        }

        if let Some(title) = title {
            record.title = title.to_string();
        }
        if let Some(content) = content {
            record.content = content.to_string();
        }
        record.updated_at = Utc::now();

        // A rename can still collide with the unique index even though
        // uniqueness is only pre-checked at create time.
        match self.message_repo.update(&record).await {
            Ok(_) => Ok(MessageOutcome::Updated),
            Err(MessageError::DuplicateTitle) => {
                Ok(MessageOutcome::Conflict(DUPLICATE_TITLE.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    async fn delete_message(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> Result<MessageOutcome, MessageError> {
        let Some(mut record) = self.message_repo.get_by_id(organization_id, id).await? else {
            return Ok(MessageOutcome::NotFound(NOT_FOUND.to_string()));
        };

        // Deleting twice is not an error, and the second call writes nothing.
        if !record.is_active {
            return Ok(MessageOutcome::Deleted);
        }

        record.is_active = false;
        record.updated_at = Utc::now();

        self.message_repo.update(&record).await?;
        Ok(MessageOutcome::Deleted)
    }

    async fn get_message(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> Result<Option<MessageRecord>, MessageError> {
        self.message_repo.get_by_id(organization_id, id).await
    }

    async fn get_all_messages(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<MessageRecord>, MessageError> {
        self.message_repo.list(organization_id).await
    }
}
