use crate::application_port::MessageError;
use crate::domain_model::{MessageId, MessageRecord, OrganizationId};
use crate::domain_port::MessageRepo;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Map-backed repository used by tests and the dev profile.
///
/// Enforces the same `(organization_id, title)` uniqueness under its lock
/// that the MySQL schema enforces with a unique index, so both backends
/// answer a duplicate insert the same way.
#[derive(Debug, Default)]
pub struct InMemoryMessageRepo {
    records: Mutex<HashMap<MessageId, MessageRecord>>,
}

impl InMemoryMessageRepo {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<MessageId, MessageRecord>>, MessageError> {
        self.records
            .lock()
            .map_err(|e| MessageError::Store(e.to_string()))
    }
}

#[async_trait::async_trait]
impl MessageRepo for InMemoryMessageRepo {
    async fn list(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<MessageRecord>, MessageError> {
        let records = self.lock()?;
        Ok(records
            .values()
            .filter(|r| r.organization_id == organization_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> Result<Option<MessageRecord>, MessageError> {
        let records = self.lock()?;
        Ok(records
            .get(&id)
            .filter(|r| r.organization_id == organization_id)
            .cloned())
    }

    async fn get_by_title(
        &self,
        organization_id: OrganizationId,
        title: &str,
    ) -> Result<Option<MessageRecord>, MessageError> {
        let records = self.lock()?;
        Ok(records
            .values()
            .find(|r| r.organization_id == organization_id && r.title == title)
            .cloned())
    }

    async fn insert(&self, record: &MessageRecord) -> Result<MessageRecord, MessageError> {
        let mut records = self.lock()?;

        let taken = records
            .values()
            .any(|r| r.organization_id == record.organization_id && r.title == record.title);
        if taken {
            return Err(MessageError::DuplicateTitle);
        }

        records.insert(record.message_id, record.clone());
        Ok(record.clone())
    }

    async fn update(&self, record: &MessageRecord) -> Result<MessageRecord, MessageError> {
        let mut records = self.lock()?;

        let taken = records.values().any(|r| {
            r.message_id != record.message_id
                && r.organization_id == record.organization_id
                && r.title == record.title
        });
        if taken {
            return Err(MessageError::DuplicateTitle);
        }

        records.insert(record.message_id, record.clone());
        Ok(record.clone())
    }
}
