use super::util::is_dup_key;
use crate::application_port::MessageError;
use crate::domain_model::{MessageId, MessageRecord, OrganizationId};
use crate::domain_port::MessageRepo;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

/// Schema lives in `schema/bulletin.sql`. The `(organization_id, title)`
/// unique index there closes the create-time uniqueness race the service
/// layer can only pre-check.
pub struct MySqlMessageRepo {
    pool: MySqlPool,
}

impl MySqlMessageRepo {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlMessageRepo { pool }
    }
}

fn row_to_record(row: &MySqlRow) -> MessageRecord {
    MessageRecord {
        message_id: row.get("message_id"),
        organization_id: row.get("organization_id"),
        title: row.get("title"),
        content: row.get("content"),
        is_active: row.get("is_active"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait::async_trait]
impl MessageRepo for MySqlMessageRepo {
    async fn list(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<MessageRecord>, MessageError> {
        let rows = sqlx::query(
            r#"
SELECT message_id, organization_id, title, content, is_active, created_at, updated_at
FROM message
WHERE organization_id = ?
"#,
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MessageError::Store(format!("list messages: {e}")))?;

        Ok(rows.iter().map(row_to_record).collect())
    }

    async fn get_by_id(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> Result<Option<MessageRecord>, MessageError> {
        let row = sqlx::query(
            r#"
SELECT message_id, organization_id, title, content, is_active, created_at, updated_at
FROM message
WHERE organization_id = ? AND message_id = ?
"#,
        )
        .bind(organization_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MessageError::Store(format!("query message by id: {e}")))?;

        Ok(row.as_ref().map(row_to_record))
    }

    async fn get_by_title(
        &self,
        organization_id: OrganizationId,
        title: &str,
    ) -> Result<Option<MessageRecord>, MessageError> {
        let row = sqlx::query(
            r#"
SELECT message_id, organization_id, title, content, is_active, created_at, updated_at
FROM message
WHERE organization_id = ? AND title = ?
"#,
        )
        .bind(organization_id)
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MessageError::Store(format!("query message by title: {e}")))?;

        Ok(row.as_ref().map(row_to_record))
    }

    async fn insert(&self, record: &MessageRecord) -> Result<MessageRecord, MessageError> {
        sqlx::query(
            r#"
INSERT INTO message (message_id, organization_id, title, content, is_active, created_at, updated_at)
VALUES (?, ?, ?, ?, ?, ?, ?)
"#,
        )
        .bind(record.message_id)
        .bind(record.organization_id)
        .bind(&record.title)
        .bind(&record.content)
        .bind(record.is_active)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_dup_key(&e) {
                MessageError::DuplicateTitle
            } else {
                MessageError::Store(format!("insert message: {e}"))
            }
        })?;

        Ok(record.clone())
    }

    async fn update(&self, record: &MessageRecord) -> Result<MessageRecord, MessageError> {
        sqlx::query(
            r#"
UPDATE message
SET title = ?, content = ?, is_active = ?, updated_at = ?
WHERE organization_id = ? AND message_id = ?
"#,
        )
        .bind(&record.title)
        .bind(&record.content)
        .bind(record.is_active)
        .bind(record.updated_at)
        .bind(record.organization_id)
        .bind(record.message_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_dup_key(&e) {
                MessageError::DuplicateTitle
            } else {
                MessageError::Store(format!("update message: {e}"))
            }
        })?;

        Ok(record.clone())
    }
}
