use crate::application_port::MessageError;
use crate::domain_model::{MessageId, MessageRecord, OrganizationId};

/// Organization-scoped persistence primitives. No business rules live
/// here, and absence is a normal `None` return, never an error.
#[async_trait::async_trait]
pub trait MessageRepo: Send + Sync {
    async fn list(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<MessageRecord>, MessageError>;

    async fn get_by_id(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> Result<Option<MessageRecord>, MessageError>;

    /// Exact-match title lookup, active rows included or not alike. Used
    /// for the create-time uniqueness check.
    async fn get_by_title(
        &self,
        organization_id: OrganizationId,
        title: &str,
    ) -> Result<Option<MessageRecord>, MessageError>;

    /// Persist a fully-formed record and return the stored copy. Fails
    /// with [`MessageError::DuplicateTitle`] when the backend's unique
    /// `(organization_id, title)` constraint rejects the row.
    async fn insert(&self, record: &MessageRecord) -> Result<MessageRecord, MessageError>;

    /// Whole-row overwrite keyed by `(organization_id, message_id)`.
    /// A rename onto another row's title fails with
    /// [`MessageError::DuplicateTitle`] like `insert` does.
    async fn update(&self, record: &MessageRecord) -> Result<MessageRecord, MessageError>;
}
