use super::record::{ParticipantRecord, StudentId};
use crate::error::Result;
use async_trait::async_trait;

/// Read access to the loaded participant records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Resolves an identifier to at most one record. When the source held
    /// duplicates, the first one loaded is returned.
    async fn find(&self, student_id: &StudentId) -> Result<Option<ParticipantRecord>>;
    /// Every record, in source order.
    async fn all(&self) -> Result<Vec<ParticipantRecord>>;
}

/// Decides whether a caller may see payout data.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credential: &str) -> bool;
}

pub type RecordStoreBox = Box<dyn RecordStore>;
pub type AuthenticatorBox = Box<dyn Authenticator>;
