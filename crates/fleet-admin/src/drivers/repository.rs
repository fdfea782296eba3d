use super::domain::{ApprovalDecision, DriverId, DriverRecord, DriverStatus};
use super::filter::DriverFilter;
use super::pagination::{Page, PageRequest};

/// Storage abstraction so the admin service can be exercised in isolation.
pub trait DriverRepository: Send + Sync {
    /// Drivers matching `filter`, ordered by id, cut to the requested page.
    fn query(
        &self,
        filter: &DriverFilter,
        page: PageRequest,
    ) -> Result<Page<DriverRecord>, RepositoryError>;

    fn fetch(&self, id: &DriverId) -> Result<Option<DriverRecord>, RepositoryError>;

    /// Apply an approval decision as one atomic update.
    ///
    /// Implementations must re-check that the stored driver still projects to
    /// [`DriverStatus::Pending`] inside the same critical section or transaction, and
    /// return [`RepositoryError::Conflict`] with the current status otherwise.
    fn apply_decision(
        &self,
        id: &DriverId,
        decision: &ApprovalDecision,
    ) -> Result<DriverRecord, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("driver is already {current}")]
    Conflict { current: DriverStatus },
    #[error("driver not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
