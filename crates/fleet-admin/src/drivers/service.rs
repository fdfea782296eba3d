use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::DriverAdminConfig;

use super::domain::{ApprovalDecision, DriverAction, DriverId, DriverRecord, DriverStatus};
use super::filter::{DriverFilter, DriverListParams};
use super::pagination::{Page, PageRequest};
use super::repository::{DriverRepository, RepositoryError};
use super::status::{project, DriverView};

/// One rendered page of the driver listing plus the filters that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct DriverListing {
    pub drivers: Page<DriverView>,
    pub filters: DriverListParams,
    pub total_pages: usize,
}

/// Service composing the filter resolver, repository, and status projector.
pub struct DriverAdminService<R> {
    repository: Arc<R>,
    config: DriverAdminConfig,
}

impl<R> DriverAdminService<R>
where
    R: DriverRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: DriverAdminConfig) -> Self {
        Self { repository, config }
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    /// Reason recorded when a rejection arrives without one.
    pub fn default_rejection_reason(&self) -> &str {
        &self.config.default_rejection_reason
    }

    /// List drivers matching the request's status and search filters.
    pub fn list(&self, params: &DriverListParams) -> Result<DriverListing, DriverServiceError> {
        let filter = DriverFilter::resolve(params);
        self.list_filtered(filter, params.page.as_deref())
    }

    /// List drivers still waiting for a decision, honoring any search term.
    pub fn pending(&self, params: &DriverListParams) -> Result<DriverListing, DriverServiceError> {
        let filter = DriverFilter::resolve(params).with_status(DriverStatus::Pending);
        self.list_filtered(filter, params.page.as_deref())
    }

    fn list_filtered(
        &self,
        filter: DriverFilter,
        raw_page: Option<&str>,
    ) -> Result<DriverListing, DriverServiceError> {
        let request = PageRequest::from_query(raw_page, self.page_size());
        let page = self.repository.query(&filter, request)?;
        let total_pages = page.total_pages();
        let mut filters = filter.params();
        filters.page = Some(page.page.to_string());

        Ok(DriverListing {
            drivers: page.map(|record| DriverView::from_record(&record)),
            filters,
            total_pages,
        })
    }

    /// Fetch one driver with its projected status.
    pub fn get(&self, id: &DriverId) -> Result<DriverView, DriverServiceError> {
        let record = self.fetch_existing(id)?;
        Ok(DriverView::from_record(&record))
    }

    /// Approve a pending driver.
    pub fn approve(&self, id: &DriverId) -> Result<DriverView, DriverServiceError> {
        self.decide(id, ApprovalDecision::Approve)
    }

    /// Reject a pending driver with a non-empty reason.
    pub fn reject(&self, id: &DriverId, reason: &str) -> Result<DriverView, DriverServiceError> {
        let reason = reason.trim();
        if reason.is_empty() {
            warn!(driver_id = %id, "rejection refused: empty reason");
            return Err(ValidationError::EmptyRejectionReason.into());
        }

        self.decide(
            id,
            ApprovalDecision::Reject {
                reason: reason.to_string(),
            },
        )
    }

    fn decide(
        &self,
        id: &DriverId,
        decision: ApprovalDecision,
    ) -> Result<DriverView, DriverServiceError> {
        let action = decision.action();
        let record = self.fetch_existing(id)?;
        let projection = project(&record);
        if !projection.allows(action) {
            warn!(
                driver_id = %id,
                action = action.label(),
                status = projection.status.label(),
                "decision refused for terminal driver"
            );
            return Err(DriverServiceError::Conflict {
                id: *id,
                action,
                current: projection.status,
            });
        }

        let updated = self
            .repository
            .apply_decision(id, &decision)
            .map_err(|err| match err {
                RepositoryError::Conflict { current } => DriverServiceError::Conflict {
                    id: *id,
                    action,
                    current,
                },
                RepositoryError::NotFound => DriverServiceError::NotFound(*id),
                other => DriverServiceError::Storage(other),
            })?;

        let view = DriverView::from_record(&updated);
        info!(
            driver_id = %id,
            action = action.label(),
            status = view.display_status.label(),
            "driver decision applied"
        );
        Ok(view)
    }

    fn fetch_existing(&self, id: &DriverId) -> Result<DriverRecord, DriverServiceError> {
        self.repository
            .fetch(id)?
            .ok_or(DriverServiceError::NotFound(*id))
    }
}

/// Input rejected before any state change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("rejection reason must not be empty")]
    EmptyRejectionReason,
}

/// Error raised by the driver admin service.
#[derive(Debug, thiserror::Error)]
pub enum DriverServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("cannot {} driver {id}: already {current}", .action.label())]
    Conflict {
        id: DriverId,
        action: DriverAction,
        current: DriverStatus,
    },
    #[error("driver {0} not found")]
    NotFound(DriverId),
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}
