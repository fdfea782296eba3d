//! Driver account administration: listing filters, status projection, and approval decisions.

pub mod domain;
pub mod filter;
pub mod memory;
pub mod pagination;
pub mod repository;
pub mod router;
pub mod service;
pub mod status;

#[cfg(test)]
mod tests;

pub use domain::{
    ApprovalDecision, DocumentCategory, DriverAction, DriverDocument, DriverId, DriverRecord,
    DriverStatus, VehicleSummary, MAX_RATING,
};
pub use filter::{parse_status_filter, DriverFilter, DriverListParams, SearchTerm};
pub use memory::InMemoryDriverRepository;
pub use pagination::{Page, PageRequest, DEFAULT_PAGE_SIZE};
pub use repository::{DriverRepository, RepositoryError};
pub use router::{driver_router, RejectBodyError, RejectRequest};
pub use service::{DriverAdminService, DriverListing, DriverServiceError, ValidationError};
pub use status::{project, project_status, rating_stars, DriverView, StatusProjection};
