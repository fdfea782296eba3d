//! Display status projection for driver records.
//!
//! The stored flags overlap (`is_approved`, `rejection_reason`), so the status is resolved
//! here once, in a fixed order, and carried as a [`DriverStatus`] everywhere else.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{DriverAction, DriverId, DriverRecord, DriverStatus, MAX_RATING};

/// Status, suspension badge, and legal actions for one driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusProjection {
    pub status: DriverStatus,
    pub suspended: bool,
    pub actions: &'static [DriverAction],
}

impl StatusProjection {
    pub fn allows(&self, action: DriverAction) -> bool {
        self.actions.contains(&action)
    }
}

/// Resolve the display status from the raw approval flags.
///
/// Approval is checked before the rejection reason: an approved driver with a leftover
/// reason on record is still `Approved`.
pub fn project_status(is_approved: bool, rejection_reason: Option<&str>) -> DriverStatus {
    if is_approved {
        DriverStatus::Approved
    } else if rejection_reason.is_some_and(|reason| !reason.is_empty()) {
        DriverStatus::Rejected
    } else {
        DriverStatus::Pending
    }
}

pub fn project(record: &DriverRecord) -> StatusProjection {
    let status = project_status(record.is_approved, record.rejection_reason.as_deref());
    StatusProjection {
        status,
        suspended: record.is_suspended,
        actions: status.enabled_actions(),
    }
}

/// Row model handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverView {
    pub id: DriverId,
    pub name: String,
    pub initial: String,
    pub email: String,
    pub phone: Option<String>,
    pub profile_photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub documents_count: u32,
    pub vehicles_count: u32,
    pub average_rating: f32,
    pub rating_stars: u8,
    pub rating_label: String,
    pub display_status: DriverStatus,
    pub is_suspended: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub enabled_actions: Vec<DriverAction>,
}

impl DriverView {
    pub fn from_record(record: &DriverRecord) -> Self {
        let projection = project(record);
        let rating = record.rating();
        // Only surface the reason when the driver actually reads as rejected.
        let rejection_reason = match projection.status {
            DriverStatus::Rejected => record.active_rejection_reason().map(str::to_string),
            DriverStatus::Approved | DriverStatus::Pending => None,
        };

        Self {
            id: record.id,
            name: record.name.clone(),
            initial: record.initial(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            profile_photo: record.profile_photo.clone(),
            created_at: record.created_at,
            documents_count: record.documents_count(),
            vehicles_count: record.vehicles_count(),
            average_rating: rating,
            rating_stars: rating_stars(rating),
            rating_label: format!("{rating:.1}"),
            display_status: projection.status,
            is_suspended: projection.suspended,
            rejection_reason,
            enabled_actions: projection.actions.to_vec(),
        }
    }
}

impl From<&DriverRecord> for DriverView {
    fn from(record: &DriverRecord) -> Self {
        Self::from_record(record)
    }
}

/// Whole stars to fill, rounding half away from zero.
pub fn rating_stars(rating: f32) -> u8 {
    if rating.is_nan() {
        return 0;
    }
    rating.round().clamp(0.0, MAX_RATING) as u8
}
