use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_RATING: f32 = 5.0;

/// Identifier wrapper for driver accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverId(pub u64);

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored driver account as the repository hands it over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverRecord {
    pub id: DriverId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub profile_photo: Option<String>,
    pub is_approved: bool,
    pub rejection_reason: Option<String>,
    pub is_suspended: bool,
    /// Pre-aggregated count; falls back to `documents.len()` when absent.
    pub documents_count: Option<u32>,
    pub vehicles_count: Option<u32>,
    #[serde(default)]
    pub documents: Vec<DriverDocument>,
    #[serde(default)]
    pub vehicles: Vec<VehicleSummary>,
    pub average_rating: Option<f32>,
    pub created_at: DateTime<Utc>,
}

impl DriverRecord {
    /// Freshly registered driver: not approved, no rejection, not suspended.
    pub fn registered(
        id: DriverId,
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: None,
            profile_photo: None,
            is_approved: false,
            rejection_reason: None,
            is_suspended: false,
            documents_count: None,
            vehicles_count: None,
            documents: Vec::new(),
            vehicles: Vec::new(),
            average_rating: None,
            created_at,
        }
    }

    /// Rejection reason only when it carries text.
    pub fn active_rejection_reason(&self) -> Option<&str> {
        self.rejection_reason
            .as_deref()
            .filter(|reason| !reason.is_empty())
    }

    pub fn documents_count(&self) -> u32 {
        self.documents_count
            .unwrap_or_else(|| saturating_len(self.documents.len()))
    }

    pub fn vehicles_count(&self) -> u32 {
        self.vehicles_count
            .unwrap_or_else(|| saturating_len(self.vehicles.len()))
    }

    /// Average rating clamped to `[0, 5]`; absent or NaN ratings read as zero.
    pub fn rating(&self) -> f32 {
        match self.average_rating {
            Some(value) if !value.is_nan() => value.clamp(0.0, MAX_RATING),
            _ => 0.0,
        }
    }

    /// Uppercased first character of the name, used for avatar placeholders.
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map(|first| first.to_uppercase().collect())
            .unwrap_or_default()
    }
}

fn saturating_len(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Uploaded driver document; only the metadata the listing needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverDocument {
    pub name: String,
    pub category: DocumentCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    DrivingLicence,
    IdentityCard,
    CriminalRecord,
    VehicleRegistration,
    Insurance,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSummary {
    pub plate_number: String,
    pub model: String,
}

/// Admin decision applied to a pending driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ApprovalDecision {
    Approve,
    Reject { reason: String },
}

impl ApprovalDecision {
    pub fn action(&self) -> DriverAction {
        match self {
            ApprovalDecision::Approve => DriverAction::Approve,
            ApprovalDecision::Reject { .. } => DriverAction::Reject,
        }
    }

    /// Write the decision onto a record in one step.
    ///
    /// Approval clears any stale rejection reason so the stored flags never disagree.
    pub fn apply_to(&self, record: &mut DriverRecord) {
        match self {
            ApprovalDecision::Approve => {
                record.is_approved = true;
                record.rejection_reason = None;
            }
            ApprovalDecision::Reject { reason } => {
                record.rejection_reason = Some(reason.clone());
            }
        }
    }
}

/// Single lifecycle label derived from the stored approval flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    Approved,
    Pending,
    Rejected,
}

impl DriverStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DriverStatus::Approved => "approved",
            DriverStatus::Pending => "pending",
            DriverStatus::Rejected => "rejected",
        }
    }

    /// Transitions an admin may trigger from this status.
    pub const fn enabled_actions(self) -> &'static [DriverAction] {
        match self {
            DriverStatus::Pending => &[DriverAction::Approve, DriverAction::Reject],
            DriverStatus::Approved | DriverStatus::Rejected => &[],
        }
    }

    pub const fn is_terminal(self) -> bool {
        !matches!(self, DriverStatus::Pending)
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverAction {
    Approve,
    Reject,
}

impl DriverAction {
    pub const fn label(self) -> &'static str {
        match self {
            DriverAction::Approve => "approve",
            DriverAction::Reject => "reject",
        }
    }
}
