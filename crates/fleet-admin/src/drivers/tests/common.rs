use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::config::DriverAdminConfig;
use crate::drivers::domain::{
    ApprovalDecision, DocumentCategory, DriverDocument, DriverId, DriverRecord, VehicleSummary,
};
use crate::drivers::filter::DriverFilter;
use crate::drivers::pagination::{Page, PageRequest};
use crate::drivers::repository::{DriverRepository, RepositoryError};
use crate::drivers::service::DriverAdminService;
use crate::drivers::memory::InMemoryDriverRepository;
use crate::drivers::{driver_router, DriverStatus};

pub(super) fn registered_at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn pending_driver(id: u64, name: &str, email: &str, phone: Option<&str>) -> DriverRecord {
    let mut record = DriverRecord::registered(DriverId(id), name, email, registered_at(1));
    record.phone = phone.map(str::to_string);
    record
}

pub(super) fn approved_driver(id: u64, name: &str, email: &str) -> DriverRecord {
    let mut record = pending_driver(id, name, email, None);
    record.is_approved = true;
    record
}

pub(super) fn rejected_driver(id: u64, name: &str, email: &str, reason: &str) -> DriverRecord {
    let mut record = pending_driver(id, name, email, None);
    record.rejection_reason = Some(reason.to_string());
    record
}

/// Mixed fleet covering every status plus suspension and a stale rejection reason.
pub(super) fn fleet() -> Vec<DriverRecord> {
    let mut ana = approved_driver(1, "Ana Popescu", "ana.popescu@example.com");
    ana.phone = Some("+40 721 000 111".to_string());
    ana.average_rating = Some(4.6);
    ana.documents = vec![
        DriverDocument {
            name: "Driving licence".to_string(),
            category: DocumentCategory::DrivingLicence,
        },
        DriverDocument {
            name: "Criminal record".to_string(),
            category: DocumentCategory::CriminalRecord,
        },
    ];
    ana.vehicles = vec![VehicleSummary {
        plate_number: "B-101-ANA".to_string(),
        model: "Dacia Logan".to_string(),
    }];

    let mut bogdan = pending_driver(2, "Bogdan Ionescu", "bogdan@example.com", Some("0722 333 444"));
    bogdan.documents_count = Some(3);
    bogdan.vehicles_count = Some(0);

    let mut anastasia = pending_driver(3, "Anastasia Marin", "anasta@example.com", None);
    anastasia.is_suspended = true;

    let cristi = rejected_driver(4, "Cristi Dobre", "cristi@example.com", "incomplete docs");

    let mut stale = approved_driver(5, "Dana Stan", "dana@example.com");
    stale.rejection_reason = Some("blurred licence photo".to_string());

    let mut blank_reason = pending_driver(6, "Emil Radu", "emil_radu@example.com", Some("0733 100%"));
    blank_reason.rejection_reason = Some(String::new());

    vec![ana, bogdan, anastasia, cristi, stale, blank_reason]
}

pub(super) fn admin_config() -> DriverAdminConfig {
    DriverAdminConfig::default()
}

pub(super) fn build_service(
    records: Vec<DriverRecord>,
) -> (DriverAdminService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::seeded(records));
    let service = DriverAdminService::new(repository.clone(), admin_config());
    (service, repository)
}

pub(super) type MemoryRepository = InMemoryDriverRepository;

/// Current stored state of a driver, for asserting on what a decision wrote.
pub(super) trait StoredRecord {
    fn stored(&self, id: u64) -> DriverRecord;
}

impl StoredRecord for InMemoryDriverRepository {
    fn stored(&self, id: u64) -> DriverRecord {
        self.fetch(&DriverId(id))
            .expect("store readable")
            .expect("record present")
    }
}

/// Reads a pending driver but loses the race when writing, as if another admin decided first.
pub(super) struct RacingRepository {
    pub(super) winner: DriverStatus,
}

impl DriverRepository for RacingRepository {
    fn query(
        &self,
        _filter: &DriverFilter,
        page: PageRequest,
    ) -> Result<Page<DriverRecord>, RepositoryError> {
        Ok(Page::empty(page))
    }

    fn fetch(&self, id: &DriverId) -> Result<Option<DriverRecord>, RepositoryError> {
        Ok(Some(DriverRecord::registered(
            *id,
            "Racing Driver",
            "race@example.com",
            registered_at(2),
        )))
    }

    fn apply_decision(
        &self,
        _id: &DriverId,
        _decision: &ApprovalDecision,
    ) -> Result<DriverRecord, RepositoryError> {
        Err(RepositoryError::Conflict {
            current: self.winner,
        })
    }
}

pub(super) struct UnavailableRepository;

impl DriverRepository for UnavailableRepository {
    fn query(
        &self,
        _filter: &DriverFilter,
        _page: PageRequest,
    ) -> Result<Page<DriverRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &DriverId) -> Result<Option<DriverRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn apply_decision(
        &self,
        _id: &DriverId,
        _decision: &ApprovalDecision,
    ) -> Result<DriverRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn driver_router_with_service(
    service: DriverAdminService<MemoryRepository>,
) -> axum::Router {
    driver_router(Arc::new(service))
}
