use chrono::{DateTime, TimeZone, Utc};
use fleet_admin::drivers::{
    DocumentCategory, DriverDocument, DriverId, DriverRecord, VehicleSummary,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) use fleet_admin::drivers::InMemoryDriverRepository;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

fn registered_on(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, month, day, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

fn document(name: &str, category: DocumentCategory) -> DriverDocument {
    DriverDocument {
        name: name.to_string(),
        category,
    }
}

fn vehicle(plate_number: &str, model: &str) -> VehicleSummary {
    VehicleSummary {
        plate_number: plate_number.to_string(),
        model: model.to_string(),
    }
}

/// Demo fleet used by `serve` and `drivers list` until a database adapter is wired in.
pub(crate) fn seed_drivers() -> Vec<DriverRecord> {
    let mut ana = DriverRecord::registered(
        DriverId(1),
        "Ana Popescu",
        "ana.popescu@fleet.example",
        registered_on(1, 14),
    );
    ana.phone = Some("+40 721 000 111".to_string());
    ana.profile_photo = Some("drivers/1/avatar.jpg".to_string());
    ana.is_approved = true;
    ana.average_rating = Some(4.8);
    ana.documents = vec![
        document("Driving licence", DocumentCategory::DrivingLicence),
        document("Identity card", DocumentCategory::IdentityCard),
        document("Criminal record", DocumentCategory::CriminalRecord),
    ];
    ana.vehicles = vec![vehicle("B-101-ANA", "Dacia Logan")];

    let mut bogdan = DriverRecord::registered(
        DriverId(2),
        "Bogdan Ionescu",
        "bogdan.ionescu@fleet.example",
        registered_on(2, 3),
    );
    bogdan.phone = Some("+40 722 333 444".to_string());
    bogdan.documents = vec![document("Driving licence", DocumentCategory::DrivingLicence)];

    let mut anastasia = DriverRecord::registered(
        DriverId(3),
        "Anastasia Marin",
        "anasta@fleet.example",
        registered_on(2, 20),
    );
    anastasia.is_approved = true;
    anastasia.is_suspended = true;
    anastasia.average_rating = Some(3.4);
    anastasia.vehicles = vec![
        vehicle("CJ-22-ANM", "Toyota Corolla"),
        vehicle("CJ-23-ANM", "Skoda Octavia"),
    ];

    let mut cristian = DriverRecord::registered(
        DriverId(4),
        "Cristian Dobre",
        "cristian.dobre@fleet.example",
        registered_on(3, 8),
    );
    cristian.rejection_reason = Some("Incomplete documents".to_string());
    cristian.documents = vec![document("Insurance", DocumentCategory::Insurance)];

    let mut elena = DriverRecord::registered(
        DriverId(5),
        "Elena Vasile",
        "elena.vasile@fleet.example",
        registered_on(3, 21),
    );
    elena.phone = Some("+40 733 555 666".to_string());
    elena.documents_count = Some(4);
    elena.vehicles_count = Some(1);

    vec![ana, bogdan, anastasia, cristian, elena]
}
