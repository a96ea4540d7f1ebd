//! Shared builders for unit tests.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use fleetdesk_entity::document::Document;
use fleetdesk_entity::driver::Driver;
use fleetdesk_entity::vehicle::Vehicle;

/// Fixed reference date so boundary assertions are deterministic.
pub(crate) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).expect("valid date")
}

pub(crate) fn vehicle(plate: &str, next_maintenance_date: Option<NaiveDate>) -> Vehicle {
    Vehicle {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        make: "Renault".to_string(),
        model: "Kangoo".to_string(),
        plate: plate.to_string(),
        next_maintenance_date,
        created_at: Utc::now(),
    }
}

pub(crate) fn driver(first_name: &str, last_name: &str) -> Driver {
    Driver {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        created_at: Utc::now(),
    }
}

pub(crate) fn document(title: &str, expiry_date: Option<NaiveDate>) -> Document {
    Document {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        title: title.to_string(),
        document_type: "insurance".to_string(),
        expiry_date,
        vehicle_id: None,
        driver_id: None,
        created_at: Utc::now(),
    }
}

pub(crate) fn document_for_vehicle(
    title: &str,
    expiry_date: Option<NaiveDate>,
    vehicle_id: Uuid,
) -> Document {
    Document {
        vehicle_id: Some(vehicle_id),
        ..document(title, expiry_date)
    }
}

pub(crate) fn document_for_driver(
    title: &str,
    expiry_date: Option<NaiveDate>,
    driver_id: Uuid,
) -> Document {
    Document {
        driver_id: Some(driver_id),
        ..document(title, expiry_date)
    }
}
