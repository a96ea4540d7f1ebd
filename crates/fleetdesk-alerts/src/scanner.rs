//! Due-date scanning for vehicle maintenance and document expiry.
//!
//! Pure filtering over records the gateway returns; no side effects.

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use fleetdesk_entity::document::Document;
use fleetdesk_entity::vehicle::Vehicle;

/// Lookahead horizon in calendar days. Items whose relevant date falls
/// within this window of the reference date count as due.
pub const DUE_HORIZON_DAYS: i64 = 7;

/// Last date (inclusive) of the due window starting at `today`.
pub fn horizon_end(today: NaiveDate) -> NaiveDate {
    today + Duration::days(DUE_HORIZON_DAYS)
}

/// Whether a date qualifies as due: present and on or before the bound.
/// There is no lower bound; overdue items stay due until their date is
/// updated.
pub fn is_due(date: Option<NaiveDate>, on_or_before: NaiveDate) -> bool {
    date.is_some_and(|d| d <= on_or_before)
}

/// A vehicle whose maintenance date falls within the due window,
/// carrying what the notification needs.
#[derive(Debug, Clone)]
pub struct DueVehicle {
    /// Vehicle identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Manufacturer name.
    pub make: String,
    /// Model name.
    pub model: String,
    /// License plate.
    pub plate: String,
    /// The maintenance date that made the vehicle due.
    pub due_date: NaiveDate,
}

/// A document whose expiry date falls within the due window, carrying
/// what the notification needs including the resolved display context.
#[derive(Debug, Clone)]
pub struct DueDocument {
    /// Document identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Document title.
    pub title: String,
    /// Free-form document type label.
    pub document_type: String,
    /// Resolved display context: the linked vehicle's plate, the linked
    /// driver's full name, or empty when neither resolves.
    pub entity_name: String,
    /// The expiry date that made the document due.
    pub expiry_date: NaiveDate,
}

impl DueDocument {
    /// Build a due item from a document and its resolved display
    /// context. Returns `None` when the document has no expiry date.
    pub fn from_document(document: &Document, entity_name: String) -> Option<Self> {
        Some(Self {
            id: document.id,
            user_id: document.user_id,
            title: document.title.clone(),
            document_type: document.document_type.clone(),
            entity_name,
            expiry_date: document.expiry_date?,
        })
    }
}

/// Filter vehicles down to the due set.
pub fn due_vehicles(vehicles: Vec<Vehicle>, on_or_before: NaiveDate) -> Vec<DueVehicle> {
    vehicles
        .into_iter()
        .filter_map(|v| {
            let due_date = v.next_maintenance_date?;
            if due_date > on_or_before {
                return None;
            }
            Some(DueVehicle {
                id: v.id,
                user_id: v.user_id,
                make: v.make,
                model: v.model,
                plate: v.plate,
                due_date,
            })
        })
        .collect()
}

/// Filter documents down to the due set. Display-context resolution
/// happens later, per item, in the job driver.
pub fn due_documents(documents: Vec<Document>, on_or_before: NaiveDate) -> Vec<Document> {
    documents
        .into_iter()
        .filter(|d| is_due(d.expiry_date, on_or_before))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{document, today, vehicle};

    #[test]
    fn test_horizon_end() {
        let reference = NaiveDate::from_ymd_opt(2026, 3, 10).expect("valid date");
        assert_eq!(
            horizon_end(reference),
            NaiveDate::from_ymd_opt(2026, 3, 17).expect("valid date")
        );
    }

    #[test]
    fn test_vehicle_due_at_horizon_boundary() {
        let reference = today();
        let bound = horizon_end(reference);

        let at_bound = vehicle("AB-123-CD", Some(reference + Duration::days(7)));
        let past_bound = vehicle("EF-456-GH", Some(reference + Duration::days(8)));
        let overdue = vehicle("IJ-789-KL", Some(reference - Duration::days(1)));

        let due = due_vehicles(vec![at_bound, past_bound, overdue], bound);
        let plates: Vec<&str> = due.iter().map(|d| d.plate.as_str()).collect();
        assert_eq!(plates, vec!["AB-123-CD", "IJ-789-KL"]);
    }

    #[test]
    fn test_vehicle_without_date_never_due() {
        let reference = today();
        let due = due_vehicles(vec![vehicle("AB-123-CD", None)], horizon_end(reference));
        assert!(due.is_empty());
    }

    #[test]
    fn test_due_vehicle_carries_display_fields() {
        let reference = today();
        let v = vehicle("AB-123-CD", Some(reference + Duration::days(3)));
        let expected_date = reference + Duration::days(3);

        let due = due_vehicles(vec![v], horizon_end(reference));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].plate, "AB-123-CD");
        assert_eq!(due[0].due_date, expected_date);
    }

    #[test]
    fn test_document_due_boundaries() {
        let reference = today();
        let bound = horizon_end(reference);

        let soon = document("Assurance", Some(reference + Duration::days(2)));
        let later = document("Carte grise", Some(reference + Duration::days(10)));
        let undated = document("Permis", None);

        let due = due_documents(vec![soon, later, undated], bound);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].title, "Assurance");
    }

    #[test]
    fn test_is_due_has_no_lower_bound() {
        let reference = today();
        assert!(is_due(
            Some(reference - Duration::days(365)),
            horizon_end(reference)
        ));
        assert!(!is_due(None, horizon_end(reference)));
    }
}
