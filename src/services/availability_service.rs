use crate::{
    database::MongoDB,
    models::{Booking, Service},
    services::catalog_service,
};
use mongodb::bson::doc;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub success: bool,
    pub date: String,
    pub services: Vec<Service>,
    pub count: usize,
}

/// GET /available - the catalog with every slot already booked on `date`
/// removed per service.
pub async fn get_available_slots(db: &MongoDB, date: &str) -> Result<AvailabilityResponse, String> {
    // step 1: full service catalog
    let services = catalog_service::all_services(db).await?;

    // step 2: bookings already taken on that date
    let collection = db.collection::<Booking>("bookings");

    let mut cursor = collection
        .find(doc! { "date": date })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut bookings = Vec::new();
    use futures::stream::StreamExt;

    while let Some(result) = cursor.next().await {
        match result {
            Ok(booking) => bookings.push(booking),
            Err(e) => log::error!("Error reading booking: {}", e),
        }
    }

    // step 3: subtract booked slots per service
    let services = compute_available_slots(date, services, &bookings);
    let count = services.len();

    Ok(AvailabilityResponse {
        success: true,
        date: date.to_string(),
        services,
        count,
    })
}

/// Drop from each service the slots booked for it on `date`. The filter is
/// stable - remaining slots keep their catalog order - and a slot booked
/// twice is removed once. A date string matching no bookings (including a
/// malformed one) leaves every service fully available.
pub fn compute_available_slots(
    date: &str,
    services: Vec<Service>,
    bookings: &[Booking],
) -> Vec<Service> {
    services
        .into_iter()
        .map(|mut service| {
            let booked: HashSet<&str> = bookings
                .iter()
                .filter(|booking| booking.date == date && booking.treatment == service.name)
                .map(|booking| booking.slot.as_str())
                .collect();

            service.slots.retain(|slot| !booked.contains(slot.as_str()));
            service
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(name: &str, slots: &[&str]) -> Service {
        Service {
            _id: None,
            name: name.to_string(),
            slots: slots.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn booking(treatment: &str, date: &str, slot: &str) -> Booking {
        Booking {
            _id: None,
            treatment: treatment.to_string(),
            date: date.to_string(),
            slot: slot.to_string(),
            patient_name: "Ana Souza".to_string(),
            patient_email: "ana@example.com".to_string(),
            phone: None,
        }
    }

    #[test]
    fn test_booked_slot_removed() {
        let services = vec![service("Teeth Cleaning", &["9am", "10am", "11am"])];
        let bookings = vec![booking("Teeth Cleaning", "2024-01-05", "10am")];

        let available = compute_available_slots("2024-01-05", services, &bookings);

        assert_eq!(available[0].slots, vec!["9am", "11am"]);
    }

    #[test]
    fn test_no_bookings_leaves_catalog_unchanged() {
        let services = vec![
            service("Teeth Cleaning", &["9am", "10am", "11am"]),
            service("Teeth Whitening", &["2pm", "3pm"]),
        ];

        let available = compute_available_slots("2024-01-05", services, &[]);

        assert_eq!(available[0].slots, vec!["9am", "10am", "11am"]);
        assert_eq!(available[1].slots, vec!["2pm", "3pm"]);
    }

    #[test]
    fn test_other_dates_do_not_affect_availability() {
        let services = vec![service("Teeth Cleaning", &["9am", "10am", "11am"])];
        let bookings = vec![
            booking("Teeth Cleaning", "2024-01-04", "9am"),
            booking("Teeth Cleaning", "2024-01-06", "10am"),
        ];

        let available = compute_available_slots("2024-01-05", services, &bookings);

        assert_eq!(available[0].slots, vec!["9am", "10am", "11am"]);
    }

    #[test]
    fn test_other_services_do_not_affect_availability() {
        let services = vec![
            service("Teeth Cleaning", &["9am", "10am"]),
            service("Root Canal", &["9am", "10am"]),
        ];
        let bookings = vec![booking("Root Canal", "2024-01-05", "9am")];

        let available = compute_available_slots("2024-01-05", services, &bookings);

        assert_eq!(available[0].slots, vec!["9am", "10am"]);
        assert_eq!(available[1].slots, vec!["10am"]);
    }

    #[test]
    fn test_double_booked_slot_removed_once() {
        let services = vec![service("Teeth Cleaning", &["9am", "10am", "11am"])];
        let bookings = vec![
            booking("Teeth Cleaning", "2024-01-05", "10am"),
            booking("Teeth Cleaning", "2024-01-05", "10am"),
        ];

        let available = compute_available_slots("2024-01-05", services, &bookings);

        assert_eq!(available[0].slots, vec!["9am", "11am"]);
    }

    #[test]
    fn test_slot_order_preserved() {
        // Catalog order is display order, not sorted order
        let services = vec![service("Teeth Cleaning", &["1pm", "8am", "10am"])];
        let bookings = vec![booking("Teeth Cleaning", "2024-01-05", "8am")];

        let available = compute_available_slots("2024-01-05", services, &bookings);

        assert_eq!(available[0].slots, vec!["1pm", "10am"]);
    }

    #[test]
    fn test_malformed_date_gets_full_catalog() {
        let services = vec![service("Teeth Cleaning", &["9am", "10am"])];
        let bookings = vec![booking("Teeth Cleaning", "2024-01-05", "9am")];

        let available = compute_available_slots("not-a-date", services, &bookings);

        assert_eq!(available[0].slots, vec!["9am", "10am"]);
    }
}
