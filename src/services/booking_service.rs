use crate::{database::MongoDB, models::Booking};
use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SubmitBookingResponse {
    pub success: bool,
    pub booking: Booking,
}

#[derive(Debug, Serialize)]
pub struct BookingsResponse {
    pub success: bool,
    pub bookings: Vec<Booking>,
    pub count: usize,
}

/// Identifying key of a submission. Keys here must be spelled exactly like
/// the stored document fields, or the duplicate check silently never matches.
fn dedup_filter(booking: &Booking) -> Document {
    doc! {
        "treatment": &booking.treatment,
        "date": &booking.date,
        "patientName": &booking.patient_name,
    }
}

/// Booking submission with the duplicate check. The identifying key is
/// (treatment, date, patientName); re-submitting the same appointment hands
/// back the stored record with success=false instead of inserting again.
pub async fn submit_booking(
    db: &MongoDB,
    mut booking: Booking,
) -> Result<SubmitBookingResponse, String> {
    let collection = db.collection::<Booking>("bookings");

    if let Some(existing) = collection
        .find_one(dedup_filter(&booking))
        .await
        .map_err(|e| format!("Database error: {}", e))?
    {
        return Ok(SubmitBookingResponse {
            success: false,
            booking: existing,
        });
    }

    let result = collection
        .insert_one(&booking)
        .await
        .map_err(|e| format!("Failed to create booking: {}", e))?;

    booking._id = result.inserted_id.as_object_id();

    Ok(SubmitBookingResponse {
        success: true,
        booking,
    })
}

pub async fn bookings_by_patient(
    db: &MongoDB,
    patient_email: &str,
) -> Result<BookingsResponse, String> {
    let collection = db.collection::<Booking>("bookings");

    let mut cursor = collection
        .find(doc! { "patientEmail": patient_email })
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

    let count = bookings.len();

    Ok(BookingsResponse {
        success: true,
        bookings,
        count,
    })
}

pub async fn booking_by_id(db: &MongoDB, id: &str) -> Result<Option<Booking>, String> {
    let oid = ObjectId::parse_str(id).map_err(|e| format!("Invalid booking id: {}", e))?;

    let collection = db.collection::<Booking>("bookings");

    collection
        .find_one(doc! { "_id": oid })
        .await
        .map_err(|e| format!("Database error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_booking(patient_name: &str) -> Booking {
        Booking {
            _id: None,
            treatment: "Teeth Whitening".to_string(),
            date: "2024-03-18".to_string(),
            slot: "10.10am-10.40am".to_string(),
            patient_name: patient_name.to_string(),
            patient_email: "dedup@example.com".to_string(),
            phone: Some("11 98888-7777".to_string()),
        }
    }

    #[test]
    fn test_dedup_filter_matches_stored_field_names() {
        let booking = test_booking("Filter Check");

        let filter = dedup_filter(&booking);
        let stored = mongodb::bson::to_document(&booking).unwrap();

        for key in filter.keys() {
            assert!(
                stored.contains_key(key),
                "dedup filter key {} must exist on stored documents",
                key
            );
        }
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_submit_booking_dedup() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/doctors_portal_test".to_string());
        let db = MongoDB::new(&uri).await.unwrap();

        let collection = db.collection::<Booking>("bookings");
        collection
            .delete_many(doc! { "patientName": "Dedup Test Patient" })
            .await
            .unwrap();

        let booking = test_booking("Dedup Test Patient");

        let first = submit_booking(&db, booking.clone()).await.unwrap();
        assert!(first.success);
        assert!(first.booking._id.is_some());

        let second = submit_booking(&db, booking.clone()).await.unwrap();
        assert!(!second.success);
        assert_eq!(second.booking._id, first.booking._id);

        let count = collection
            .count_documents(doc! { "patientName": "Dedup Test Patient" })
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_same_patient_different_date_is_not_a_duplicate() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/doctors_portal_test".to_string());
        let db = MongoDB::new(&uri).await.unwrap();

        let collection = db.collection::<Booking>("bookings");
        collection
            .delete_many(doc! { "patientName": "Two Dates Patient" })
            .await
            .unwrap();

        let monday = test_booking("Two Dates Patient");
        let mut tuesday = test_booking("Two Dates Patient");
        tuesday.date = "2024-03-19".to_string();

        assert!(submit_booking(&db, monday).await.unwrap().success);
        assert!(submit_booking(&db, tuesday).await.unwrap().success);
    }
}
