use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Appointment booking. Field names on the wire and in MongoDB are camelCase
/// because that is what the portal frontend submits and queries by.
///
/// `date` is an opaque string key (the frontend's formatted day); bookings
/// are grouped by exact string equality on it.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub _id: Option<ObjectId>,
    pub treatment: String,
    pub date: String,
    pub slot: String,
    pub patient_name: String,
    pub patient_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = r#"{
            "treatment": "Teeth Cleaning",
            "date": "2024-01-05",
            "slot": "10am",
            "patientName": "Ana Souza",
            "patientEmail": "ana@example.com",
            "phone": "11 99999-0000"
        }"#;

        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.patient_name, "Ana Souza");
        assert_eq!(booking.patient_email, "ana@example.com");

        let value = serde_json::to_value(&booking).unwrap();
        assert!(value.get("patientName").is_some());
        assert!(value.get("patient_name").is_none());
    }
}
