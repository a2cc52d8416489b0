use crate::{database::MongoDB, models::Doctor};
use mongodb::bson::doc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DoctorsResponse {
    pub success: bool,
    pub doctors: Vec<Doctor>,
    pub count: usize,
}

pub async fn add_doctor(db: &MongoDB, mut doctor: Doctor) -> Result<Doctor, String> {
    let collection = db.collection::<Doctor>("doctors");

    let result = collection
        .insert_one(&doctor)
        .await
        .map_err(|e| format!("Failed to create doctor: {}", e))?;

    doctor._id = result.inserted_id.as_object_id();

    Ok(doctor)
}

pub async fn list_doctors(db: &MongoDB) -> Result<DoctorsResponse, String> {
    let collection = db.collection::<Doctor>("doctors");

    let mut cursor = collection
        .find(doc! {})
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut doctors = Vec::new();
    use futures::stream::StreamExt;

    while let Some(result) = cursor.next().await {
        match result {
            Ok(doctor) => doctors.push(doctor),
            Err(e) => log::error!("Error reading doctor: {}", e),
        }
    }

    let count = doctors.len();

    Ok(DoctorsResponse {
        success: true,
        doctors,
        count,
    })
}

pub async fn delete_doctor(db: &MongoDB, email: &str) -> Result<(), String> {
    let collection = db.database().collection::<Doctor>("doctors");

    let result = collection
        .delete_one(doc! { "email": email })
        .await
        .map_err(|e| format!("Failed to delete doctor: {}", e))?;

    if result.deleted_count == 0 {
        return Err(format!("Doctor {} not found", email));
    }

    Ok(())
}
