use crate::{
    database::MongoDB,
    models::{Service, ServiceName},
};
use mongodb::bson::doc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ServiceNamesResponse {
    pub success: bool,
    pub services: Vec<ServiceName>,
    pub count: usize,
}

/// GET /services - names only, projected server-side.
pub async fn list_service_names(db: &MongoDB) -> Result<ServiceNamesResponse, String> {
    let collection = db.collection::<ServiceName>("services");

    let options = mongodb::options::FindOptions::builder()
        .projection(doc! { "name": 1 })
        .build();

    let mut cursor = collection
        .find(doc! {})
        .with_options(options)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut services = Vec::new();
    use futures::stream::StreamExt;

    while let Some(result) = cursor.next().await {
        match result {
            Ok(service) => services.push(service),
            Err(e) => log::error!("Error reading service: {}", e),
        }
    }

    let count = services.len();

    Ok(ServiceNamesResponse {
        success: true,
        services,
        count,
    })
}

/// Full catalog with slot lists, in collection order.
pub async fn all_services(db: &MongoDB) -> Result<Vec<Service>, String> {
    let collection = db.collection::<Service>("services");

    let mut cursor = collection
        .find(doc! {})
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut services = Vec::new();
    use futures::stream::StreamExt;

    while let Some(result) = cursor.next().await {
        match result {
            Ok(service) => services.push(service),
            Err(e) => log::error!("Error reading service: {}", e),
        }
    }

    Ok(services)
}
