use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Treatment offered by the clinic. `slots` is the full daily slot catalog
/// in display order, not date-specific.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Service {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,
    pub name: String,
    pub slots: Vec<String>,
}

/// Projection returned by GET /services — the portal menu only needs names.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceName {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,
    pub name: String,
}
