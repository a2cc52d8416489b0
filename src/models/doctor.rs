use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Doctor reference record, managed only by admins. `img` is a hosted
/// picture URL uploaded by the portal frontend.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct Doctor {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub _id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub specialty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}
