use crate::{database::MongoDB, models::User, services::token_service};
use mongodb::bson::doc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpsertUserRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UpsertUserResponse {
    pub success: bool,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub success: bool,
    pub users: Vec<User>,
    pub count: usize,
}

/// Upsert the profile keyed by email and hand back a fresh access token.
/// Role is never touched here - promotion has its own path.
pub async fn upsert_user(
    db: &MongoDB,
    email: &str,
    request: &UpsertUserRequest,
) -> Result<UpsertUserResponse, String> {
    let collection = db.collection::<User>("users");

    let filter = doc! { "email": email };
    let mut set = doc! { "email": email };
    if let Some(name) = &request.name {
        set.insert("name", name.as_str());
    }

    let options = mongodb::options::UpdateOptions::builder()
        .upsert(true)
        .build();

    collection
        .update_one(filter, doc! { "$set": set })
        .with_options(options)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let token = token_service::issue_access_token(email)?;

    Ok(UpsertUserResponse {
        success: true,
        token,
    })
}

/// Role lookup used by the admin gate and GET /admin/{email}. An email with
/// no user document simply counts as not-admin.
pub async fn is_admin(db: &MongoDB, email: &str) -> Result<bool, String> {
    let collection = db.collection::<User>("users");

    let user = collection
        .find_one(doc! { "email": email })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(user.map(|u| u.role.is_admin()).unwrap_or(false))
}

/// Grant the admin role to an existing user.
pub async fn set_admin_role(db: &MongoDB, email: &str) -> Result<(), String> {
    let collection = db.collection::<User>("users");

    let result = collection
        .update_one(doc! { "email": email }, doc! { "$set": { "role": "admin" } })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    if result.matched_count == 0 {
        return Err(format!("User {} not found", email));
    }

    Ok(())
}

pub async fn list_users(db: &MongoDB) -> Result<UsersResponse, String> {
    let collection = db.collection::<User>("users");

    let mut cursor = collection
        .find(doc! {})
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut users = Vec::new();
    use futures::stream::StreamExt;

    while let Some(result) = cursor.next().await {
        match result {
            Ok(user) => users.push(user),
            Err(e) => log::error!("Error reading user: {}", e),
        }
    }

    let count = users.len();

    Ok(UsersResponse {
        success: true,
        users,
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_upsert_then_promote() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/doctors_portal_test".to_string());
        let db = MongoDB::new(&uri).await.unwrap();

        let email = "promote-test@example.com";
        db.collection::<User>("users")
            .delete_many(doc! { "email": email })
            .await
            .unwrap();

        let request = UpsertUserRequest {
            name: Some("Promote Test".to_string()),
        };
        let response = upsert_user(&db, email, &request).await.unwrap();
        assert!(response.success);
        assert!(!response.token.is_empty());

        // Fresh upsert starts without the admin role
        assert!(!is_admin(&db, email).await.unwrap());

        set_admin_role(&db, email).await.unwrap();
        assert!(is_admin(&db, email).await.unwrap());
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_unknown_email_is_not_admin() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/doctors_portal_test".to_string());
        let db = MongoDB::new(&uri).await.unwrap();

        // No document at all - must be a clean "not admin", not a fault
        let admin = is_admin(&db, "nobody-here@example.com").await.unwrap();
        assert!(!admin);
    }
}
