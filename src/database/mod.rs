use mongodb::{Client, Collection, Database};
use std::error::Error;

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        // Timeouts
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Extract database name from URI or use default
        let db_name = uri
            .split('/')
            .last()
            .and_then(|s| s.split('?').next())
            .filter(|s| !s.is_empty())
            .unwrap_or("doctors_portal");

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates the indexes the service relies on.
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::options::IndexOptions;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        // users(email) unique - upsert key
        let users = self.db.collection::<mongodb::bson::Document>("users");

        let users_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match users.create_index(users_index).await {
            Ok(_) => log::info!("   ✅ Index created: users(email)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // bookings(treatment, date, patientName) unique - the submission
        // dedup is check-then-insert, so this index is what actually holds
        // under two identical submissions racing each other
        let bookings = self.db.collection::<mongodb::bson::Document>("bookings");

        let bookings_key_index = IndexModel::builder()
            .keys(doc! { "treatment": 1, "date": 1, "patientName": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match bookings.create_index(bookings_key_index).await {
            Ok(_) => log::info!("   ✅ Index created: bookings(treatment, date, patientName)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // bookings(patientEmail) - patient booking listing
        let bookings_patient_index = IndexModel::builder()
            .keys(doc! { "patientEmail": 1 })
            .build();

        match bookings.create_index(bookings_patient_index).await {
            Ok(_) => log::info!("   ✅ Index created: bookings(patientEmail)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // doctors(email) unique - delete key
        let doctors = self.db.collection::<mongodb::bson::Document>("doctors");

        let doctors_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match doctors.create_index(doctors_index).await {
            Ok(_) => log::info!("   ✅ Index created: doctors(email)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/doctors_portal_test".to_string());

        let db = MongoDB::new(&uri).await;
        assert!(db.is_ok());
    }
}
