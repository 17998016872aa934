use mongodb::{Client, Collection, Database};
use std::error::Error;

pub const USERS: &str = "users";
pub const MASTER_RESUMES: &str = "master_resumes";
pub const JOB_ANALYSES: &str = "job_analyses";

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Extract database name from URI or use default
        let db_name = uri
            .split('/')
            .last()
            .and_then(|s| s.split('?').next())
            .unwrap_or("ResumeTracker");

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { client, db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates the indexes the service relies on. Email uniqueness and the
    /// one-resume-per-user rule are enforced here, at the store level, so
    /// concurrent writers cannot race an application-side existence check.
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::options::IndexOptions;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        let users = self.db.collection::<mongodb::bson::Document>(USERS);

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match users.create_index(email_index).await {
            Ok(_) => log::info!("   ✅ Index created: users(email) unique"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        let resumes = self.db.collection::<mongodb::bson::Document>(MASTER_RESUMES);

        let resume_user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match resumes.create_index(resume_user_index).await {
            Ok(_) => log::info!("   ✅ Index created: master_resumes(user_id) unique"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        let analyses = self.db.collection::<mongodb::bson::Document>(JOB_ANALYSES);

        let analyses_user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .build();

        match analyses.create_index(analyses_user_index).await {
            Ok(_) => log::info!("   ✅ Index created: job_analyses(user_id)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    /// Round-trips a `ping` command, used by the health endpoint to report
    /// store connectivity.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        use mongodb::bson::doc;

        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
