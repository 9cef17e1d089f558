use mongodb::{Client, Database};
use tracing::info;

pub async fn init_db(uri: &str, db_name: &str) -> anyhow::Result<Database> {
    let client = Client::with_uri_str(uri)
        .await
        .map_err(|e| anyhow::anyhow!("Mongo connection failed (check MONGO_URI): {e}"))?;
    let db = client.database(db_name);

    info!("Connected to database!");
    Ok(db)
}
