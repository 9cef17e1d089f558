use crate::{adapters::persistence::MongoPersistence, infra::db::init_db};

pub mod app;
pub mod config;
pub mod db;
pub mod setup;

pub async fn mongo_persistence(uri: &str, db_name: &str) -> anyhow::Result<MongoPersistence> {
    let db = init_db(uri, db_name).await?;
    Ok(MongoPersistence::new(db))
}
