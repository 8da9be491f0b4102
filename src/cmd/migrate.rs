use crate::{
    conf::settings,
    pkg::server::state::{db_pool, MIGRATOR},
    prelude::Result,
};

pub async fn apply() -> Result<()> {
    let pool = db_pool()?;
    tracing::debug!("connected to {}", &settings.database_url);
    MIGRATOR.run(&pool).await?;
    println!("Migrations applied successfully");
    Ok(())
}
