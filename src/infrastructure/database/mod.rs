use std::{sync::Arc, time::Duration};

use anyhow::Result;
use sqlx::{
    MySql, Pool,
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
};

use crate::config::DatabaseConfig;

pub type DbPool = Pool<MySql>;
pub type DbPoolManager = Arc<DbPool>;

const MAX_CONNECTIONS: u32 = 5;
const MYSQL_PORT: u16 = 3306;

fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
    let options = MySqlConnectOptions::new()
        .username(&config.username)
        .password(&config.password)
        .database(&config.database)
        .charset("utf8mb4");

    match &config.socket {
        Some(socket) => options.socket(socket),
        None => options.host(&config.host).port(MYSQL_PORT),
    }
}

pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPoolManager> {
    let pool = MySqlPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .max_lifetime(Duration::from_secs(30 * 60)) // 30 minutes
        .idle_timeout(Duration::from_secs(10 * 60)) // 10 minutes
        .acquire_timeout(Duration::from_secs(5))
        .test_before_acquire(true)
        .after_connect(|conn, _| {
            Box::pin(async move {
                // timestamps are stored and read back as utc
                sqlx::query("set time_zone='+00:00'")
                    .execute(conn)
                    .await?;

                Ok(())
            })
        })
        .connect_with(connect_options(config))
        .await?;

    Ok(Arc::new(pool))
}
