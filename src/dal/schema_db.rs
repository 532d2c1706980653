use sqlx::{Connection, Executor, MySqlConnection, MySqlPool};

use crate::configuration::DatabaseSettings;

/// Creates the destination database if missing. Uses a server-level
/// connection because the database itself may not exist yet.
pub async fn ensure_database(settings: &DatabaseSettings) -> Result<(), sqlx::Error> {
    let mut connection = MySqlConnection::connect_with(&settings.without_db()).await?;
    connection
        .execute(format!("CREATE DATABASE IF NOT EXISTS `{}`", settings.database_name).as_str())
        .await?;
    log::info!("Database {} created successfully.", settings.database_name);
    Ok(())
}

/// Creates the destination table if missing. Idempotent; safe to run on
/// every pipeline invocation.
pub async fn ensure_table(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS largest_companies (
            id INT AUTO_INCREMENT PRIMARY KEY,
            `rank` INT,
            name VARCHAR(255) NOT NULL,
            industry VARCHAR(255),
            revenue_billions DECIMAL(10,2),
            employees INT,
            hq_location VARCHAR(255),
            hq_city VARCHAR(255),
            hq_state VARCHAR(100),
            industry_category VARCHAR(100),
            extracted_at DATETIME,
            UNIQUE KEY unique_company (name, extracted_at)
        )
        "#,
    )
    .execute(pool)
    .await?;
    log::info!("MySQL table initialized successfully.");
    Ok(())
}
