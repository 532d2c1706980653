use std::time::Duration;

use companies_etl::{configuration::get_configuration, pipeline::Pipeline};
use env_logger::Env;
use sqlx::mysql::MySqlPoolOptions;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let pool_options = MySqlPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10));
    let connection_pool = pool_options.connect_lazy_with(configuration.database.with_db());

    let mut pipeline = Pipeline::new(configuration, connection_pool);
    match pipeline.run().await {
        Ok(records) => {
            for record in records.iter().take(5) {
                println!("{}", record);
            }
        }
        Err(e) => {
            log::error!("ETL pipeline failed: {}", e);
            std::process::exit(1);
        }
    }
}
