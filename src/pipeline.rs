use chrono::Utc;
use sqlx::MySqlPool;

use crate::{
    configuration::Settings,
    dal::{company_db, schema_db},
    domain::CompanyRecord,
    error::EtlError,
    services::{fetcher, table_parser, transformer},
};

/// Stages a run passes through, in order. There is no retry: a failure at
/// any stage ends the run with the stage's error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    DatabaseEnsured,
    Extracted,
    Transformed,
    TableEnsured,
    Loaded,
    Done,
}

pub struct Pipeline {
    settings: Settings,
    pool: MySqlPool,
    client: reqwest::Client,
    stage: Stage,
}

impl Pipeline {
    pub fn new(settings: Settings, pool: MySqlPool) -> Self {
        Pipeline {
            settings,
            pool,
            client: reqwest::Client::new(),
            stage: Stage::Init,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn advance(&mut self, stage: Stage) {
        self.stage = stage;
        log::info!("Pipeline stage: {:?}", stage);
    }

    /// Runs the full extract-transform-load sequence once and returns the
    /// transformed records for caller introspection.
    pub async fn run(&mut self) -> Result<Vec<CompanyRecord>, EtlError> {
        log::info!("Starting ETL pipeline...");

        schema_db::ensure_database(&self.settings.database)
            .await
            .map_err(|e| {
                log::error!("Error creating database: {:?}", e);
                EtlError::Schema(e)
            })?;
        self.advance(Stage::DatabaseEnsured);

        let html = fetcher::fetch_page(&self.client, &self.settings.source_url).await?;
        let raw_table = table_parser::parse_second_table(&html)?;
        self.advance(Stage::Extracted);

        // One timestamp per run; the whole snapshot shares it.
        let extracted_at = Utc::now().naive_utc();
        let records = transformer::transform(&raw_table, extracted_at).map_err(|e| {
            log::error!("Transformation failed: {}", e);
            e
        })?;
        self.advance(Stage::Transformed);

        schema_db::ensure_table(&self.pool).await.map_err(|e| {
            log::error!("Failed to create table: {:?}", e);
            EtlError::Schema(e)
        })?;
        self.advance(Stage::TableEnsured);

        company_db::insert_companies(&self.pool, &records)
            .await
            .map_err(|e| {
                log::error!("Failed to load data into MySQL: {:?}", e);
                EtlError::Load(e)
            })?;
        self.advance(Stage::Loaded);

        log::info!("ETL pipeline completed successfully!");
        self.advance(Stage::Done);
        Ok(records)
    }
}
