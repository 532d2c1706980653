//! End-to-end load behaviour against a real MySQL server.
//!
//! These tests are ignored by default; run them with a server reachable
//! through `configuration.yaml` (or `APP_DATABASE__*` overrides):
//!
//!     cargo test -- --ignored

use chrono::{Duration, NaiveDateTime, Utc};
use companies_etl::{
    configuration::{get_configuration, DatabaseSettings},
    dal::{company_db, schema_db},
    domain::CompanyRecord,
    services::{table_parser, transformer},
};
use sqlx::{mysql::MySqlPoolOptions, MySqlPool};
use uuid::Uuid;

const FIXTURE_PAGE: &str = r#"
    <html><body>
    <table>
        <tr><th>Contents</th></tr>
        <tr><td>navigation box</td></tr>
    </table>
    <table>
        <tr>
            <th>Rank</th>
            <th>Name</th>
            <th>Industry</th>
            <th>Revenue (USD billions)</th>
            <th>Employees</th>
            <th>Headquarters</th>
        </tr>
        <tr>
            <td>1</td><td>Walmart</td><td>Retail</td>
            <td>611.3[1]</td><td>2,100,000</td><td>Bentonville, Arkansas</td>
        </tr>
        <tr>
            <td>2</td><td>ExxonMobil</td><td>Petroleum industry</td>
            <td>413.7</td><td>62,000</td><td>Spring, Texas</td>
        </tr>
        <tr>
            <td>3</td><td>Sysco</td><td>Food distribution</td>
            <td>76.3</td><td>71,750</td><td>Houston, Texas</td>
        </tr>
    </table>
    </body></html>
"#;

async fn configure_test_database() -> (DatabaseSettings, MySqlPool) {
    let mut settings = get_configuration()
        .expect("Failed to read configuration.")
        .database;
    settings.database_name = format!("companies_test_{}", Uuid::new_v4().simple());

    schema_db::ensure_database(&settings)
        .await
        .expect("Failed to create test database");

    let pool = MySqlPoolOptions::new()
        .max_connections(2)
        .connect_with(settings.with_db())
        .await
        .expect("Failed to connect to test database");
    schema_db::ensure_table(&pool)
        .await
        .expect("Failed to create table");

    (settings, pool)
}

fn fixture_snapshot(extracted_at: NaiveDateTime) -> Vec<CompanyRecord> {
    let raw_table = table_parser::parse_second_table(FIXTURE_PAGE).unwrap();
    transformer::transform(&raw_table, extracted_at).unwrap()
}

async fn row_count(pool: &MySqlPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM largest_companies")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
#[ignore = "needs a running MySQL server"]
async fn schema_init_is_idempotent() {
    let (settings, pool) = configure_test_database().await;

    schema_db::ensure_database(&settings).await.unwrap();
    schema_db::ensure_table(&pool).await.unwrap();

    assert_eq!(row_count(&pool).await, 0);
}

#[tokio::test]
#[ignore = "needs a running MySQL server"]
async fn two_runs_append_two_snapshots() {
    let (_settings, pool) = configure_test_database().await;
    let first_run = Utc::now().naive_utc();
    let second_run = first_run + Duration::seconds(60);

    company_db::insert_companies(&pool, &fixture_snapshot(first_run))
        .await
        .unwrap();
    assert_eq!(row_count(&pool).await, 3);

    company_db::insert_companies(&pool, &fixture_snapshot(second_run))
        .await
        .unwrap();
    assert_eq!(row_count(&pool).await, 6);

    let distinct_runs: i64 =
        sqlx::query_scalar("SELECT COUNT(DISTINCT extracted_at) FROM largest_companies")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(distinct_runs, 2);
}

#[tokio::test]
#[ignore = "needs a running MySQL server"]
async fn frozen_timestamp_fails_and_rolls_back() {
    let (_settings, pool) = configure_test_database().await;
    let frozen = Utc::now().naive_utc();
    let snapshot = fixture_snapshot(frozen);

    company_db::insert_companies(&pool, &snapshot).await.unwrap();

    let result = company_db::insert_companies(&pool, &snapshot).await;

    assert!(result.is_err());
    // All-or-nothing: the failed second batch leaves no partial rows behind.
    assert_eq!(row_count(&pool).await, 3);
}
