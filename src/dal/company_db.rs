use sqlx::MySqlPool;

use crate::domain::CompanyRecord;

/// Appends one snapshot inside a single transaction: either every record
/// lands or none do. A duplicate (name, extracted_at) pair trips the
/// table's uniqueness constraint and rolls the whole batch back.
pub async fn insert_companies(
    pool: &MySqlPool,
    records: &[CompanyRecord],
) -> Result<(), sqlx::Error> {
    let mut transaction = pool.begin().await?;

    for record in records {
        sqlx::query(
            r#"
            INSERT INTO largest_companies (
                `rank`, name, industry, revenue_billions, employees,
                hq_location, hq_city, hq_state, industry_category, extracted_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.rank)
        .bind(&record.name)
        .bind(&record.industry)
        .bind(record.revenue_billions)
        .bind(record.employees)
        .bind(&record.hq_location)
        .bind(record.hq_city.as_deref())
        .bind(record.hq_state.as_deref())
        .bind(record.industry_category.as_str())
        .bind(record.extracted_at)
        .execute(&mut *transaction)
        .await?;
    }

    transaction.commit().await?;

    log::info!("{} companies loaded into MySQL.", records.len());
    Ok(())
}
