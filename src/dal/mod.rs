pub mod company_db;
pub mod schema_db;
