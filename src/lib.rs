//! ETL pipeline that scrapes the largest-US-companies table from Wikipedia
//! and appends it to MySQL as a timestamped snapshot.

pub mod configuration;
pub mod dal;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod services;
