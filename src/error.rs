use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected at least 2 tables on the page, found {found}")]
    MissingTable { found: usize },
    #[error("row {row} has {cells} cells but the header has {headers}")]
    RaggedRow {
        row: usize,
        cells: usize,
        headers: usize,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("column {0:?} not found in the extracted table")]
    MissingColumn(String),
    #[error("row {row}: cannot parse rank from {value:?}")]
    InvalidRank { row: usize, value: String },
    #[error("row {row}: cannot parse revenue from {value:?}")]
    InvalidRevenue { row: usize, value: String },
    #[error("row {row}: cannot parse employee count from {value:?}")]
    InvalidEmployees { row: usize, value: String },
}

/// One variant per pipeline stage. Errors are logged where they occur and
/// propagated unmodified; any failure is fatal to the run.
#[derive(Debug, Error)]
pub enum EtlError {
    #[error("extraction failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("page parsing failed: {0}")]
    Parse(#[from] ParseError),
    #[error("transformation failed: {0}")]
    Transform(#[from] TransformError),
    #[error("schema initialization failed: {0}")]
    Schema(#[source] sqlx::Error),
    #[error("load failed: {0}")]
    Load(#[source] sqlx::Error),
}
