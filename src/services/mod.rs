pub mod fetcher;
pub mod table_parser;
pub mod transformer;

pub use fetcher::*;
pub use table_parser::*;
pub use transformer::*;
