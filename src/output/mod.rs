// ABOUTME: Text output for the report.
// ABOUTME: Elastic tab-stop tables and figlet section banners.

pub mod banner;
mod table;

pub use banner::BannerError;
pub use table::Table;
