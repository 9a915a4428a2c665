pub mod csv;
pub mod download;
pub mod time;

pub use download::trigger_csv_download;
