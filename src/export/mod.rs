//! Export of filtered feed snapshots to CSV and JSON files.

pub mod csv_export;
pub mod json_export;
