//! File formats: JSON series persistence, quarter-hour production
//! ingestion, and CSV telemetry export.

pub mod export;
pub mod ingest;
pub mod store;
