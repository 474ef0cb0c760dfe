/// Year clock yielding (day, hour) pairs.
pub mod clock;
pub mod engine;
pub mod kpi;
pub mod types;
