// Domain layer - Stations, samples, and chart specifications
pub mod dashboard;
pub mod station;
pub mod telemetry;
