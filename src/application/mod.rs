// Application layer - Live buffers, selection, and chart projection
pub mod chart_service;
pub mod selection;
pub mod series_store;
