pub mod chart_service;
pub mod export_service;
pub mod quote_service;
pub mod summary_service;
