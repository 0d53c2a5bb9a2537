pub mod chart;
pub mod export;
pub mod history;
pub mod quote;
pub mod share;
