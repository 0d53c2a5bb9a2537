pub mod format;
pub mod table;

pub use format::{format_change, format_money};
pub use table::Table;
