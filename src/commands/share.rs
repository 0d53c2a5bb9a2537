use crate::models::{PriceHistory, TripQuote};
use crate::services::summary_service;

/// Print a paste-ready summary of the latest search
pub fn execute(history: &PriceHistory<TripQuote>) -> Result<(), String> {
    let summary = summary_service::share_summary(history)?;
    println!("{}", summary);
    Ok(())
}
