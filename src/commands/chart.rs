use std::path::Path;

use tracing::info;

use crate::models::{PriceHistory, TripQuote};
use crate::services::chart_service;

/// Render the price history as a PNG point chart
pub fn execute(
    history: &PriceHistory<TripQuote>,
    output: &Path,
    width: u32,
    height: u32,
) -> Result<(), String> {
    chart_service::generate_chart(history, "Flight price history", output, width, height)?;
    info!("✓ Chart written to {} ({}x{})", output.display(), width, height);
    println!("Chart written to {}", output.display());
    Ok(())
}
