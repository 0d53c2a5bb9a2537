use std::fs;
use std::path::Path;

use tracing::info;

use crate::models::{PriceHistory, TripQuote};
use crate::services::export_service;

/// Write the full history as a CSV file, one row per flight leg
pub fn execute(history: &PriceHistory<TripQuote>, output: &Path) -> Result<(), String> {
    if history.is_empty() {
        return Err("❌ No searches recorded yet, nothing to export.".to_string());
    }

    let csv = export_service::history_to_csv(history);
    fs::write(output, &csv).map_err(|e| format!("❌ Failed to write {}: {}", output.display(), e))?;

    let rows = csv.lines().count().saturating_sub(1);
    info!("✓ Exported {} row(s) to {}", rows, output.display());
    println!("Exported {} row(s) to {}", rows, output.display());

    Ok(())
}
