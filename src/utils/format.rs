//! Money and delta formatting helpers

/// Format an amount with its currency, e.g. "480.00 USD"
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}

/// Format a period-over-period delta.
///
/// `None` (no baseline) and `Some(0.0)` (unchanged) are different states and
/// must never look the same:
/// - `None`      → "— (first search)"
/// - `Some(0.0)` → "±0.00 USD (stable)"
/// - otherwise   → "▲ +20.00 USD" / "▼ -30.00 USD"
pub fn format_change(change: Option<f64>, currency: &str) -> String {
    match change {
        None => "— (first search)".to_string(),
        Some(delta) if delta == 0.0 => format!("±0.00 {} (stable)", currency),
        Some(delta) if delta > 0.0 => format!("▲ +{:.2} {}", delta, currency),
        Some(delta) => format!("▼ {:.2} {}", delta, currency),
    }
}
