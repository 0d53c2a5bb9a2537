use crate::models::{PriceHistory, TripQuote};
use crate::utils::{format_change, format_money, Table};

/// Print the recorded searches with their period-over-period deltas
pub fn execute(history: &PriceHistory<TripQuote>) -> Result<(), String> {
    if history.is_empty() {
        println!("No searches recorded yet. Run `tripquote quote` first.");
        return Ok(());
    }

    let mut table = Table::new(vec!["#", "Searched", "Route", "Price", "Change"]);

    // The derived series carries no payload, so walk it alongside the
    // observations to label each row with its route
    for (i, (observation, point)) in history.entries().zip(history.derive_series()).enumerate() {
        let quote = &observation.payload;
        let route = quote
            .flights
            .first()
            .map(|leg| format!("{} → {}", leg.origin, leg.destination))
            .unwrap_or_else(|| "—".to_string());

        table.add_row(vec![
            (i + 1).to_string(),
            point.date.format("%Y-%m-%d %H:%M").to_string(),
            route,
            format_money(point.price, &quote.currency),
            format_change(point.change, &quote.currency),
        ]);
    }

    println!("{}", table.render());
    println!(
        "{} of last {} searches kept (oldest evicted first)",
        history.len(),
        history.capacity()
    );

    Ok(())
}
