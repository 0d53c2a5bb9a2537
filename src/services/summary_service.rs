//! Shareable plain-text summary of the latest search

use crate::models::{PriceHistory, TripQuote};
use crate::utils::format_change;

/// Build a paste-ready summary of the most recent observation.
///
/// Returns an error when the history is empty.
pub fn share_summary(history: &PriceHistory<TripQuote>) -> Result<String, String> {
    let latest = history
        .latest()
        .ok_or("❌ No searches yet. Run `tripquote quote` first.")?;
    let quote = &latest.payload;

    let mut out = String::from("✈️ Trip quote\n");
    out.push_str(&format!(
        "Searched: {}\n",
        latest.observed_at.format("%Y-%m-%d %H:%M UTC")
    ));

    for leg in &quote.flights {
        out.push_str(&format!(
            "  {} → {}  {} {}  dep {}  arr {}  {:.2} {}\n",
            leg.origin,
            leg.destination,
            leg.airline,
            leg.flight_number,
            leg.departure_time,
            leg.arrival_time,
            leg.price,
            quote.currency
        ));
    }

    for hotel in &quote.hotels {
        out.push_str(&format!(
            "  🏨 {} ({})  {:.2} {}/night  rated {:.1}\n",
            hotel.name, hotel.area, hotel.nightly_rate, quote.currency, hotel.rating
        ));
    }

    out.push_str(&format!(
        "Total flights: {:.2} {}\n",
        quote.total_flight_cost, quote.currency
    ));

    // Delta of the latest point vs. its predecessor; distinct "no baseline"
    // and "unchanged" renderings
    let last_change = history.derive_series().last().and_then(|p| p.change);
    out.push_str(&format!(
        "Since previous search: {}\n",
        format_change(last_change, &quote.currency)
    ));

    if let Some(notes) = &quote.notes {
        out.push_str(&format!("Notes: {}\n", notes));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FlightLeg, Observation, DEFAULT_CAPACITY};
    use chrono::{TimeZone, Utc};

    fn quote(total: f64) -> TripQuote {
        TripQuote {
            flights: vec![FlightLeg {
                airline: "ANA".to_string(),
                flight_number: "NH 820".to_string(),
                origin: "MNL".to_string(),
                destination: "NRT".to_string(),
                departure_time: "2025-07-10 09:30".to_string(),
                arrival_time: "2025-07-10 14:55".to_string(),
                price: total,
            }],
            hotels: vec![],
            total_flight_cost: total,
            currency: "USD".to_string(),
            notes: None,
        }
    }

    fn observe(history: &mut PriceHistory<TripQuote>, minute: u32, total: f64) {
        history.append(Observation::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 9, minute, 0).unwrap(),
            total,
            quote(total),
        ));
    }

    #[test]
    fn test_empty_history_is_an_error() {
        let history: PriceHistory<TripQuote> = PriceHistory::new(DEFAULT_CAPACITY);
        assert!(share_summary(&history).is_err());
    }

    #[test]
    fn test_first_search_shows_no_baseline() {
        let mut history = PriceHistory::new(DEFAULT_CAPACITY);
        observe(&mut history, 0, 480.0);

        let summary = share_summary(&history).unwrap();
        assert!(summary.contains("MNL → NRT"));
        assert!(summary.contains("Total flights: 480.00 USD"));
        assert!(summary.contains("Since previous search: — (first search)"));
    }

    #[test]
    fn test_unchanged_price_is_not_rendered_as_no_baseline() {
        let mut history = PriceHistory::new(DEFAULT_CAPACITY);
        observe(&mut history, 0, 480.0);
        observe(&mut history, 5, 480.0);

        let summary = share_summary(&history).unwrap();
        assert!(summary.contains("±0.00 USD (stable)"));
        assert!(!summary.contains("first search"));
    }

    #[test]
    fn test_price_drop_shows_signed_delta() {
        let mut history = PriceHistory::new(DEFAULT_CAPACITY);
        observe(&mut history, 0, 480.0);
        observe(&mut history, 5, 450.0);

        let summary = share_summary(&history).unwrap();
        assert!(summary.contains("▼ -30.00 USD"));
    }
}
