use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::QuoteModel;
use crate::models::{Observation, PriceHistory, TripQuote, TripRequest};
use crate::storage::HistoryStore;

/// Result of one trip search, ready for display
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub quote: TripQuote,
    /// Ledger baseline read before this search was appended
    pub previous_price: Option<f64>,
    /// Model-written change narrative; only present when a baseline existed
    pub narrative: Option<String>,
}

/// Run one trip search end to end.
///
/// The ledger baseline is read before the model call, and the ledger is only
/// appended to after a fully successful result: a failed or abandoned search
/// leaves it untouched. The persisted file is refreshed after every append;
/// a save failure is logged but does not fail the search.
pub async fn run_trip_search<M: QuoteModel>(
    model: &M,
    store: &HistoryStore,
    history: &mut PriceHistory<TripQuote>,
    request: &TripRequest,
) -> Result<SearchOutcome, String> {
    request.validate()?;

    let search_id = Uuid::new_v4();
    info!(
        "🔎 [{}] Searching trips {} for {} traveler(s), departing {}",
        search_id,
        request.route(),
        request.travelers,
        request.depart
    );

    // Baseline must come from the pre-append state
    let previous_price = history.latest_reference_price();

    let quote = model
        .generate_quote(request)
        .await
        .map_err(|e| format!("❌ Trip search failed: {}", e))?;

    if !quote.total_flight_cost.is_finite() || quote.total_flight_cost < 0.0 {
        return Err(format!(
            "❌ Model returned an invalid total flight cost: {}",
            quote.total_flight_cost
        ));
    }

    info!(
        "✓ [{}] Got {} flight leg(s) and {} hotel(s), total {:.2} {}",
        search_id,
        quote.flights.len(),
        quote.hotels.len(),
        quote.total_flight_cost,
        quote.currency
    );

    let narrative = match previous_price {
        Some(previous) => {
            match model
                .narrate_price_change(request, previous, quote.total_flight_cost)
                .await
            {
                Ok(text) => Some(text),
                Err(e) => {
                    // Narration is decoration; the search still counts
                    warn!("[{}] Price-change narration failed: {}", search_id, e);
                    None
                }
            }
        }
        None => None,
    };

    history.append(Observation::new(
        Utc::now(),
        quote.total_flight_cost,
        quote.clone(),
    ));

    if let Err(e) = store.save(history) {
        warn!(
            "[{}] Could not persist history to {}: {}",
            search_id,
            store.path().display(),
            e
        );
    }

    Ok(SearchOutcome {
        quote,
        previous_price,
        narrative,
    })
}
