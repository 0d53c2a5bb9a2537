use crate::api::GeminiClient;
use crate::models::{PriceHistory, TripQuote, TripRequest};
use crate::services::quote_service;
use crate::storage::HistoryStore;
use crate::utils::{format_change, format_money, Table};

/// Run a trip search and print the generated itinerary
pub async fn execute(
    client: &GeminiClient,
    store: &HistoryStore,
    history: &mut PriceHistory<TripQuote>,
    request: TripRequest,
) -> Result<(), String> {
    let outcome = quote_service::run_trip_search(client, store, history, &request).await?;
    let quote = &outcome.quote;

    println!("✈️  {}", request.route());
    match (request.ret, request.nights()) {
        (Some(ret), Some(nights)) => println!(
            "   {} → {} ({} night(s)), {} traveler(s)",
            request.depart, ret, nights, request.travelers
        ),
        _ => println!(
            "   {} (one-way), {} traveler(s)",
            request.depart, request.travelers
        ),
    }
    println!();

    let mut flights = Table::new(vec!["Carrier", "Route", "Departs", "Arrives", "Price"]);
    for leg in &quote.flights {
        flights.add_row(vec![
            format!("{} {}", leg.airline, leg.flight_number),
            format!("{} → {}", leg.origin, leg.destination),
            leg.departure_time.clone(),
            leg.arrival_time.clone(),
            format_money(leg.price, &quote.currency),
        ]);
    }
    println!("{}", flights.render());

    if !quote.hotels.is_empty() {
        let mut hotels = Table::new(vec!["Hotel", "Area", "Per night", "Rating"]);
        for hotel in &quote.hotels {
            hotels.add_row(vec![
                hotel.name.clone(),
                hotel.area.clone(),
                format_money(hotel.nightly_rate, &quote.currency),
                format!("{:.1}", hotel.rating),
            ]);
        }
        println!("{}", hotels.render());
    }

    println!(
        "Total flights: {}",
        format_money(quote.total_flight_cost, &quote.currency)
    );
    println!(
        "Vs. previous search: {}",
        format_change(
            outcome
                .previous_price
                .map(|prev| quote.total_flight_cost - prev),
            &quote.currency
        )
    );

    if let Some(narrative) = &outcome.narrative {
        println!("💬 {}", narrative);
    }
    if let Some(notes) = &quote.notes {
        println!("📝 {}", notes);
    }

    Ok(())
}
