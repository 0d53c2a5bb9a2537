//! CSV export of the full observation sequence
//!
//! One ledger entry becomes one row per flight leg; this flattening reads the
//! raw observations, not the derived series.

use crate::models::{FlightLeg, Observation, PriceHistory, TripQuote};

const CSV_HEADER: &str =
    "searched_at,origin,destination,carrier,departure_time,arrival_time,price,booking_link";

/// Render the whole history as CSV text, oldest search first
pub fn history_to_csv(history: &PriceHistory<TripQuote>) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for observation in history.entries() {
        for leg in &observation.payload.flights {
            out.push_str(&leg_row(observation, leg));
            out.push('\n');
        }
    }

    out
}

fn leg_row(observation: &Observation<TripQuote>, leg: &FlightLeg) -> String {
    let carrier = format!("{} {}", leg.airline, leg.flight_number);
    [
        observation
            .observed_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        leg.origin.clone(),
        leg.destination.clone(),
        carrier,
        leg.departure_time.clone(),
        leg.arrival_time.clone(),
        format!("{:.2}", leg.price),
        booking_link(leg),
    ]
    .iter()
    .map(|field| escape_field(field))
    .collect::<Vec<String>>()
    .join(",")
}

/// Deep link to a flight search for the leg
fn booking_link(leg: &FlightLeg) -> String {
    format!(
        "https://www.google.com/travel/flights?q={}",
        urlencoding::encode(&format!(
            "flights from {} to {}",
            leg.origin, leg.destination
        ))
    )
}

/// Quote a CSV field when it contains a delimiter, quote or newline
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_CAPACITY;
    use chrono::{TimeZone, Utc};

    fn leg(origin: &str, destination: &str, price: f64) -> FlightLeg {
        FlightLeg {
            airline: "Philippine Airlines".to_string(),
            flight_number: "PR 428".to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_time: "2025-07-10 09:30".to_string(),
            arrival_time: "2025-07-10 14:55".to_string(),
            price,
        }
    }

    fn history_with_one_round_trip() -> PriceHistory<TripQuote> {
        let quote = TripQuote {
            flights: vec![leg("MNL", "NRT", 245.0), leg("NRT", "MNL", 235.0)],
            hotels: vec![],
            total_flight_cost: 480.0,
            currency: "USD".to_string(),
            notes: None,
        };
        let mut history = PriceHistory::new(DEFAULT_CAPACITY);
        history.append(Observation::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
            480.0,
            quote,
        ));
        history
    }

    #[test]
    fn test_one_row_per_flight_leg() {
        let csv = history_to_csv(&history_with_one_round_trip());
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        // header + two legs from the single observation
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("2025-06-01 09:00:00,MNL,NRT"));
        assert!(lines[2].starts_with("2025-06-01 09:00:00,NRT,MNL"));
    }

    #[test]
    fn test_empty_history_is_header_only() {
        let history: PriceHistory<TripQuote> = PriceHistory::new(DEFAULT_CAPACITY);
        let csv = history_to_csv(&history);
        assert_eq!(csv.trim_end(), CSV_HEADER);
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut history = history_with_one_round_trip();
        let mut quote = history.latest().unwrap().payload.clone();
        quote.flights[0].airline = "Air, Cheap".to_string();
        history = {
            let mut fresh = PriceHistory::new(DEFAULT_CAPACITY);
            fresh.append(Observation::new(
                Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
                480.0,
                quote,
            ));
            fresh
        };

        let csv = history_to_csv(&history);
        assert!(csv.contains("\"Air, Cheap PR 428\""));
    }

    #[test]
    fn test_booking_link_column_present_and_encoded() {
        let csv = history_to_csv(&history_with_one_round_trip());
        assert!(csv.contains("https://www.google.com/travel/flights?q=flights%20from%20MNL%20to%20NRT"));
    }

    #[test]
    fn test_booking_link_encodes_non_ascii_places() {
        let quote = TripQuote {
            flights: vec![leg("MNL", "San José", 310.0)],
            hotels: vec![],
            total_flight_cost: 310.0,
            currency: "USD".to_string(),
            notes: None,
        };
        let mut history = PriceHistory::new(DEFAULT_CAPACITY);
        history.append(Observation::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
            310.0,
            quote,
        ));

        let csv = history_to_csv(&history);
        assert!(csv.contains("San%20Jos%C3%A9"));
    }
}
