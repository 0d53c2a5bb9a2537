//! Prompt text construction and the declared JSON response shape

use serde_json::json;

use crate::models::TripRequest;

/// Build the itinerary generation prompt for a trip request
pub fn quote_prompt(request: &TripRequest) -> String {
    let mut prompt = format!(
        "You are a travel booking assistant. Generate a realistic flight and hotel \
         itinerary for {travelers} traveler(s) from {origin} to {destination}, \
         departing {depart}",
        travelers = request.travelers,
        origin = request.origin,
        destination = request.destination,
        depart = request.depart,
    );

    match request.ret {
        Some(ret) => {
            prompt.push_str(&format!(
                ", returning {}. Include outbound and return flight legs.",
                ret
            ));
        }
        None => prompt.push_str(". One-way trip, outbound leg only."),
    }

    prompt.push_str(&format!(
        " Quote all prices in {currency}. Use plausible carriers, flight numbers and \
         local times for the route, and 2-3 hotel options near the destination. \
         totalFlightCost must equal the sum of all flight leg prices multiplied by \
         the number of travelers. Respond with JSON only.",
        currency = request.currency,
    ));

    prompt
}

/// Response schema sent with the quote request so the model answers in the
/// `TripQuote` shape
pub fn quote_response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "flights": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "airline": {"type": "STRING"},
                        "flightNumber": {"type": "STRING"},
                        "origin": {"type": "STRING"},
                        "destination": {"type": "STRING"},
                        "departureTime": {"type": "STRING"},
                        "arrivalTime": {"type": "STRING"},
                        "price": {"type": "NUMBER"}
                    },
                    "required": [
                        "airline", "flightNumber", "origin", "destination",
                        "departureTime", "arrivalTime", "price"
                    ]
                }
            },
            "hotels": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": {"type": "STRING"},
                        "area": {"type": "STRING"},
                        "nightlyRate": {"type": "NUMBER"},
                        "rating": {"type": "NUMBER"}
                    },
                    "required": ["name", "area", "nightlyRate", "rating"]
                }
            },
            "totalFlightCost": {"type": "NUMBER"},
            "currency": {"type": "STRING"},
            "notes": {"type": "STRING"}
        },
        "required": ["flights", "hotels", "totalFlightCost", "currency"]
    })
}

/// Build the price-change narration prompt.
///
/// `previous` is the ledger's pre-append baseline; the model narrates the move
/// from it to `current`.
pub fn narration_prompt(request: &TripRequest, previous: f64, current: f64) -> String {
    format!(
        "The total flight cost for the route {origin} to {destination} was \
         {previous:.2} {currency} on the previous search and is {current:.2} \
         {currency} now. Write one short, friendly sentence for a traveler \
         describing this price change (or that it is unchanged). No preamble.",
        origin = request.origin,
        destination = request.destination,
        previous = previous,
        current = current,
        currency = request.currency,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request() -> TripRequest {
        TripRequest {
            origin: "MNL".to_string(),
            destination: "NRT".to_string(),
            depart: NaiveDate::from_ymd_opt(2025, 7, 10).unwrap(),
            ret: Some(NaiveDate::from_ymd_opt(2025, 7, 17).unwrap()),
            travelers: 2,
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn test_quote_prompt_mentions_route_and_dates() {
        let prompt = quote_prompt(&request());
        assert!(prompt.contains("MNL"));
        assert!(prompt.contains("NRT"));
        assert!(prompt.contains("2025-07-10"));
        assert!(prompt.contains("returning 2025-07-17"));
        assert!(prompt.contains("USD"));
    }

    #[test]
    fn test_one_way_prompt() {
        let mut req = request();
        req.ret = None;
        let prompt = quote_prompt(&req);
        assert!(prompt.contains("One-way"));
        assert!(!prompt.contains("returning"));
    }

    #[test]
    fn test_schema_declares_required_quote_fields() {
        let schema = quote_response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(required.contains(&"totalFlightCost"));
        assert!(required.contains(&"flights"));
    }

    #[test]
    fn test_narration_prompt_carries_both_prices() {
        let prompt = narration_prompt(&request(), 480.0, 455.5);
        assert!(prompt.contains("480.00"));
        assert!(prompt.contains("455.50"));
    }
}
