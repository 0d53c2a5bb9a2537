//! Structured itinerary returned by the model
//!
//! These structs are the declared JSON response shape sent to the model as a
//! response schema; field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

/// One flight leg of the generated itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightLeg {
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub price: f64,
}

/// One hotel suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelOption {
    pub name: String,
    pub area: String,
    pub nightly_rate: f64,
    pub rating: f64,
}

/// Full generated trip result; stored verbatim as the observation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripQuote {
    pub flights: Vec<FlightLeg>,
    pub hotels: Vec<HotelOption>,
    /// Total flight cost across all legs and travelers; the price the
    /// history ledger tracks over time
    pub total_flight_cost: f64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
