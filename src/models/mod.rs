//! Data models for tripquote commands and services
//!
//! This module organizes the trip request, the model's structured quote
//! response, and the bounded price-history ledger.

pub mod history;
pub mod quote;
pub mod trip;

// Re-export commonly used types for convenience
pub use history::{DerivedPoint, Observation, PriceHistory, DEFAULT_CAPACITY};
pub use quote::{FlightLeg, HotelOption, TripQuote};
pub use trip::TripRequest;
