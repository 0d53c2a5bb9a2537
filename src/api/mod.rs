pub mod gemini;

pub use gemini::{ApiError, GeminiClient};

use crate::models::{TripQuote, TripRequest};

/// The generative model service as seen by the rest of the application.
///
/// The trip-search orchestrator only depends on this trait; tests substitute
/// a canned implementation so no network call is involved.
#[allow(async_fn_in_trait)]
pub trait QuoteModel {
    /// Generate a structured itinerary for the request
    async fn generate_quote(&self, request: &TripRequest) -> Result<TripQuote, ApiError>;

    /// Narrate the move from the previous total flight cost to the current one
    async fn narrate_price_change(
        &self,
        request: &TripRequest,
        previous: f64,
        current: f64,
    ) -> Result<String, ApiError>;
}
