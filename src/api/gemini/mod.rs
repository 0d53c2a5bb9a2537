pub mod client;
pub mod models;
pub mod prompt;

pub use client::GeminiClient;
pub use models::ApiError;
