pub mod error;
pub mod fetcher;
mod power_response;
