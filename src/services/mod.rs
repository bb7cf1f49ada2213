pub mod api_client;
pub mod payloads;
pub mod prediction;
