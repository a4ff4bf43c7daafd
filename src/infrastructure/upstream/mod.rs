//! Outbound integration with the statistics API.

mod wakapi_client;

pub use wakapi_client::{DEFAULT_BASE_URL, WakapiClient};
