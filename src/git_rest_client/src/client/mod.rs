pub mod endpoints;
mod rest_client;

pub use rest_client::{RestClient, Result};

use serde::Serialize;
use serde_json::Value;
use std::sync::LazyLock;

static DEFAULT_CLIENT: LazyLock<RestClient> = LazyLock::new(RestClient::new);

/// Shared client for the default backend; its connection pool is reused across calls.
pub fn default_client() -> &'static RestClient {
    &DEFAULT_CLIENT
}

/// Sends `request` to the default backend's `/filterData` endpoint and returns the JSON reply.
pub async fn execute<T>(request: &T) -> Result<Value>
where
    T: Serialize + ?Sized,
{
    default_client().execute(request).await
}
