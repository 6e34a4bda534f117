//! Browser capability bridge used by the `platform_host_web` adapters.

mod interop;

use serde::de::DeserializeOwned;

pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    interop::fetch_json(url).await
}

/// Percent-encodes `segment` the way `encodeURIComponent` does (identity off wasm).
pub fn encode_path_segment(segment: &str) -> String {
    interop::encode_path_segment(segment)
}

pub async fn open_external_url(url: &str) -> Result<(), String> {
    interop::open_external_url(url).await
}
