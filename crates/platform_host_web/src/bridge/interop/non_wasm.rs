use super::*;

fn unsupported() -> String {
    "Browser fetch and window APIs are only available when compiled for wasm32".to_string()
}

pub async fn fetch_json<T: DeserializeOwned>(_url: &str) -> Result<T, String> {
    Err(unsupported())
}

pub fn encode_path_segment(segment: &str) -> String {
    segment.to_string()
}

pub async fn open_external_url(_url: &str) -> Result<(), String> {
    Err(unsupported())
}
