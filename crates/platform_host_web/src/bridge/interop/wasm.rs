use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::*;

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn browser_window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "browser window is unavailable".to_string())
}

pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let window = browser_window()?;
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(format!("HTTP {} for {url}", response.status()));
    }

    let body = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(body).map_err(|err| err.to_string())
}

pub fn encode_path_segment(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}

pub async fn open_external_url(url: &str) -> Result<(), String> {
    let window = browser_window()?;
    window
        .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
        .map(|_| ())
        .map_err(js_error)
}
