//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for the app catalog, notes and
//! project content (HTTP `fetch` against the portfolio API), and external URL opening
//! (`window.open`).
//!
//! Transport glue lives under `bridge::interop`, split into wasm and non-wasm implementations so
//! the crate still builds and tests natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the host bundle factory for runtime wiring.
pub mod adapters;
mod bridge;
pub mod config;
pub mod content;
pub mod external_url;

pub use adapters::{build_host_services, host_strategy_name, selected_host_strategy, HostStrategy};
pub use bridge::encode_path_segment;
pub use config::{api_base_url, api_url, DEFAULT_API_BASE};
pub use content::{HttpAppCatalogSource, HttpNotesSource, HttpProjectsSource};
pub use external_url::WebExternalUrlService;
