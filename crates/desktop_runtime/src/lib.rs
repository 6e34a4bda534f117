//! Desktop window manager runtime: state model, reducer, app catalog, launch dispatch, and the
//! Leptos shell that renders windows, dock, menu bar, and overlays.

pub mod apps;
pub mod components;
mod effect_executor;
pub mod geometry;
mod host;
pub mod launcher;
pub mod model;
pub mod reducer;
pub mod resolve;
mod runtime_context;
pub mod window_manager;

pub use apps::{AppCatalog, InternalApp};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use host::DesktopHostContext;
pub use launcher::{launch_action, LaunchError};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use resolve::{resolve_window_view, WindowView};
